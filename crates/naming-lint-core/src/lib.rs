//! # naming-lint-core
//!
//! Core framework for naming-convention linting over a language-agnostic
//! syntax tree.
//!
//! This crate provides the foundational traits and types shared by rules,
//! frontends and the host. It includes:
//!
//! - [`SyntaxNode`] the lowered tree rules walk
//! - [`Rule`] trait and [`ReportSink`] for per-declaration rules
//! - [`RuleMeta`] registration metadata (id, category, priority, severity)
//! - [`LanguageFrontend`] for parsing source text into a [`SyntaxNode`] tree
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use naming_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./app/src")
//!     .frontend(JavaFrontend::new())
//!     .rule(NamingConvention::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod frontend;
mod meta;
mod rule;
mod syntax;
mod types;

/// Utility modules for the analyzer and rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use frontend::{FrontendBox, FrontendError, LanguageFrontend};
pub use meta::{Category, Priority, RuleMeta};
pub use rule::{ReportSink, Rule, RuleBox};
pub use syntax::{Name, NodeKind, NodeKindTag, Span, SyntaxNode};
pub use types::{
    Label, LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
pub use utils::allowance::AllowCheck;

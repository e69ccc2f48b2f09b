//! # naming-lint-rules
//!
//! Built-in lint rules for naming-lint.
//!
//! Rules here only see the lowered [`SyntaxNode`] tree, so they apply to
//! every language a frontend exists for.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | `NamingConventionWarning` | `naming-convention` | Class names start uppercase, method names start lowercase |
//!
//! ## Usage
//!
//! ```ignore
//! use naming_lint_core::Analyzer;
//! use naming_lint_rules::NamingConvention;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(NamingConvention::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod naming_convention;
mod presets;

pub use naming_convention::{LetterBounds, NamingConvention};
pub use presets::{all_rules, configured_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use naming_lint_core::{Rule, Severity, SyntaxNode, Violation};

//! # naming-lint-ts
//!
//! Tree-sitter frontends for naming-lint.
//!
//! Each frontend parses one language with Tree-sitter and lowers the concrete
//! syntax tree into the language-agnostic
//! [`SyntaxNode`](naming_lint_core::SyntaxNode) tree from `naming-lint-core`:
//!
//! - [`JavaFrontend`] for `.java` sources
//! - [`KotlinFrontend`] for `.kt` and `.kts` sources
//!
//! Use [`default_frontends`] to register every supported language at once.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod java;
pub mod kotlin;
mod lower;

pub use java::JavaFrontend;
pub use kotlin::KotlinFrontend;

use naming_lint_core::{FrontendBox, LanguageFrontend};

/// Returns one frontend per supported language.
#[must_use]
pub fn default_frontends() -> Vec<FrontendBox> {
    vec![Box::new(JavaFrontend::new()), Box::new(KotlinFrontend::new())]
}

/// Finds the frontend handling `path`, if any.
#[must_use]
pub fn frontend_for(path: &std::path::Path) -> Option<FrontendBox> {
    default_frontends().into_iter().find(|f| f.handles(path))
}

//! Language frontends that turn source text into a [`SyntaxNode`] tree.
//!
//! `LanguageFrontend` is the extension point for adding new languages.

use crate::syntax::SyntaxNode;

/// Errors a frontend can report.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// The grammar could not be loaded into the parser.
    #[error("failed to load {language} grammar: {message}")]
    Language {
        /// Language identifier.
        language: &'static str,
        /// Loader error message.
        message: String,
    },

    /// The parser produced no tree.
    #[error("{language} parser produced no syntax tree")]
    Parse {
        /// Language identifier.
        language: &'static str,
    },
}

/// Parses one language into the lowered syntax tree.
///
/// Implementations must classify declarations from grammar information only
/// (for example, a constructor is flagged because the grammar says so, not
/// because its name matches the enclosing type).
pub trait LanguageFrontend: Send + Sync {
    /// Language identifier (e.g., `"java"`, `"kotlin"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this frontend handles, with leading dot.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses `source` and returns the root of the lowered tree.
    fn parse(&self, source: &str) -> Result<SyntaxNode, FrontendError>;

    /// Returns `true` if this frontend handles `path` by extension.
    fn handles(&self, path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions()
                    .iter()
                    .any(|known| known.trim_start_matches('.') == ext)
            })
    }
}

/// Type alias for boxed frontend trait objects.
pub type FrontendBox = Box<dyn LanguageFrontend>;

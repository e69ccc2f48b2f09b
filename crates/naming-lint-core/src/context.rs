//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to rules for the file being analyzed.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Identifier of the frontend that parsed the file (e.g., `"java"`).
    pub language: &'static str,
    /// Path relative to the project root, used in reported locations.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, language: &'static str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            language,
            relative_path,
        }
    }

    /// Returns the text of a 1-indexed line, if it exists.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<&'a str> {
        line.checked_sub(1)
            .and_then(|index| self.content.lines().nth(index))
    }
}

//! First-letter classification of declaration names.
//!
//! Both checks are stateless: they look at one identifier and either produce
//! a violation or nothing. An absent or empty identifier cannot be classified
//! and never produces a violation.

use std::path::Path;

use naming_lint_core::{Location, Name, Replacement, Suggestion, Violation};

use super::NamingConvention;

/// Message prefix for type names starting with a lowercase letter.
pub const TYPE_MESSAGE: &str = "the name of class must start with uppercase";

/// Message prefix for method names starting with an uppercase letter.
pub const METHOD_MESSAGE: &str = "the method must start with lowercase";

/// How the ASCII letter ranges are bounded.
///
/// `Exclusive` is the long-standing behaviour of this rule: a letter only
/// counts if its code point lies strictly between the two boundary letters, so
/// `a`, `z`, `A` and `Z` never trigger. `Inclusive` covers the whole range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterBounds {
    /// `'a' < c < 'z'` and `'A' < c < 'Z'`.
    #[default]
    Exclusive,
    /// `'a'..='z'` and `'A'..='Z'`.
    Inclusive,
}

impl LetterBounds {
    /// Returns `true` if `c` counts as a lowercase letter.
    #[must_use]
    pub fn is_lowercase(self, c: char) -> bool {
        self.within(c, 'a', 'z')
    }

    /// Returns `true` if `c` counts as an uppercase letter.
    #[must_use]
    pub fn is_uppercase(self, c: char) -> bool {
        self.within(c, 'A', 'Z')
    }

    fn within(self, c: char, low: char, high: char) -> bool {
        match self {
            Self::Exclusive => low < c && c < high,
            Self::Inclusive => (low..=high).contains(&c),
        }
    }
}

impl NamingConvention {
    /// Checks a type declaration's name.
    ///
    /// Reports when the first character is a lowercase letter under the
    /// configured [`LetterBounds`]. The violation points at the identifier.
    #[must_use]
    pub fn check_type_name(&self, name: Option<&Name>, file: &Path) -> Option<Violation> {
        let name = name?;
        let first = name.first_char()?;
        if !self.bounds().is_lowercase(first) {
            return None;
        }

        Some(self.violation(
            name,
            file,
            format!("{TYPE_MESSAGE}: {}", name.text),
            recase_first(&name.text, first.to_ascii_uppercase()),
        ))
    }

    /// Checks a method declaration's name.
    ///
    /// Constructors are always exempt. Otherwise reports when the first
    /// character is an uppercase letter under the configured [`LetterBounds`].
    #[must_use]
    pub fn check_method_name(
        &self,
        name: Option<&Name>,
        is_constructor: bool,
        file: &Path,
    ) -> Option<Violation> {
        if is_constructor {
            return None;
        }
        let name = name?;
        let first = name.first_char()?;
        if !self.bounds().is_uppercase(first) {
            return None;
        }

        Some(self.violation(
            name,
            file,
            format!("{METHOD_MESSAGE}: {}", name.text),
            recase_first(&name.text, first.to_ascii_lowercase()),
        ))
    }

    fn violation(&self, name: &Name, file: &Path, message: String, renamed: String) -> Violation {
        let location = Location::from_span(file.to_path_buf(), name.span);
        let meta = &self.meta;

        Violation::new(meta.id, meta.name, meta.severity, location.clone(), message)
            .with_suggestion(Suggestion::with_fix(
                format!("rename to `{renamed}`"),
                Replacement::new(location, renamed),
            ))
    }
}

/// Replaces the first character of `text` with `first`.
fn recase_first(text: &str, first: char) -> String {
    let mut chars = text.chars();
    chars.next();
    std::iter::once(first).chain(chars).collect()
}

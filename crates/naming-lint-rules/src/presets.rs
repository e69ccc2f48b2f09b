//! Rule presets for common configurations.

use crate::NamingConvention;
use naming_lint_core::{Config, RuleBox, Severity};

/// Preset configurations for naming-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Rules as they have always behaved, reported as warnings.
    Recommended,
    /// Full letter ranges, reported as errors.
    Strict,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `naming-convention` (`NamingConventionWarning`) with exclusive letter bounds
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![Box::new(NamingConvention::new())]
}

/// Returns the strict set of rules.
///
/// Includes:
/// - `naming-convention` with inclusive letter bounds at error severity
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![Box::new(
        NamingConvention::new()
            .inclusive_bounds(true)
            .severity(Severity::Error),
    )]
}

/// Returns all available rules with default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(NamingConvention::new())]
}

/// Returns all available rules with their options read from `config`.
///
/// Severity overrides and `enabled = false` are left to the analyzer.
#[must_use]
pub fn configured_rules(config: &Config) -> Vec<RuleBox> {
    vec![Box::new(NamingConvention::from_config(
        config.rule(crate::naming_convention::NAME),
    ))]
}

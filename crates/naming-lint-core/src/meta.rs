//! Registration metadata describing a rule to the host.

use crate::syntax::NodeKindTag;
use crate::types::Severity;
use serde::{Deserialize, Serialize};

/// Category a rule reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Code that is likely wrong.
    Correctness,
    /// Security issues.
    Security,
    /// Performance issues.
    Performance,
    /// Readability and API ergonomics.
    Usability,
    /// Accessibility issues.
    Accessibility,
    /// Internationalization issues.
    Internationalization,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Correctness => "correctness",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Usability => "usability",
            Self::Accessibility => "accessibility",
            Self::Internationalization => "i18n",
        };
        f.write_str(s)
    }
}

/// Rule priority in `1..=10`, 10 being the most important.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Priority(u8);

impl Priority {
    /// Lowest priority.
    pub const MIN: Self = Self(1);
    /// Middle of the range.
    pub const MEDIUM: Self = Self(5);
    /// Highest priority.
    pub const MAX: Self = Self(10);

    /// Creates a priority, returning `None` outside `1..=10`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN.0 && value <= Self::MAX.0 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable identity of a rule: id, descriptions, category, priority,
/// default severity and the node kinds the host should hand to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMeta {
    /// Stable rule identifier reported with every violation.
    pub id: &'static str,
    /// Kebab-case rule name used in configuration and allow directives.
    pub name: &'static str,
    /// One-line summary.
    pub brief: &'static str,
    /// Longer explanation with fix advice.
    pub explanation: &'static str,
    /// Reporting category.
    pub category: Category,
    /// Priority in `1..=10`.
    pub priority: Priority,
    /// Default severity.
    pub severity: Severity,
    /// Node kinds the host dispatches to the rule (outermost matches only).
    pub applies_to: &'static [NodeKindTag],
}

impl RuleMeta {
    /// Returns `true` if the host should hand nodes of `tag` to the rule.
    #[must_use]
    pub fn applies_to(&self, tag: NodeKindTag) -> bool {
        self.applies_to.contains(&tag)
    }
}

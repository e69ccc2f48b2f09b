//! Rule and reporting traits.

use crate::context::FileContext;
use crate::meta::RuleMeta;
use crate::syntax::SyntaxNode;
use crate::types::{Severity, Violation};

/// Receives violations as rules produce them.
///
/// The host owns the sink. Rules call [`ReportSink::report`] once per
/// violation, in the order they find them.
pub trait ReportSink {
    /// Accepts one violation.
    fn report(&mut self, violation: Violation);
}

impl ReportSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

/// A lint rule over the lowered syntax tree.
///
/// The host calls [`Rule::visit`] once for every outermost node whose kind is
/// listed in [`RuleMeta::applies_to`]. A rule must not keep state between
/// calls: files may be analyzed in parallel.
///
/// # Example
///
/// ```ignore
/// use naming_lint_core::{FileContext, ReportSink, Rule, RuleMeta, SyntaxNode};
///
/// pub struct NoEmptyTypes { meta: RuleMeta }
///
/// impl Rule for NoEmptyTypes {
///     fn meta(&self) -> &RuleMeta { &self.meta }
///
///     fn visit(&self, ctx: &FileContext, node: &SyntaxNode, sink: &mut dyn ReportSink) {
///         if node.children.is_empty() {
///             // sink.report(...)
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the registration metadata of this rule.
    fn meta(&self) -> &RuleMeta;

    /// Returns the kebab-case name of this rule (e.g., "naming-convention").
    fn name(&self) -> &'static str {
        self.meta().name
    }

    /// Returns the rule id (e.g., "NamingConventionWarning").
    fn code(&self) -> &'static str {
        self.meta().id
    }

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        self.meta().brief
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        self.meta().severity
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules at `Severity::Error` or above require a reason.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() >= Severity::Error
    }

    /// Checks one dispatched node and reports violations to `sink`.
    fn visit(&self, ctx: &FileContext, node: &SyntaxNode, sink: &mut dyn ReportSink);
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

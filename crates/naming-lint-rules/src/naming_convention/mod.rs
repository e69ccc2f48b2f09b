//! Rule enforcing the conventional casing of type and method names.
//!
//! # Rationale
//!
//! Java and Kotlin code reads as UpperCamelCase for types and lowerCamelCase
//! for members. A lowercase class name or an uppercase method name is usually
//! a slip that makes call sites look like constructors or vice versa.
//!
//! # Detected Patterns
//!
//! - A type declaration (class, interface, enum, record, object) whose name
//!   starts with a lowercase letter.
//! - A method declaration that is not a constructor whose name starts with an
//!   uppercase letter.
//!
//! Every type and method nested inside a top-level type is checked, including
//! members of inner and local classes. Constructors and unnamed declarations
//! (anonymous classes, companion objects without a name) are skipped.
//!
//! The letter ranges exclude their endpoints unless `inclusive_bounds` is set:
//! names starting with `a`, `z`, `A` or `Z` are not reported by default.
//!
//! # Configuration
//!
//! - `inclusive_bounds`: Treat `a`/`z`/`A`/`Z` as letters (default: false)
//!
//! # Suppression
//!
//! - `// naming-lint: allow(naming-convention)` comment

mod checks;
mod visitor;

use naming_lint_core::{
    Category, FileContext, NodeKindTag, Priority, ReportSink, Rule, RuleConfig, RuleMeta,
    Severity, SyntaxNode,
};

pub use checks::{LetterBounds, METHOD_MESSAGE, TYPE_MESSAGE};

/// Rule code for naming-convention.
pub const CODE: &str = "NamingConventionWarning";

/// Rule name for naming-convention.
pub const NAME: &str = "naming-convention";

const BRIEF: &str = "Class names start uppercase, method names start lowercase";

const EXPLANATION: &str = "Type names are expected to start with an uppercase letter and \
method names with a lowercase letter. Constructors are exempt because they carry the name \
of their type.";

/// Flags type names starting lowercase and method names starting uppercase.
#[derive(Debug, Clone)]
pub struct NamingConvention {
    meta: RuleMeta,
    bounds: LetterBounds,
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingConvention {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meta: RuleMeta {
                id: CODE,
                name: NAME,
                brief: BRIEF,
                explanation: EXPLANATION,
                category: Category::Usability,
                priority: Priority::MEDIUM,
                severity: Severity::Warning,
                applies_to: &[NodeKindTag::TypeDeclaration],
            },
            bounds: LetterBounds::Exclusive,
        }
    }

    /// Creates a rule from its `[rules.naming-convention]` table.
    ///
    /// Severity and enablement are applied by the analyzer; only the options
    /// that change detection are read here.
    #[must_use]
    pub fn from_config(config: Option<&RuleConfig>) -> Self {
        let inclusive = config.is_some_and(|c| c.get_bool("inclusive_bounds", false));
        Self::new().inclusive_bounds(inclusive)
    }

    /// Sets whether the boundary letters `a`/`z`/`A`/`Z` count.
    #[must_use]
    pub fn inclusive_bounds(mut self, inclusive: bool) -> Self {
        self.bounds = if inclusive {
            LetterBounds::Inclusive
        } else {
            LetterBounds::Exclusive
        };
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.meta.severity = severity;
        self
    }

    /// Returns the configured letter bounds.
    #[must_use]
    pub fn bounds(&self) -> LetterBounds {
        self.bounds
    }
}

impl Rule for NamingConvention {
    fn meta(&self) -> &RuleMeta {
        &self.meta
    }

    fn visit(&self, ctx: &FileContext, node: &SyntaxNode, sink: &mut dyn ReportSink) {
        visitor::visit_declaration(self, ctx, node, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::{Name, Span, Violation};
    use std::path::Path;

    /// Hands out increasing spans so every name sits on its own line.
    struct Spans(usize);

    impl Spans {
        fn name(&mut self, text: &str) -> Name {
            self.0 += 1;
            Name::new(text, Span::new(self.0, 5, self.0 * 10, text.len()))
        }
    }

    fn check(rule: &NamingConvention, node: &SyntaxNode) -> Vec<Violation> {
        let ctx = FileContext::new(
            Path::new("/app/src/Sample.java"),
            "",
            "java",
            Path::new("/app"),
        );
        let mut sink = Vec::new();
        rule.visit(&ctx, node, &mut sink);
        sink
    }

    fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    #[test]
    fn meta_is_registered() {
        let rule = NamingConvention::new();
        let meta = rule.meta();
        assert_eq!(meta.id, "NamingConventionWarning");
        assert_eq!(meta.category, Category::Usability);
        assert_eq!(meta.priority.get(), 5);
        assert_eq!(meta.severity, Severity::Warning);
        assert!(meta.applies_to(NodeKindTag::TypeDeclaration));
        assert!(!meta.applies_to(NodeKindTag::MethodDeclaration));
        assert_eq!(rule.name(), NAME);
        assert_eq!(rule.code(), CODE);
    }

    #[test]
    fn lowercase_class_is_reported() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("myClass"));
        let violations = check(&NamingConvention::new(), &tree);
        insta::assert_snapshot!(
            violations[0].to_string(),
            @"src/Sample.java:1:5: warning [NamingConventionWarning] the name of class must start with uppercase: myClass"
        );
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn uppercase_method_is_reported() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("MyClass"))
            .with_child(SyntaxNode::method_decl(s.name("DoWork"), false));
        let violations = check(&NamingConvention::new(), &tree);
        assert_eq!(
            messages(&violations),
            ["the method must start with lowercase: DoWork"]
        );
        assert_eq!(violations[0].location.line, 2);
    }

    #[test]
    fn constructor_named_after_type_is_exempt() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("MyClass"))
            .with_child(SyntaxNode::method_decl(s.name("MyClass"), true));
        assert!(check(&NamingConvention::new(), &tree).is_empty());
    }

    #[test]
    fn boundary_letters_are_not_reported_by_default() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("aClass"))
            .with_child(SyntaxNode::method_decl(s.name("Zip"), false))
            .with_child(SyntaxNode::method_decl(s.name("Apply"), false));
        let z = SyntaxNode::type_decl(s.name("zebra"));
        let rule = NamingConvention::new();
        assert!(check(&rule, &tree).is_empty());
        assert!(check(&rule, &z).is_empty());
    }

    #[test]
    fn inclusive_bounds_report_boundary_letters() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("aClass"))
            .with_child(SyntaxNode::method_decl(s.name("Zip"), false));
        let violations = check(&NamingConvention::new().inclusive_bounds(true), &tree);
        assert_eq!(
            messages(&violations),
            [
                "the name of class must start with uppercase: aClass",
                "the method must start with lowercase: Zip",
            ]
        );
    }

    #[test]
    fn nested_types_and_methods_are_checked_in_document_order() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("Outer"))
            .with_child(
                SyntaxNode::other("class_body").with_child(
                    SyntaxNode::type_decl(s.name("inner"))
                        .with_child(SyntaxNode::method_decl(s.name("Run"), false)),
                ),
            )
            .with_child(SyntaxNode::method_decl(s.name("Helper"), false));
        let violations = check(&NamingConvention::new(), &tree);
        assert_eq!(
            messages(&violations),
            [
                "the name of class must start with uppercase: inner",
                "the method must start with lowercase: Run",
                "the method must start with lowercase: Helper",
            ]
        );
    }

    #[test]
    fn traversal_continues_past_violations() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("bad"))
            .with_child(SyntaxNode::method_decl(s.name("Worse"), false))
            .with_child(SyntaxNode::type_decl(s.name("nested")));
        assert_eq!(check(&NamingConvention::new(), &tree).len(), 3);
    }

    #[test]
    fn nested_violations_name_their_enclosing_type() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("Outer"))
            .with_child(SyntaxNode::method_decl(s.name("Run"), false));
        let violations = check(&NamingConvention::new(), &tree);
        let label = &violations[0].labels[0];
        assert_eq!(label.message, "declared in `Outer`");
        assert_eq!(label.location.line, 1);
    }

    #[test]
    fn top_level_violation_has_no_label() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("lonely"));
        assert!(check(&NamingConvention::new(), &tree)[0].labels.is_empty());
    }

    #[test]
    fn anonymous_type_is_skipped_but_its_methods_are_checked() {
        let mut s = Spans(0);
        let anonymous = SyntaxNode::new(naming_lint_core::NodeKind::TypeDeclaration)
            .with_child(SyntaxNode::method_decl(s.name("Call"), false));
        let tree = SyntaxNode::type_decl(s.name("Host")).with_child(anonymous);
        let violations = check(&NamingConvention::new(), &tree);
        assert_eq!(
            messages(&violations),
            ["the method must start with lowercase: Call"]
        );
        // The nearest enclosing type has no name, so there is nothing to point at.
        assert!(violations[0].labels.is_empty());
    }

    #[test]
    fn non_type_entry_is_a_no_op() {
        let mut s = Spans(0);
        let method = SyntaxNode::method_decl(s.name("Bad"), false);
        let other = SyntaxNode::other("program")
            .with_child(SyntaxNode::type_decl(s.name("hidden")));
        let rule = NamingConvention::new();
        assert!(check(&rule, &method).is_empty());
        assert!(check(&rule, &other).is_empty());
    }

    #[test]
    fn repeated_visits_are_identical() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("foo"))
            .with_child(SyntaxNode::method_decl(s.name("Bar"), false));
        let rule = NamingConvention::new();
        assert_eq!(check(&rule, &tree), check(&rule, &tree));
    }

    #[test]
    fn severity_override_is_carried() {
        let mut s = Spans(0);
        let tree = SyntaxNode::type_decl(s.name("foo"));
        let violations = check(&NamingConvention::new().severity(Severity::Error), &tree);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn from_config_reads_inclusive_bounds() {
        let config =
            naming_lint_core::Config::parse("[rules.naming-convention]\ninclusive_bounds = true\n")
                .unwrap();
        let rule = NamingConvention::from_config(config.rule(NAME));
        assert_eq!(rule.bounds(), LetterBounds::Inclusive);
        assert_eq!(
            NamingConvention::from_config(None).bounds(),
            LetterBounds::Exclusive
        );
    }
}

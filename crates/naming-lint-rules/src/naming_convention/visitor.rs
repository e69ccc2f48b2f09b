//! Pre-order walk over a type declaration and everything nested in it.

use std::path::Path;

use naming_lint_core::{FileContext, Label, Location, NodeKind, ReportSink, SyntaxNode, Violation};
use tracing::trace;

use super::NamingConvention;

/// State threaded through one traversal.
///
/// Created fresh for every entry node; nothing survives between calls.
pub(super) struct TraversalContext<'a, 's, 'n> {
    rule: &'a NamingConvention,
    file: &'a Path,
    sink: &'s mut dyn ReportSink,
    enclosing_type: Option<&'n SyntaxNode>,
}

impl TraversalContext<'_, '_, '_> {
    fn report(&mut self, violation: Option<Violation>) {
        let Some(mut violation) = violation else {
            return;
        };
        if let Some(outer) = self.enclosing_type.and_then(|node| node.name.as_ref()) {
            violation = violation.with_label(Label::new(
                Location::from_span(self.file.to_path_buf(), outer.span),
                format!("declared in `{}`", outer.text),
            ));
        }
        self.sink.report(violation);
    }
}

/// Entry point for one dispatched node.
///
/// Anything other than a type declaration is ignored.
pub(super) fn visit_declaration(
    rule: &NamingConvention,
    ctx: &FileContext,
    root: &SyntaxNode,
    sink: &mut dyn ReportSink,
) {
    if !root.is_type_declaration() {
        trace!(kind = %root.kind.tag(), "entry node is not a type declaration");
        return;
    }

    let mut cx = TraversalContext {
        rule,
        file: &ctx.relative_path,
        sink,
        enclosing_type: None,
    };
    walk(root, &mut cx);
}

fn walk<'n>(node: &'n SyntaxNode, cx: &mut TraversalContext<'_, '_, 'n>) {
    match &node.kind {
        NodeKind::TypeDeclaration => {
            trace!(name = node.name_text(), "type declaration");
            let violation = cx.rule.check_type_name(node.name.as_ref(), cx.file);
            cx.report(violation);

            let outer = cx.enclosing_type.replace(node);
            walk_children(node, cx);
            cx.enclosing_type = outer;
        }
        NodeKind::MethodDeclaration { is_constructor } => {
            trace!(
                name = node.name_text(),
                is_constructor,
                "method declaration"
            );
            if !is_constructor {
                let violation = cx
                    .rule
                    .check_method_name(node.name.as_ref(), false, cx.file);
                cx.report(violation);
            }
            walk_children(node, cx);
        }
        NodeKind::Other(_) => walk_children(node, cx),
    }
}

fn walk_children<'n>(node: &'n SyntaxNode, cx: &mut TraversalContext<'_, '_, 'n>) {
    for child in &node.children {
        walk(child, cx);
    }
}

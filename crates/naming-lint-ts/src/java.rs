//! Java frontend using Tree-sitter.

use naming_lint_core::{FrontendError, LanguageFrontend, SyntaxNode};
use tree_sitter::{Language, Node};

use crate::lower::{self, Declaration, Grammar};

/// Lowers Java source into a [`SyntaxNode`] tree.
///
/// | Grammar node | Lowered as |
/// |--------------|------------|
/// | `class_declaration`, `interface_declaration`, `enum_declaration`, `record_declaration`, `annotation_type_declaration` | type |
/// | `class_body` of an `object_creation_expression` or `enum_constant` | type without a name |
/// | `method_declaration`, `annotation_type_element_declaration` | method |
/// | `constructor_declaration`, `compact_constructor_declaration` | constructor |
pub struct JavaFrontend {
    language: Language,
}

impl JavaFrontend {
    /// Creates a new Java frontend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }
}

impl Default for JavaFrontend {
    fn default() -> Self {
        Self::new()
    }
}

struct JavaGrammar;

impl Grammar for JavaGrammar {
    fn classify(&self, node: &Node<'_>) -> Option<Declaration> {
        match node.kind() {
            "class_declaration"
            | "interface_declaration"
            | "enum_declaration"
            | "record_declaration"
            | "annotation_type_declaration" => Some(Declaration::Type),
            "class_body" if is_anonymous_body(node) => Some(Declaration::Type),
            "method_declaration" | "annotation_type_element_declaration" => {
                Some(Declaration::Method {
                    is_constructor: false,
                })
            }
            "constructor_declaration" | "compact_constructor_declaration" => {
                Some(Declaration::Method {
                    is_constructor: true,
                })
            }
            _ => None,
        }
    }
}

fn is_anonymous_body(node: &Node<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        matches!(parent.kind(), "object_creation_expression" | "enum_constant")
    })
}

impl LanguageFrontend for JavaFrontend {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".java"]
    }

    fn parse(&self, source: &str) -> Result<SyntaxNode, FrontendError> {
        let tree = lower::parse_tree(&self.language, self.language_id(), source)?;
        Ok(lower::lower(&JavaGrammar, tree.root_node(), source.as_bytes()))
    }
}

//! Kotlin frontend using Tree-sitter.

use naming_lint_core::{FrontendError, LanguageFrontend, SyntaxNode};
use tree_sitter::{Language, Node};

use crate::lower::{self, Declaration, Grammar};

/// Lowers Kotlin source into a [`SyntaxNode`] tree.
///
/// | Grammar node | Lowered as |
/// |--------------|------------|
/// | `class_declaration` (classes, interfaces, enum/data/sealed classes), `object_declaration` | type |
/// | `companion_object` | type, named only when the companion has a name |
/// | `object_literal` | type without a name |
/// | `function_declaration` | method |
/// | `primary_constructor`, `secondary_constructor` | constructor without a name |
pub struct KotlinFrontend {
    language: Language,
}

impl KotlinFrontend {
    /// Creates a new Kotlin frontend.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }
}

impl Default for KotlinFrontend {
    fn default() -> Self {
        Self::new()
    }
}

struct KotlinGrammar;

impl Grammar for KotlinGrammar {
    fn classify(&self, node: &Node<'_>) -> Option<Declaration> {
        match node.kind() {
            "class_declaration" | "object_declaration" | "companion_object" | "object_literal" => {
                Some(Declaration::Type)
            }
            "function_declaration" => Some(Declaration::Method {
                is_constructor: false,
            }),
            "primary_constructor" | "secondary_constructor" => Some(Declaration::Method {
                is_constructor: true,
            }),
            _ => None,
        }
    }

    fn name_node<'t>(&self, node: &Node<'t>) -> Option<Node<'t>> {
        match node.kind() {
            "object_literal" | "primary_constructor" | "secondary_constructor" => None,
            _ => node
                .child_by_field_name("name")
                .or_else(|| lower::first_child_of_kind(node, "identifier")),
        }
    }
}

impl LanguageFrontend for KotlinFrontend {
    fn language_id(&self) -> &'static str {
        "kotlin"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".kt", ".kts"]
    }

    fn parse(&self, source: &str) -> Result<SyntaxNode, FrontendError> {
        let tree = lower::parse_tree(&self.language, self.language_id(), source)?;
        Ok(lower::lower(&KotlinGrammar, tree.root_node(), source.as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use naming_lint_core::{NodeKind, NodeKindTag};

    fn parse(src: &str) -> SyntaxNode {
        KotlinFrontend::new().parse(src).unwrap()
    }

    fn type_names(root: &SyntaxNode) -> Vec<Option<&str>> {
        root.outermost(&[NodeKindTag::TypeDeclaration])
            .into_iter()
            .map(SyntaxNode::name_text)
            .collect()
    }

    #[test]
    fn lowers_class() {
        let root = parse("package com.example.domain\nclass User(val id: Long)\n");
        assert_eq!(type_names(&root), [Some("User")]);
    }

    #[test]
    fn recognises_class_flavours() {
        let root = parse(
            "data class UserDto(val id: Long)\ninterface UserRepository { }\nobject Factory { }\nenum class Color { RED }\n",
        );
        assert_eq!(
            type_names(&root),
            [
                Some("UserDto"),
                Some("UserRepository"),
                Some("Factory"),
                Some("Color")
            ]
        );
    }

    #[test]
    fn function_name_points_at_identifier() {
        let root = parse("class Service {\n    fun DoWork() {}\n}\n");
        let outline = root.to_string();
        assert!(outline.contains("MethodDeclaration `DoWork` [2:9]"), "{outline}");
    }

    #[test]
    fn extension_function_keeps_its_own_name() {
        let root = parse("object Ext {\n    fun String.Shout(): String = this\n}\n");
        let outline = root.to_string();
        assert!(outline.contains("MethodDeclaration `Shout`"), "{outline}");
    }

    #[test]
    fn constructors_are_unnamed_and_flagged() {
        let root = parse("class Point(val x: Int) {\n    constructor() : this(0)\n}\n");
        let point = root.outermost(&[NodeKindTag::TypeDeclaration])[0];
        let mut constructors = Vec::new();
        collect(point, &mut |node| {
            if node.kind
                == (NodeKind::MethodDeclaration {
                    is_constructor: true,
                })
            {
                constructors.push(node.name.is_none());
            }
        });
        assert_eq!(constructors, [true, true]);
    }

    #[test]
    fn companion_and_object_literal() {
        let root = parse(
            "class Host {\n    companion object { fun Create() = Host() }\n    val l = object : Runnable { override fun run() {} }\n}\n",
        );
        let host = root.outermost(&[NodeKindTag::TypeDeclaration])[0];
        let mut nested = Vec::new();
        collect(host, &mut |node| {
            if node.is_type_declaration() {
                nested.push(node.name_text().map(str::to_owned));
            }
        });
        assert_eq!(nested, [Some("Host".to_owned()), None, None]);
    }

    #[test]
    fn empty_source() {
        assert!(type_names(&parse("")).is_empty());
    }

    fn collect<'a>(node: &'a SyntaxNode, f: &mut impl FnMut(&'a SyntaxNode)) {
        f(node);
        for child in &node.children {
            collect(child, f);
        }
    }
}

//! Language-agnostic syntax tree consumed by rules.
//!
//! Frontends lower their concrete parse trees into [`SyntaxNode`]s. Only the
//! declaration kinds rules care about are distinguished; everything else is
//! kept as [`NodeKind::Other`] so the tree shape (and therefore document
//! order) is preserved.

use std::fmt;

/// Byte and line/column position of a source range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
    /// Byte offset from the start of the file.
    pub offset: usize,
    /// Length of the range in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }
}

/// An identifier together with the span of its token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// Identifier text as written in source.
    pub text: String,
    /// Span of the identifier token.
    pub span: Span,
}

impl Name {
    /// Creates a new name.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Returns the first character of the identifier, if any.
    #[must_use]
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

/// Kind of a syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A class, interface, enum, record, object or anonymous class body.
    TypeDeclaration,
    /// A method, function or constructor.
    MethodDeclaration {
        /// Set by the frontend from the grammar, never inferred from the name.
        is_constructor: bool,
    },
    /// Any other node. Carries the frontend's node label for debugging.
    Other(String),
}

impl NodeKind {
    /// Returns the tag used for rule applicability.
    #[must_use]
    pub fn tag(&self) -> NodeKindTag {
        match self {
            Self::TypeDeclaration => NodeKindTag::TypeDeclaration,
            Self::MethodDeclaration { .. } => NodeKindTag::MethodDeclaration,
            Self::Other(_) => NodeKindTag::Other,
        }
    }
}

/// Payload-free discriminant of [`NodeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKindTag {
    /// See [`NodeKind::TypeDeclaration`].
    TypeDeclaration,
    /// See [`NodeKind::MethodDeclaration`].
    MethodDeclaration,
    /// See [`NodeKind::Other`].
    Other,
}

impl fmt::Display for NodeKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeDeclaration => write!(f, "type declaration"),
            Self::MethodDeclaration => write!(f, "method declaration"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A node of the lowered syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Node kind.
    pub kind: NodeKind,
    /// Declared identifier, absent for anonymous or synthetic declarations.
    pub name: Option<Name>,
    /// Span of the whole node.
    pub span: Option<Span>,
    /// Child nodes in document order.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a node without name, span or children.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            span: None,
            children: Vec::new(),
        }
    }

    /// Creates a named type declaration.
    #[must_use]
    pub fn type_decl(name: Name) -> Self {
        Self::new(NodeKind::TypeDeclaration).with_name(name)
    }

    /// Creates a named method declaration.
    #[must_use]
    pub fn method_decl(name: Name, is_constructor: bool) -> Self {
        Self::new(NodeKind::MethodDeclaration { is_constructor }).with_name(name)
    }

    /// Creates an unnamed node of another kind.
    #[must_use]
    pub fn other(label: impl Into<String>) -> Self {
        Self::new(NodeKind::Other(label.into()))
    }

    /// Sets the declared name.
    #[must_use]
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the node span.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Appends a child node.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Returns `true` for type declarations.
    #[must_use]
    pub fn is_type_declaration(&self) -> bool {
        matches!(self.kind, NodeKind::TypeDeclaration)
    }

    /// Returns the identifier text, if any.
    #[must_use]
    pub fn name_text(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.text.as_str())
    }

    /// Collects the outermost nodes whose kind matches one of `tags`.
    ///
    /// The search does not descend into a match, so for type declarations this
    /// yields top-level types only. Results are in document order.
    #[must_use]
    pub fn outermost(&self, tags: &[NodeKindTag]) -> Vec<&SyntaxNode> {
        let mut found = Vec::new();
        self.collect_outermost(tags, &mut found);
        found
    }

    fn collect_outermost<'a>(&'a self, tags: &[NodeKindTag], found: &mut Vec<&'a SyntaxNode>) {
        if tags.contains(&self.kind.tag()) {
            found.push(self);
            return;
        }
        for child in &self.children {
            child.collect_outermost(tags, found);
        }
    }

    /// Writes an indented outline of the tree, one node per line.
    pub fn write_outline(&self, out: &mut impl fmt::Write, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let label = match &self.kind {
            NodeKind::TypeDeclaration => "TypeDeclaration".to_string(),
            NodeKind::MethodDeclaration {
                is_constructor: true,
            } => "MethodDeclaration(constructor)".to_string(),
            NodeKind::MethodDeclaration {
                is_constructor: false,
            } => "MethodDeclaration".to_string(),
            NodeKind::Other(label) => label.clone(),
        };
        write!(out, "{indent}{label}")?;
        if let Some(name) = &self.name {
            write!(
                out,
                " `{}` [{}:{}]",
                name.text, name.span.line, name.span.column
            )?;
        }
        writeln!(out)?;
        for child in &self.children {
            child.write_outline(out, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(text: &str, line: usize) -> Name {
        Name::new(text, Span::new(line, 1, 0, text.len()))
    }

    #[test]
    fn outermost_stops_at_first_match() {
        let tree = SyntaxNode::other("program")
            .with_child(
                SyntaxNode::type_decl(name("Outer", 1))
                    .with_child(SyntaxNode::type_decl(name("Inner", 2))),
            )
            .with_child(SyntaxNode::other("import"))
            .with_child(SyntaxNode::type_decl(name("Second", 5)));

        let top: Vec<_> = tree
            .outermost(&[NodeKindTag::TypeDeclaration])
            .into_iter()
            .filter_map(SyntaxNode::name_text)
            .collect();
        assert_eq!(top, vec!["Outer", "Second"]);
    }

    #[test]
    fn outermost_on_match_returns_self() {
        let tree = SyntaxNode::type_decl(name("Only", 1));
        assert_eq!(tree.outermost(&[NodeKindTag::TypeDeclaration]).len(), 1);
        assert!(tree.outermost(&[NodeKindTag::MethodDeclaration]).is_empty());
    }

    #[test]
    fn first_char_of_empty_name_is_none() {
        assert_eq!(name("", 1).first_char(), None);
        assert_eq!(name("Foo", 1).first_char(), Some('F'));
    }

    #[test]
    fn kind_tags() {
        assert_eq!(NodeKind::TypeDeclaration.tag(), NodeKindTag::TypeDeclaration);
        assert_eq!(
            NodeKind::MethodDeclaration {
                is_constructor: true
            }
            .tag(),
            NodeKindTag::MethodDeclaration
        );
        assert_eq!(NodeKind::Other("block".into()).tag(), NodeKindTag::Other);
    }

    #[test]
    fn outline_marks_constructors() {
        let tree = SyntaxNode::type_decl(name("Foo", 1))
            .with_child(SyntaxNode::method_decl(name("Foo", 2), true))
            .with_child(SyntaxNode::method_decl(name("run", 3), false));

        let outline = tree.to_string();
        assert_eq!(
            outline,
            "TypeDeclaration `Foo` [1:1]\n  MethodDeclaration(constructor) `Foo` [2:1]\n  MethodDeclaration `run` [3:1]\n"
        );
    }
}

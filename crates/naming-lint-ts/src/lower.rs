//! Lowering of Tree-sitter concrete syntax into [`SyntaxNode`] trees.
//!
//! Each grammar only has to say which node kinds are declarations and where
//! their names live. Everything else is kept as [`NodeKind::Other`] so the
//! nesting of declarations is preserved. Subtrees containing no declarations
//! are pruned.

use naming_lint_core::{FrontendError, Name, NodeKind, Span, SyntaxNode};
use tracing::debug;
use tree_sitter::{Language, Node, Parser, Tree};

/// How a grammar node maps onto the lowered tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Declaration {
    /// A class-like declaration.
    Type,
    /// A method or function; constructors are flagged from the grammar.
    Method {
        /// Whether the grammar marks this node as a constructor.
        is_constructor: bool,
    },
}

/// Grammar-specific classification used by [`lower`].
pub(crate) trait Grammar {
    /// Classifies `node`, or returns `None` for structural nodes.
    fn classify(&self, node: &Node<'_>) -> Option<Declaration>;

    /// Returns the identifier node naming a declaration, if it has one.
    fn name_node<'t>(&self, node: &Node<'t>) -> Option<Node<'t>> {
        node.child_by_field_name("name")
    }
}

/// Parses `source` with `language`.
pub(crate) fn parse_tree(
    language: &Language,
    language_id: &'static str,
    source: &str,
) -> Result<Tree, FrontendError> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| FrontendError::Language {
            language: language_id,
            message: e.to_string(),
        })?;

    let tree = parser
        .parse(source, None)
        .ok_or(FrontendError::Parse {
            language: language_id,
        })?;

    if tree.root_node().has_error() {
        debug!(language = language_id, "source contains syntax errors; lowering recovered tree");
    }

    Ok(tree)
}

/// Lowers the tree rooted at `root` into a [`SyntaxNode`].
///
/// The root is always kept, even if it contains no declarations.
pub(crate) fn lower(grammar: &impl Grammar, root: Node<'_>, src: &[u8]) -> SyntaxNode {
    let mut lowered = SyntaxNode::other(root.kind()).with_span(span_of(&root));
    lowered.children = lower_children(grammar, root, src);
    lowered
}

/// Lowers the named descendants of `root` in post-order.
///
/// The walk keeps its own stack of open levels instead of recursing, since
/// expression nesting in the parse tree is only bounded by the input.
fn lower_children(grammar: &impl Grammar, root: Node<'_>, src: &[u8]) -> Vec<SyntaxNode> {
    let mut cursor = root.walk();
    if !cursor.goto_first_child() {
        return Vec::new();
    }

    // One entry per open level; the last collects the lowered siblings of the
    // cursor's current node.
    let mut levels: Vec<Vec<SyntaxNode>> = vec![Vec::new()];

    loop {
        let node = cursor.node();
        if node.is_named() {
            if cursor.goto_first_child() {
                levels.push(Vec::new());
                continue;
            }
            close_node(grammar, node, Vec::new(), src, &mut levels);
        }

        while !cursor.goto_next_sibling() {
            if levels.len() == 1 || !cursor.goto_parent() {
                return levels.pop().unwrap_or_default();
            }
            let children = levels.pop().unwrap_or_default();
            close_node(grammar, cursor.node(), children, src, &mut levels);
        }
    }
}

fn close_node(
    grammar: &impl Grammar,
    node: Node<'_>,
    children: Vec<SyntaxNode>,
    src: &[u8],
    levels: &mut [Vec<SyntaxNode>],
) {
    if let (Some(lowered), Some(siblings)) =
        (lower_node(grammar, node, children, src), levels.last_mut())
    {
        siblings.push(lowered);
    }
}

fn lower_node(
    grammar: &impl Grammar,
    node: Node<'_>,
    children: Vec<SyntaxNode>,
    src: &[u8],
) -> Option<SyntaxNode> {
    let kind = match grammar.classify(&node) {
        Some(Declaration::Type) => NodeKind::TypeDeclaration,
        Some(Declaration::Method { is_constructor }) => {
            NodeKind::MethodDeclaration { is_constructor }
        }
        None if children.is_empty() => return None,
        None => NodeKind::Other(node.kind().to_owned()),
    };

    let mut lowered = SyntaxNode::new(kind).with_span(span_of(&node));
    if !matches!(lowered.kind, NodeKind::Other(_)) {
        lowered.name = grammar
            .name_node(&node)
            .map(|name| Name::new(text(&name, src), span_of(&name)));
    }
    lowered.children = children;
    Some(lowered)
}

/// Returns the first named child of `node` with the given kind.
pub(crate) fn first_child_of_kind<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node
        .named_children(&mut cursor)
        .find(|child| child.kind() == kind);
    found
}

fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn span_of(node: &Node<'_>) -> Span {
    let start = node.start_position();
    Span::new(
        start.row + 1,
        start.column + 1,
        node.start_byte(),
        node.end_byte() - node.start_byte(),
    )
}

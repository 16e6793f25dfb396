//! Ad-hoc labeled trees written as parenthesized expressions.
//!
//! `(window (tab focused (title)) (tab))` is a `window` node with two `tab`
//! children, the first of which carries the extra class `focused` and has a
//! `title` child. Every label is a class of its node, and the first label is
//! also the node's element name. Labels and children may be interleaved in
//! the source; the canonical rendering always lists labels first:
//!
//! ```text
//! (window
//!   (tab focused
//!     (title))
//!   (tab))
//! ```
//!
//! These trees exist to exercise selectors without a real decoration tree.

use std::fmt;

use crate::parser::SourcePosition;
use crate::selector::StyleTree;
use crate::{Error, Result};

/// Handle to a node of an [`AdhocTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct AdhocNode {
    labels: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    index: usize,
}

/// An arena tree parsed from the parenthesized notation.
#[derive(Debug, Clone)]
pub struct AdhocTree {
    nodes: Vec<AdhocNode>,
}

impl AdhocTree {
    /// Parse a tree. The whole input must be exactly one node.
    pub fn parse(source: &str) -> Result<Self> {
        let mut reader = Reader { source, pos: 0 };
        let mut tree = Self { nodes: vec![] };

        reader.skip_whitespace();
        tree.parse_node(&mut reader, None)?;
        reader.skip_whitespace();
        if reader.peek().is_some() {
            return Err(reader.expected("EOF"));
        }
        tracing::trace!("parsed ad-hoc tree with {} nodes", tree.nodes.len());
        Ok(tree)
    }

    fn parse_node(&mut self, reader: &mut Reader<'_>, parent: Option<NodeId>) -> Result<NodeId> {
        reader.consume('(')?;
        let id = NodeId(self.nodes.len());
        let index = parent.map_or(0, |p| self.nodes[p.0].children.len());
        self.nodes.push(AdhocNode {
            labels: vec![],
            parent,
            children: vec![],
            index,
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }

        reader.skip_whitespace();
        while let Some(ch) = reader.peek() {
            match ch {
                ')' => break,
                '(' => {
                    self.parse_node(reader, Some(id))?;
                }
                _ => {
                    let label = reader.label().to_string();
                    self.nodes[id.0].labels.push(label);
                }
            }
            reader.skip_whitespace();
        }

        reader.consume(')')?;
        Ok(id)
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a parsed tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Labels of `node` in source order.
    pub fn labels(&self, node: NodeId) -> &[String] {
        &self.nodes[node.0].labels
    }

    /// Child indices leading from the root to `node`.
    pub fn path(&self, node: NodeId) -> Vec<usize> {
        let mut path = vec![];
        let mut current = node;
        while let Some(parent) = self.nodes[current.0].parent {
            path.push(self.nodes[current.0].index);
            current = parent;
        }
        path.reverse();
        path
    }

    /// The path of `node` as space-separated indices; the root is `""`.
    pub fn format_path(&self, node: NodeId) -> String {
        self.path(node)
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Resolve a space-separated index path, as produced by [`format_path`].
    ///
    /// [`format_path`]: AdhocTree::format_path
    pub fn node_at_path(&self, path: &str) -> Option<NodeId> {
        path.split_whitespace().try_fold(self.root(), |node, step| {
            let index: usize = step.parse().ok()?;
            self.nodes[node.0].children.get(index).copied()
        })
    }

    /// All nodes in pre-order.
    pub fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(node) = stack.pop() {
            order.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev());
        }
        order
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: NodeId, depth: usize) -> fmt::Result {
        let data = &self.nodes[node.0];
        write!(f, "{:indent$}({}", "", data.labels.join(" "), indent = depth * 2)?;
        for &child in &data.children {
            writeln!(f)?;
            self.write_node(f, child, depth + 1)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for AdhocTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(f, self.root(), 0)
    }
}

impl StyleTree for AdhocTree {
    type Node = NodeId;

    fn element_name(&self, node: NodeId) -> Option<&str> {
        self.nodes[node.0].labels.first().map(String::as_str)
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].labels.iter().any(|label| label == class)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.nodes[node.0].children.len()
    }

    fn nth_child(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.nodes[node.0].children.get(index).copied()
    }

    fn sibling_index(&self, node: NodeId) -> usize {
        self.nodes[node.0].index
    }
}

struct Reader<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Reader<'a> {
    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.source[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn label(&mut self) -> &'a str {
        let rest = &self.source[self.pos..];
        let len = rest
            .find(|c: char| c.is_whitespace() || c == '(' || c == ')')
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn consume(&mut self, expected: char) -> Result<()> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(self.expected(&expected.to_string()))
        }
    }

    fn expected(&self, what: &str) -> Error {
        let got = match self.peek() {
            Some(ch) => format!("\"{}\"", ch),
            None => "EOF".to_string(),
        };
        let pos = SourcePosition::locate(self.source, self.pos);
        Error::parse(format!("Expected {} but got {}", what, got), pos.line, pos.column)
    }
}

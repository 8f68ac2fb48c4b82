//! Parse tree arena
//!
//! Nodes live in one vector and are addressed by [`NodeId`]. Children are
//! ordered lists of ids; the parent link exists for traversal and export
//! only. Identity is the arena index, so repeated labels need no
//! disambiguating suffix.

use std::fmt;

use super::NonTerminal;
use crate::base::{Symbol, unescape};

/// Index of a node in its [`ParseTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a node stands for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeLabel {
    NonTerminal(NonTerminal),
    /// A literal token, stored escaped
    Terminal(Symbol),
}

impl NodeLabel {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonTerminal(nt) => write!(f, "{nt}"),
            Self::Terminal(text) => f.write_str(&unescape(text)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
struct NodeData {
    label: NodeLabel,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A rooted, ordered parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseTree {
    nodes: Vec<NodeData>,
}

impl ParseTree {
    /// A tree holding only a root labelled `root`.
    pub(crate) fn new(root: NonTerminal) -> Self {
        Self {
            nodes: vec![NodeData {
                label: NodeLabel::NonTerminal(root),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub(crate) fn add_child(&mut self, parent: NodeId, label: NodeLabel) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            label,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn label(&self, id: NodeId) -> &NodeLabel {
        &self.nodes[id.index()].label
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True until something has been attached below the root.
    pub fn is_bare(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Labels of `id`'s children, in order.
    pub fn child_labels(&self, id: NodeId) -> Vec<&NodeLabel> {
        self.children(id).iter().map(|&c| self.label(c)).collect()
    }

    /// Node ids in depth-first, left-to-right order.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![self.root()],
        }
    }

    /// Terminal leaves from left to right; for a complete parse this is the
    /// token sequence that was parsed.
    pub fn terminals(&self) -> Vec<&Symbol> {
        self.preorder()
            .filter_map(|id| match self.label(id) {
                NodeLabel::Terminal(text) => Some(text),
                NodeLabel::NonTerminal(_) => None,
            })
            .collect()
    }

    /// Distance from the root to the deepest node.
    pub fn height(&self) -> usize {
        let mut depth = vec![0usize; self.nodes.len()];
        let mut height = 0;
        for id in self.preorder() {
            if let Some(parent) = self.parent(id) {
                depth[id.index()] = depth[parent.index()] + 1;
                height = height.max(depth[id.index()]);
            }
        }
        height
    }

    /// Indented text rendering, one node per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root(), 0usize)];
        while let Some((id, indent)) = stack.pop() {
            out.push_str(&"  ".repeat(indent));
            out.push_str(&self.label(id).to_string());
            out.push('\n');
            for &child in self.children(id).iter().rev() {
                stack.push((child, indent + 1));
            }
        }
        out
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Depth-first iterator over a [`ParseTree`].
pub struct Preorder<'a> {
    tree: &'a ParseTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.tree.children(id);
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}

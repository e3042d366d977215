//! Graph nodes.
//!
//! A node is nothing but its label: two nodes are the same node iff their labels are equal.
//! Algorithms keep their per-run bookkeeping (priorities, colors, predecessors) outside the
//! node, keyed by the node's position in the graph.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::Label;

#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Node<L> {
    label: L,
}

impl<L: Label> Node<L> {
    pub fn new(label: L) -> Self {
        Self { label }
    }

    pub fn label(&self) -> &L {
        &self.label
    }

    pub fn into_label(self) -> L {
        self.label
    }
}

// Must hash exactly like `L` so graphs can look nodes up by `&L` through `Borrow`.
impl<L: Hash> Hash for Node<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl<L> Borrow<L> for Node<L> {
    fn borrow(&self) -> &L {
        &self.label
    }
}

impl<L: Label> From<L> for Node<L> {
    fn from(label: L) -> Self {
        Self::new(label)
    }
}

impl<L: fmt::Debug> fmt::Debug for Node<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:?})", self.label)
    }
}

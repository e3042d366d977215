//! Per-run traversal bookkeeping.
//!
//! Algorithms never write into graph nodes. Each run numbers the graph's nodes densely
//! (in `Graph::nodes()` order) and keeps its colors, priorities and predecessors in plain
//! vectors indexed by that number.

use rustc_hash::FxBuildHasher;

use crate::error::Result;
use crate::graphlib::{Graph, Label, Node};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Three-state visit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    InProgress,
    Done,
}

/// Dense numbering of a graph's nodes for the duration of one algorithm run.
pub(crate) struct NodeNumbering<'g, L: Label> {
    nodes: Vec<&'g Node<L>>,
    index: HashMap<&'g L, usize>,
}

impl<'g, L: Label> NodeNumbering<'g, L> {
    pub(crate) fn new<G: Graph<L>>(g: &'g G) -> Self {
        let nodes = g.nodes();
        let mut index: HashMap<&'g L, usize> = HashMap::default();
        index.reserve(nodes.len());
        for (ix, node) in nodes.iter().enumerate() {
            index.insert(node.label(), ix);
        }
        Self { nodes, index }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, ix: usize) -> &'g Node<L> {
        self.nodes[ix]
    }

    pub(crate) fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Out-neighbour lists of `g` in this numbering.
    ///
    /// `g` may be a different graph over the same labels (e.g. a transpose); neighbours
    /// whose label is unknown to this numbering are skipped.
    pub(crate) fn successors<G: Graph<L>>(&self, g: &G) -> Result<Vec<Vec<usize>>> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let next: Vec<usize> = g
                .adjacent_nodes_of(node)?
                .into_iter()
                .filter_map(|n| self.index_of(n.label()))
                .collect();
            out.push(next);
        }
        Ok(out)
    }
}

//! Graph container APIs used by `sculpin`.
//!
//! [`Graph`] is the capability every container offers; [`IndexedGraph`] is the extra
//! capability of containers that number their nodes densely in insertion order. Both
//! containers are append-only: nodes and edges can be added but never removed.

use rustc_hash::FxBuildHasher;
use std::fmt;
use std::hash::Hash;

mod edge;
mod map;
mod matrix;
mod node;

pub use edge::Edge;
pub use map::DirectedMapGraph;
pub use matrix::UndirectedMatrixGraph;
pub use node::Node;

use crate::error::{Error, Result};

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;
type IndexSet<T> = indexmap::IndexSet<T, FxBuildHasher>;

/// Anything usable as a node label.
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

pub trait Graph<L: Label> {
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    /// All nodes, in insertion order.
    fn nodes(&self) -> Vec<&Node<L>>;

    /// Inserts `node`. Returns `false` (and changes nothing) if a node with the same label
    /// is already present.
    fn add_node(&mut self, node: Node<L>) -> bool;

    fn contains_node(&self, node: &Node<L>) -> bool {
        self.node_of(node.label()).is_some()
    }

    /// The stored node carrying `label`, if any.
    fn node_of(&self, label: &L) -> Option<&Node<L>>;

    /// Inserts `edge`. Returns `Ok(false)` if an equal edge is already present.
    ///
    /// Fails if the edge orientation does not match the graph or if either endpoint is
    /// missing.
    fn add_edge(&mut self, edge: Edge<L>) -> Result<bool>;

    fn contains_edge(&self, edge: &Edge<L>) -> Result<bool>;

    fn edges(&self) -> Vec<&Edge<L>>;

    /// Edges incident to `node`. For directed graphs these are the outgoing edges.
    fn edges_of(&self, node: &Node<L>) -> Result<Vec<&Edge<L>>>;

    /// Nodes reachable from `node` through one edge.
    fn adjacent_nodes_of(&self, node: &Node<L>) -> Result<Vec<&Node<L>>>;

    fn ingoing_edges_of(&self, node: &Node<L>) -> Result<Vec<&Edge<L>>>;

    fn predecessor_nodes_of(&self, node: &Node<L>) -> Result<Vec<&Node<L>>>;

    /// Always fails: graphs are append-only.
    fn remove_node(&mut self, _node: &Node<L>) -> Result<bool> {
        Err(Error::Unsupported {
            operation: "node removal",
        })
    }

    /// Always fails: graphs are append-only.
    fn remove_edge(&mut self, _edge: &Edge<L>) -> Result<bool> {
        Err(Error::Unsupported {
            operation: "edge removal",
        })
    }

    /// Drops every node and edge.
    fn clear(&mut self);
}

/// Graphs whose nodes are numbered `0..node_count()` in insertion order.
pub trait IndexedGraph<L: Label>: Graph<L> {
    fn node_at_index(&self, index: usize) -> Result<&Node<L>>;

    fn node_index_of(&self, label: &L) -> Result<usize>;
}

fn node_not_present<L: Label>(label: &L) -> Error {
    Error::NodeNotPresent {
        node: format!("{label:?}"),
    }
}

fn check_orientation<L: Label>(edge: &Edge<L>, directed: bool) -> Result<()> {
    if edge.is_directed() == directed {
        return Ok(());
    }
    Err(Error::OrientationMismatch {
        edge: format!("{edge:?}"),
        edge_orientation: Error::orientation(edge.is_directed()),
        graph_orientation: Error::orientation(directed),
    })
}

fn missing_endpoint<L: Label>(edge: &Edge<L>) -> Error {
    Error::MissingEndpoint {
        edge: format!("{edge:?}"),
    }
}

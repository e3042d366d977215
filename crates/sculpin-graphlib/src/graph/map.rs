//! Directed graph backed by hash-indexed adjacency sets.
//!
//! Every node maps to the set of its outgoing edges, so node and edge membership tests are
//! expected O(1). Ingoing-edge queries have to scan the whole map.

use super::{
    Edge, Graph, IndexMap, IndexSet, Label, Node, check_orientation, missing_endpoint,
    node_not_present,
};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct DirectedMapGraph<L: Label> {
    adjacency: IndexMap<Node<L>, IndexSet<Edge<L>>>,
}

impl<L: Label> Default for DirectedMapGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> DirectedMapGraph<L> {
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::default(),
        }
    }

    fn out_edges(&self, node: &Node<L>) -> Result<&IndexSet<Edge<L>>> {
        self.adjacency
            .get(node.label())
            .ok_or_else(|| node_not_present(node.label()))
    }

    fn require_node(&self, node: &Node<L>) -> Result<()> {
        self.out_edges(node).map(|_| ())
    }

    fn has_endpoints(&self, edge: &Edge<L>) -> bool {
        self.adjacency.contains_key(edge.v()) && self.adjacency.contains_key(edge.w())
    }

    fn stored_node(&self, label: &L) -> Option<&Node<L>> {
        self.adjacency.get_key_value(label).map(|(node, _)| node)
    }
}

impl<L: Label> Graph<L> for DirectedMapGraph<L> {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|out| out.len()).sum()
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn nodes(&self) -> Vec<&Node<L>> {
        self.adjacency.keys().collect()
    }

    fn add_node(&mut self, node: Node<L>) -> bool {
        if self.adjacency.contains_key(node.label()) {
            return false;
        }
        self.adjacency.insert(node, IndexSet::default());
        true
    }

    fn node_of(&self, label: &L) -> Option<&Node<L>> {
        self.stored_node(label)
    }

    fn add_edge(&mut self, edge: Edge<L>) -> Result<bool> {
        check_orientation(&edge, true)?;
        if !self.adjacency.contains_key(edge.w()) {
            return Err(missing_endpoint(&edge));
        }
        match self.adjacency.get_mut(edge.v()) {
            Some(out) => Ok(out.insert(edge)),
            None => Err(missing_endpoint(&edge)),
        }
    }

    fn contains_edge(&self, edge: &Edge<L>) -> Result<bool> {
        if !self.has_endpoints(edge) {
            return Err(missing_endpoint(edge));
        }
        Ok(self
            .adjacency
            .get(edge.v())
            .is_some_and(|out| out.contains(edge)))
    }

    fn edges(&self) -> Vec<&Edge<L>> {
        self.adjacency.values().flatten().collect()
    }

    fn edges_of(&self, node: &Node<L>) -> Result<Vec<&Edge<L>>> {
        Ok(self.out_edges(node)?.iter().collect())
    }

    fn adjacent_nodes_of(&self, node: &Node<L>) -> Result<Vec<&Node<L>>> {
        Ok(self
            .out_edges(node)?
            .iter()
            .filter_map(|e| self.stored_node(e.w()))
            .collect())
    }

    fn ingoing_edges_of(&self, node: &Node<L>) -> Result<Vec<&Edge<L>>> {
        self.require_node(node)?;
        Ok(self
            .adjacency
            .values()
            .flatten()
            .filter(|e| e.w() == node.label())
            .collect())
    }

    fn predecessor_nodes_of(&self, node: &Node<L>) -> Result<Vec<&Node<L>>> {
        Ok(self
            .ingoing_edges_of(node)?
            .into_iter()
            .filter_map(|e| self.stored_node(e.v()))
            .collect())
    }

    fn clear(&mut self) {
        self.adjacency.clear();
    }
}

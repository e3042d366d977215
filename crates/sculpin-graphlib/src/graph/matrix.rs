//! Undirected graph backed by an adjacency matrix.
//!
//! Nodes are numbered in insertion order and the matrix is kept square with side
//! `node_count()`. Edges live once in an arena; a present edge `{i, j}` stores the same arena
//! id in both cell `(i, j)` and cell `(j, i)`.

use super::{
    Edge, Graph, IndexSet, IndexedGraph, Label, Node, check_orientation, missing_endpoint,
    node_not_present,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct UndirectedMatrixGraph<L: Label> {
    nodes: IndexSet<Node<L>>,
    edges: Vec<Edge<L>>,
    matrix: Vec<Vec<Option<usize>>>,
}

impl<L: Label> Default for UndirectedMatrixGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> UndirectedMatrixGraph<L> {
    pub fn new() -> Self {
        Self {
            nodes: IndexSet::default(),
            edges: Vec::new(),
            matrix: Vec::new(),
        }
    }

    fn index_of(&self, label: &L) -> Option<usize> {
        self.nodes.get_index_of(label)
    }

    fn present_index(&self, node: &Node<L>) -> Result<usize> {
        self.index_of(node.label())
            .ok_or_else(|| node_not_present(node.label()))
    }

    fn endpoint_indices(&self, edge: &Edge<L>) -> Result<(usize, usize)> {
        match (self.index_of(edge.v()), self.index_of(edge.w())) {
            (Some(i), Some(j)) => Ok((i, j)),
            _ => Err(missing_endpoint(edge)),
        }
    }

    fn row(&self, i: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.matrix[i]
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.map(|edge_id| (j, edge_id)))
    }

    /// The edge stored in cell `(i, j)`, if any.
    pub fn edge_at(&self, i: usize, j: usize) -> Option<&Edge<L>> {
        let edge_id = (*self.matrix.get(i)?.get(j)?)?;
        self.edges.get(edge_id)
    }
}

impl<L: Label> Graph<L> for UndirectedMatrixGraph<L> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Vec<&Node<L>> {
        self.nodes.iter().collect()
    }

    fn add_node(&mut self, node: Node<L>) -> bool {
        if self.nodes.contains(node.label()) {
            return false;
        }
        self.nodes.insert(node);
        let side = self.nodes.len();
        for row in &mut self.matrix {
            row.push(None);
        }
        self.matrix.push(vec![None; side]);
        debug_assert!(self.matrix.iter().all(|row| row.len() == side));
        true
    }

    fn node_of(&self, label: &L) -> Option<&Node<L>> {
        self.nodes.get(label)
    }

    fn add_edge(&mut self, edge: Edge<L>) -> Result<bool> {
        check_orientation(&edge, false)?;
        let (i, j) = self.endpoint_indices(&edge)?;
        if self.matrix[i][j].is_some() {
            return Ok(false);
        }
        let edge_id = self.edges.len();
        self.edges.push(edge);
        self.matrix[i][j] = Some(edge_id);
        self.matrix[j][i] = Some(edge_id);
        Ok(true)
    }

    fn contains_edge(&self, edge: &Edge<L>) -> Result<bool> {
        let (i, j) = self.endpoint_indices(edge)?;
        Ok(!edge.is_directed() && self.matrix[i][j].is_some())
    }

    fn edges(&self) -> Vec<&Edge<L>> {
        self.edges.iter().collect()
    }

    fn edges_of(&self, node: &Node<L>) -> Result<Vec<&Edge<L>>> {
        let i = self.present_index(node)?;
        Ok(self.row(i).map(|(_, edge_id)| &self.edges[edge_id]).collect())
    }

    fn adjacent_nodes_of(&self, node: &Node<L>) -> Result<Vec<&Node<L>>> {
        let i = self.present_index(node)?;
        Ok(self
            .row(i)
            .filter_map(|(j, _)| self.nodes.get_index(j))
            .collect())
    }

    fn ingoing_edges_of(&self, _node: &Node<L>) -> Result<Vec<&Edge<L>>> {
        Err(Error::Unsupported {
            operation: "ingoing edges of an undirected graph",
        })
    }

    fn predecessor_nodes_of(&self, _node: &Node<L>) -> Result<Vec<&Node<L>>> {
        Err(Error::Unsupported {
            operation: "predecessor nodes of an undirected graph",
        })
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.matrix.clear();
    }
}

impl<L: Label> IndexedGraph<L> for UndirectedMatrixGraph<L> {
    fn node_at_index(&self, index: usize) -> Result<&Node<L>> {
        self.nodes.get_index(index).ok_or(Error::IndexOutOfBounds {
            index,
            node_count: self.nodes.len(),
        })
    }

    fn node_index_of(&self, label: &L) -> Result<usize> {
        self.index_of(label).ok_or_else(|| node_not_present(label))
    }
}

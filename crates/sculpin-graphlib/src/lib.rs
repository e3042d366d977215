#![forbid(unsafe_code)]

//! Append-only graph containers used by `sculpin`.
//!
//! Two containers implement the [`Graph`] capability:
//!
//! - [`UndirectedMatrixGraph`]: dense, undirected, adjacency matrix; also [`IndexedGraph`].
//! - [`DirectedMapGraph`]: sparse, directed, one hash set of outgoing edges per node.
//!
//! Nodes are identified by their label. Neither container supports removal.

pub mod error;
pub mod graph;

pub use error::{Error, ErrorKind, Result};
pub use graph::{DirectedMapGraph, Edge, Graph, IndexedGraph, Label, Node, UndirectedMatrixGraph};

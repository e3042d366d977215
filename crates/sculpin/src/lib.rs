#![forbid(unsafe_code)]

//! Graph algorithms over `sculpin-graphlib` containers.
//!
//! - [`heap`]: ternary min-heap with handle-based decrease-key.
//! - [`prim`]: minimum spanning trees of weighted undirected graphs.
//! - [`scc`]: strongly connected components of directed graphs (Kosaraju).
//!
//! Algorithms keep their per-node bookkeeping in their own storage; the graph is only
//! borrowed.

pub use sculpin_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod data;
pub mod error;
pub mod heap;
pub mod parens;
pub mod prim;
pub mod scc;
pub mod visit;

pub use data::deque::Deque;
pub use error::{Error, ErrorKind, Result};
pub use heap::{HeapSlot, PriorityElement, TernaryHeap};
pub use parens::{BalancedParenthesesChecker, check_balanced};
pub use prim::{MstEdge, PrimMst, PrimOptions, SpanningTree, TreeEntry, prim};
pub use scc::{Components, strongly_connected_components};
pub use visit::VisitState;

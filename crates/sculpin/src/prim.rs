//! Prim's minimum spanning tree over a weighted undirected graph.
//!
//! Every node enters a [`TernaryHeap`] keyed by the cheapest known edge into the tree
//! (`+inf` for none yet, `0` for the source). Extracting a node fixes it in the tree; its
//! incident edges then lower the keys of the neighbours that are still queued.

use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graphlib::{Edge, Graph, Label};
use crate::heap::{PriorityElement, TernaryHeap};
use crate::visit::{NodeNumbering, VisitState};

type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimOptions {
    /// Weight assumed for edges that carry none. `None` rejects unweighted edges.
    pub default_weight: Option<f64>,
    /// Keep growing new trees from nodes the source cannot reach.
    pub compute_forest: bool,
}

impl Default for PrimOptions {
    fn default() -> Self {
        Self {
            default_weight: None,
            compute_forest: false,
        }
    }
}

impl PrimOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn default_weight(mut self, weight: f64) -> Self {
        self.default_weight = Some(weight);
        self
    }

    #[must_use]
    pub const fn compute_forest(mut self, compute: bool) -> Self {
        self.compute_forest = compute;
        self
    }
}

/// Scratch record of one node during a run.
#[derive(Debug, Clone, Copy)]
struct Entry {
    priority: f64,
    handle: Option<usize>,
    predecessor: Option<usize>,
    state: VisitState,
}

impl Default for Entry {
    fn default() -> Self {
        Self {
            priority: f64::INFINITY,
            handle: None,
            predecessor: None,
            state: VisitState::Unvisited,
        }
    }
}

impl PriorityElement for Entry {
    fn priority(&self) -> f64 {
        self.priority
    }

    fn set_priority(&mut self, priority: f64) {
        self.priority = priority;
    }

    fn handle(&self) -> Option<usize> {
        self.handle
    }

    fn set_handle(&mut self, handle: Option<usize>) {
        self.handle = handle;
    }
}

/// Where a node ended up after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry<L> {
    /// Parent in the spanning tree. `None` for roots and unreached nodes.
    pub predecessor: Option<L>,
    /// Weight of the edge to `predecessor`; `0` for tree roots, `+inf` when unreached.
    pub priority: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MstEdge<L> {
    pub from: L,
    pub to: L,
    pub weight: f64,
}

/// Result of [`PrimMst::compute`]: predecessor links for every node of the graph.
#[derive(Debug, Clone)]
pub struct SpanningTree<L: Label> {
    source: L,
    entries: IndexMap<L, TreeEntry<L>>,
    roots: Vec<L>,
}

impl<L: Label> SpanningTree<L> {
    pub fn source(&self) -> &L {
        &self.source
    }

    /// Tree roots in the order they were grown. The source comes first.
    pub fn roots(&self) -> &[L] {
        &self.roots
    }

    pub fn entry(&self, label: &L) -> Option<&TreeEntry<L>> {
        self.entries.get(label)
    }

    /// Every node with its entry, in graph order.
    pub fn entries(&self) -> impl Iterator<Item = (&L, &TreeEntry<L>)> {
        self.entries.iter()
    }

    pub fn predecessor_of(&self, label: &L) -> Option<&L> {
        self.entries.get(label)?.predecessor.as_ref()
    }

    pub fn priority_of(&self, label: &L) -> Option<f64> {
        self.entries.get(label).map(|e| e.priority)
    }

    /// Whether `label` belongs to one of the grown trees.
    pub fn is_reached(&self, label: &L) -> bool {
        self.entries.get(label).is_some_and(|e| e.predecessor.is_some())
            || self.roots.contains(label)
    }

    pub fn edges(&self) -> Vec<MstEdge<L>> {
        self.entries
            .iter()
            .filter_map(|(to, entry)| {
                let from = entry.predecessor.clone()?;
                Some(MstEdge {
                    from,
                    to: to.clone(),
                    weight: entry.priority,
                })
            })
            .collect()
    }

    pub fn total_weight(&self) -> f64 {
        self.entries
            .values()
            .filter(|e| e.predecessor.is_some())
            .map(|e| e.priority)
            .sum()
    }

    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    /// Whether a single tree covers every node.
    pub fn is_spanning(&self) -> bool {
        self.roots.len() == 1 && self.entries.keys().all(|label| self.is_reached(label))
    }
}

/// Prim's algorithm with a reusable priority queue.
#[derive(Debug, Clone, Default)]
pub struct PrimMst {
    queue: TernaryHeap,
    options: PrimOptions,
}

impl PrimMst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PrimOptions) -> Self {
        Self {
            queue: TernaryHeap::new(),
            options,
        }
    }

    pub fn options(&self) -> PrimOptions {
        self.options
    }

    /// Computes a minimum spanning tree of `g` rooted at `source`.
    ///
    /// # Errors
    ///
    /// Fails when `g` is directed, when `source` is not a node of `g`, or when an edge has
    /// no weight (and no default applies) or a weight that is negative or NaN.
    pub fn compute<L, G>(&mut self, g: &G, source: &L) -> Result<SpanningTree<L>>
    where
        L: Label,
        G: Graph<L>,
    {
        if g.is_directed() {
            return Err(Error::DirectedGraph);
        }
        let numbering = NodeNumbering::new(g);
        let Some(src) = numbering.index_of(source) else {
            return Err(Error::SourceNotFound {
                node: format!("{source:?}"),
            });
        };
        for edge in g.edges() {
            self.weight_of(edge)?;
        }
        debug!(
            nodes = numbering.len(),
            edges = g.edge_count(),
            source = ?source,
            "prim: start"
        );

        let mut entries = vec![Entry::default(); numbering.len()];
        entries[src].priority = 0.0;
        self.queue.clear(&mut entries);
        for id in 0..entries.len() {
            self.queue.insert(&mut entries, id)?;
        }

        let mut roots: Vec<usize> = Vec::new();
        while !self.queue.is_empty() {
            let u = self.queue.extract_minimum(&mut entries)?;
            entries[u].state = VisitState::Done;
            if u == src {
                roots.push(u);
            } else if entries[u].priority.is_infinite() {
                if !self.options.compute_forest {
                    continue;
                }
                entries[u].priority = 0.0;
                roots.push(u);
            }

            let node = numbering.node(u);
            for edge in g.edges_of(node)? {
                let Some(v) = edge
                    .opposite(node.label())
                    .and_then(|label| numbering.index_of(label))
                else {
                    continue;
                };
                if v == u || entries[v].state == VisitState::Done {
                    continue;
                }
                let weight = self.weight_of(edge)?;
                if weight < entries[v].priority {
                    entries[v].predecessor = Some(u);
                    self.queue.decrease_priority(&mut entries, v, weight)?;
                    trace!(
                        from = ?node.label(),
                        to = ?numbering.node(v).label(),
                        weight,
                        "prim: relax"
                    );
                }
            }
        }

        let tree = SpanningTree {
            source: source.clone(),
            entries: entries
                .iter()
                .enumerate()
                .map(|(ix, entry)| {
                    let label = numbering.node(ix).label().clone();
                    let predecessor = entry
                        .predecessor
                        .map(|p| numbering.node(p).label().clone());
                    (
                        label,
                        TreeEntry {
                            predecessor,
                            priority: entry.priority,
                        },
                    )
                })
                .collect(),
            roots: roots
                .into_iter()
                .map(|ix| numbering.node(ix).label().clone())
                .collect(),
        };
        debug!(
            trees = tree.tree_count(),
            total_weight = tree.total_weight(),
            "prim: done"
        );
        Ok(tree)
    }

    fn weight_of<L: Label>(&self, edge: &Edge<L>) -> Result<f64> {
        let Some(weight) = edge.weight().or(self.options.default_weight) else {
            return Err(Error::MissingWeight {
                edge: format!("{edge:?}"),
            });
        };
        if weight.is_nan() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                edge: format!("{edge:?}"),
                weight,
            });
        }
        Ok(weight)
    }
}

/// Runs [`PrimMst`] with default options.
pub fn prim<L, G>(g: &G, source: &L) -> Result<SpanningTree<L>>
where
    L: Label,
    G: Graph<L>,
{
    PrimMst::new().compute(g, source)
}

//! Strongly connected components (Kosaraju).
//!
//! 1. A depth-first pass over the graph records nodes in finish order.
//! 2. The graph is transposed.
//! 3. Nodes are popped in reverse finish order; each still-unvisited node seeds a
//!    depth-first walk over the transpose, and everything that walk reaches is one
//!    component.
//!
//! Both walks use an explicit stack, so deep graphs cannot overflow the call stack.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graphlib::{DirectedMapGraph, Graph, Label, Node};
use crate::visit::{NodeNumbering, VisitState};

/// A partition of node labels into strongly connected components.
pub type Components<L> = BTreeSet<BTreeSet<L>>;

/// Returns the strongly connected components of the directed graph `g`.
pub fn strongly_connected_components<L, G>(g: &G) -> Result<Components<L>>
where
    L: Label,
    G: Graph<L>,
{
    if !g.is_directed() {
        return Err(Error::UndirectedGraph);
    }
    let numbering = NodeNumbering::new(g);
    debug!(
        nodes = numbering.len(),
        edges = g.edge_count(),
        "scc: start"
    );

    let mut finished = finish_stack(&numbering.successors(g)?);
    let transposed = transpose(g)?;
    let reverse = numbering.successors(&transposed)?;

    let mut state = vec![VisitState::Unvisited; numbering.len()];
    let mut components: Components<L> = BTreeSet::new();
    while let Some(seed) = finished.pop() {
        if state[seed] != VisitState::Unvisited {
            continue;
        }
        let members = collect_reachable(&reverse, seed, &mut state);
        let component: BTreeSet<L> = members
            .into_iter()
            .map(|ix| numbering.node(ix).label().clone())
            .collect();
        trace!(
            size = component.len(),
            seed = ?numbering.node(seed).label(),
            "scc: component"
        );
        components.insert(component);
    }

    debug!(components = components.len(), "scc: done");
    Ok(components)
}

/// Labels of `g` in depth-first finish order: the node finished last comes last.
///
/// Roots are tried in `g.nodes()` order.
pub fn finish_order<L, G>(g: &G) -> Result<Vec<L>>
where
    L: Label,
    G: Graph<L>,
{
    if !g.is_directed() {
        return Err(Error::UndirectedGraph);
    }
    let numbering = NodeNumbering::new(g);
    let order = finish_stack(&numbering.successors(g)?);
    Ok(order
        .into_iter()
        .map(|ix| numbering.node(ix).label().clone())
        .collect())
}

/// A new directed graph with the nodes of `g` and every edge reversed.
///
/// Weights are carried over.
pub fn transpose<L, G>(g: &G) -> Result<DirectedMapGraph<L>>
where
    L: Label,
    G: Graph<L>,
{
    if !g.is_directed() {
        return Err(Error::UndirectedGraph);
    }
    let mut out = DirectedMapGraph::new();
    for node in g.nodes() {
        out.add_node(node.clone());
    }
    for edge in g.edges() {
        out.add_edge(edge.reversed())?;
    }
    Ok(out)
}

/// Depth-first finish order over adjacency lists, as a stack (last finished on top).
fn finish_stack(successors: &[Vec<usize>]) -> Vec<usize> {
    let mut state = vec![VisitState::Unvisited; successors.len()];
    let mut finished: Vec<usize> = Vec::with_capacity(successors.len());
    // (node, index of the next successor to look at)
    let mut work: Vec<(usize, usize)> = Vec::new();

    for root in 0..successors.len() {
        if state[root] != VisitState::Unvisited {
            continue;
        }
        state[root] = VisitState::InProgress;
        work.push((root, 0));
        while let Some(top) = work.last_mut() {
            let (v, next) = *top;
            if let Some(&w) = successors[v].get(next) {
                top.1 += 1;
                if state[w] == VisitState::Unvisited {
                    state[w] = VisitState::InProgress;
                    work.push((w, 0));
                }
            } else {
                work.pop();
                state[v] = VisitState::Done;
                finished.push(v);
            }
        }
    }
    finished
}

fn collect_reachable(
    successors: &[Vec<usize>],
    seed: usize,
    state: &mut [VisitState],
) -> Vec<usize> {
    let mut members = Vec::new();
    let mut work = vec![seed];
    state[seed] = VisitState::InProgress;
    while let Some(v) = work.pop() {
        for &w in &successors[v] {
            if state[w] == VisitState::Unvisited {
                state[w] = VisitState::InProgress;
                work.push(w);
            }
        }
        state[v] = VisitState::Done;
        members.push(v);
    }
    members
}

/// Convenience for callers holding a [`Node`] rather than a label.
pub fn component_of<'c, L: Label>(
    components: &'c Components<L>,
    node: &Node<L>,
) -> Option<&'c BTreeSet<L>> {
    components.iter().find(|c| c.contains(node.label()))
}

use sculpin::graphlib::{DirectedMapGraph, Edge, Graph, Node, UndirectedMatrixGraph};
use sculpin::{Error, ErrorKind, PrimMst, PrimOptions, prim};

fn weighted(
    nodes: &[&'static str],
    edges: &[(&'static str, &'static str, f64)],
) -> UndirectedMatrixGraph<&'static str> {
    let mut g = UndirectedMatrixGraph::new();
    for &label in nodes {
        g.add_node(Node::new(label));
    }
    for &(v, w, weight) in edges {
        g.add_edge(Edge::undirected(v, w).with_weight(weight)).unwrap();
    }
    g
}

fn square() -> UndirectedMatrixGraph<&'static str> {
    weighted(
        &["A", "B", "C", "D"],
        &[("A", "B", 1.0), ("B", "C", 2.0), ("C", "D", 3.0), ("D", "A", 4.0)],
    )
}

#[test]
fn square_tree_drops_the_heaviest_edge() {
    let tree = prim(&square(), &"A").unwrap();

    assert_eq!(tree.source(), &"A");
    assert_eq!(tree.predecessor_of(&"A"), None);
    assert_eq!(tree.priority_of(&"A"), Some(0.0));
    assert_eq!(tree.predecessor_of(&"B"), Some(&"A"));
    assert_eq!(tree.predecessor_of(&"C"), Some(&"B"));
    assert_eq!(tree.predecessor_of(&"D"), Some(&"C"));
    assert_eq!(tree.priority_of(&"D"), Some(3.0));
    assert_eq!(tree.total_weight(), 6.0);
    assert_eq!(tree.edges().len(), 3);
    assert!(tree.is_spanning());
    assert_eq!(tree.roots(), &["A"]);
}

#[test]
fn tree_weight_does_not_depend_on_the_source() {
    let g = square();
    for source in ["A", "B", "C", "D"] {
        let tree = prim(&g, &source).unwrap();
        assert_eq!(tree.total_weight(), 6.0, "source {source}");
        assert_eq!(tree.priority_of(&source), Some(0.0));
    }
}

#[test]
fn each_edge_weight_matches_its_predecessor_edge() {
    let g = weighted(
        &["a", "b", "c", "d", "e"],
        &[
            ("a", "b", 4.0),
            ("a", "c", 1.0),
            ("b", "c", 2.0),
            ("b", "d", 5.0),
            ("c", "d", 8.0),
            ("d", "e", 3.0),
            ("c", "e", 9.0),
        ],
    );
    let tree = prim(&g, &"a").unwrap();

    assert_eq!(tree.total_weight(), 11.0);
    for edge in tree.edges() {
        let stored = Edge::undirected(edge.from, edge.to);
        assert!(g.contains_edge(&stored).unwrap());
        let original = g
            .edges()
            .into_iter()
            .find(|e| **e == stored)
            .and_then(|e| e.weight());
        assert_eq!(original, Some(edge.weight));
    }
}

#[test]
fn directed_graphs_are_rejected() {
    let mut g = DirectedMapGraph::new();
    g.add_node(Node::new(1));
    g.add_node(Node::new(2));
    g.add_edge(Edge::directed(1, 2).with_weight(1.0)).unwrap();

    let err = prim(&g, &1).unwrap_err();
    assert_eq!(err, Error::DirectedGraph);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn missing_source_is_rejected() {
    let err = prim(&square(), &"Z").unwrap_err();

    assert!(matches!(err, Error::SourceNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unweighted_edges_need_a_default_weight() {
    let mut g = UndirectedMatrixGraph::new();
    for label in ["x", "y", "z"] {
        g.add_node(Node::new(label));
    }
    g.add_edge(Edge::undirected("x", "y")).unwrap();
    g.add_edge(Edge::undirected("y", "z").with_weight(0.5)).unwrap();

    let err = prim(&g, &"x").unwrap_err();
    assert!(matches!(err, Error::MissingWeight { .. }));

    let mut mst = PrimMst::with_options(PrimOptions::new().default_weight(2.0));
    let tree = mst.compute(&g, &"x").unwrap();
    assert_eq!(tree.total_weight(), 2.5);
    assert_eq!(tree.predecessor_of(&"z"), Some(&"y"));
}

#[test]
fn negative_weights_are_rejected() {
    let g = weighted(&["a", "b"], &[("a", "b", -1.0)]);

    let err = prim(&g, &"a").unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { weight, .. } if weight == -1.0));
}

#[test]
fn nan_weights_are_rejected() {
    let g = weighted(&["a", "b"], &[("a", "b", f64::NAN)]);
    let err = prim(&g, &"a").unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { weight, .. } if weight.is_nan()));

    let mut g = UndirectedMatrixGraph::new();
    g.add_node(Node::new("a"));
    g.add_node(Node::new("b"));
    g.add_edge(Edge::undirected("a", "b")).unwrap();
    let mut mst = PrimMst::with_options(PrimOptions::new().default_weight(f64::NAN));
    let err = mst.compute(&g, &"a").unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn unreachable_nodes_keep_infinite_priority() {
    let g = weighted(&["a", "b", "c"], &[("a", "b", 1.0)]);
    let tree = prim(&g, &"a").unwrap();

    assert_eq!(tree.predecessor_of(&"c"), None);
    assert_eq!(tree.priority_of(&"c"), Some(f64::INFINITY));
    assert!(!tree.is_reached(&"c"));
    assert!(tree.is_reached(&"b"));
    assert_eq!(tree.tree_count(), 1);
    assert!(!tree.is_spanning());
    assert_eq!(tree.total_weight(), 1.0);
}

#[test]
fn forest_mode_grows_a_tree_per_component() {
    let g = weighted(&["a", "b", "c", "d"], &[("a", "b", 1.0), ("c", "d", 2.0)]);
    let mut mst = PrimMst::with_options(PrimOptions::new().compute_forest(true));
    let tree = mst.compute(&g, &"a").unwrap();

    assert_eq!(tree.tree_count(), 2);
    assert_eq!(tree.roots()[0], "a");
    assert_eq!(tree.total_weight(), 3.0);
    for root in tree.roots() {
        assert_eq!(tree.priority_of(root), Some(0.0));
        assert_eq!(tree.predecessor_of(root), None);
    }
    assert!(["c", "d"].iter().all(|label| tree.is_reached(label)));
    assert!(!tree.is_spanning());
}

#[test]
fn self_loops_and_single_nodes() {
    let g = weighted(&["solo"], &[("solo", "solo", 7.0)]);
    let tree = prim(&g, &"solo").unwrap();

    assert_eq!(tree.total_weight(), 0.0);
    assert!(tree.edges().is_empty());
    assert!(tree.is_spanning());
}

#[test]
fn a_solver_can_be_reused() {
    let mut mst = PrimMst::new();
    let first = mst.compute(&square(), &"A").unwrap();
    let second = mst
        .compute(&weighted(&["p", "q"], &[("p", "q", 5.0)]), &"q")
        .unwrap();

    assert_eq!(first.total_weight(), 6.0);
    assert_eq!(second.predecessor_of(&"p"), Some(&"q"));
    assert_eq!(second.total_weight(), 5.0);
}

#[test]
fn scratch_state_stays_out_of_the_graph() {
    let g = square();
    let before: Vec<_> = g.nodes().into_iter().cloned().collect();
    let a = prim(&g, &"A").unwrap();
    let b = prim(&g, &"A").unwrap();

    assert_eq!(a.total_weight(), b.total_weight());
    let after: Vec<_> = g.nodes().into_iter().cloned().collect();
    assert_eq!(before, after);
}

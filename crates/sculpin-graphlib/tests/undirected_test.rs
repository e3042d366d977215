use sculpin_graphlib::{Edge, ErrorKind, Graph, IndexedGraph, Node, UndirectedMatrixGraph};

fn path_graph() -> UndirectedMatrixGraph<&'static str> {
    let mut g = UndirectedMatrixGraph::new();
    for label in ["a", "b", "c"] {
        g.add_node(Node::new(label));
    }
    g.add_edge(Edge::undirected("a", "b").with_weight(1.0))
        .unwrap();
    g.add_edge(Edge::undirected("c", "b").with_weight(2.0))
        .unwrap();
    g
}

fn sorted_labels(nodes: Vec<&Node<&'static str>>) -> Vec<&'static str> {
    let mut labels: Vec<&'static str> = nodes.into_iter().map(|n| *n.label()).collect();
    labels.sort();
    labels
}

#[test]
fn undirected_edges_are_symmetric() {
    let g = path_graph();

    assert!(g.contains_edge(&Edge::undirected("a", "b")).unwrap());
    assert!(g.contains_edge(&Edge::undirected("b", "a")).unwrap());
    assert!(g.contains_edge(&Edge::undirected("b", "c")).unwrap());
    assert!(!g.contains_edge(&Edge::undirected("a", "c")).unwrap());
    assert_eq!(g.edge_count(), 2);
    assert!(!g.is_directed());
}

#[test]
fn adding_a_duplicate_node_is_a_no_op() {
    let mut g = path_graph();

    assert!(!g.add_node(Node::new("b")));
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.node_index_of(&"b").unwrap(), 1);
}

#[test]
fn adding_an_equal_edge_twice_reports_false() {
    let mut g = path_graph();

    assert!(!g.add_edge(Edge::undirected("b", "a").with_weight(1.0)).unwrap());
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn nodes_are_indexed_in_insertion_order() {
    let g = path_graph();

    assert_eq!(g.node_at_index(0).unwrap().label(), &"a");
    assert_eq!(g.node_at_index(2).unwrap().label(), &"c");
    assert_eq!(g.node_index_of(&"c").unwrap(), 2);
    assert_eq!(
        g.nodes().into_iter().map(|n| *n.label()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );

    let err = g.node_at_index(3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    let err = g.node_index_of(&"z").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn node_of_returns_the_stored_node() {
    let g = path_graph();

    assert_eq!(g.node_of(&"a"), Some(&Node::new("a")));
    assert_eq!(g.node_of(&"q"), None);
    assert!(g.contains_node(&Node::new("c")));
    assert!(!g.contains_node(&Node::new("q")));
}

#[test]
fn edges_and_adjacent_nodes_of_a_node() {
    let g = path_graph();

    let edges = g.edges_of(&Node::new("b")).unwrap();
    assert_eq!(edges.len(), 2);
    assert!(edges.iter().any(|e| e.opposite(&"b") == Some(&"a")));
    assert!(edges.iter().any(|e| e.opposite(&"b") == Some(&"c")));

    assert_eq!(
        sorted_labels(g.adjacent_nodes_of(&Node::new("b")).unwrap()),
        vec!["a", "c"]
    );
    assert_eq!(
        sorted_labels(g.adjacent_nodes_of(&Node::new("a")).unwrap()),
        vec!["b"]
    );
}

#[test]
fn queries_on_absent_nodes_fail() {
    let g = path_graph();
    let ghost = Node::new("ghost");

    assert_eq!(
        g.edges_of(&ghost).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        g.adjacent_nodes_of(&ghost).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        g.contains_edge(&Edge::undirected("a", "ghost"))
            .unwrap_err()
            .kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn edges_with_wrong_orientation_or_missing_endpoints_are_rejected() {
    let mut g = path_graph();

    let err = g.add_edge(Edge::directed("a", "c")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = g.add_edge(Edge::undirected("a", "ghost")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    assert_eq!(g.edge_count(), 2);
}

#[test]
fn directed_only_queries_are_unsupported() {
    let g = path_graph();

    assert_eq!(
        g.ingoing_edges_of(&Node::new("a")).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    assert_eq!(
        g.predecessor_nodes_of(&Node::new("a")).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
}

#[test]
fn removal_is_never_supported() {
    let mut g = path_graph();

    let present = Node::new("a");
    let absent = Node::new("ghost");
    assert_eq!(
        g.remove_node(&present).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    assert_eq!(
        g.remove_node(&absent).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    assert_eq!(
        g.remove_edge(&Edge::undirected("a", "b")).unwrap_err().kind(),
        ErrorKind::UnsupportedOperation
    );
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn self_loops_are_their_own_neighbor() {
    let mut g = path_graph();
    assert!(g.add_edge(Edge::undirected("c", "c")).unwrap());

    assert_eq!(
        sorted_labels(g.adjacent_nodes_of(&Node::new("c")).unwrap()),
        vec!["b", "c"]
    );
    assert_eq!(g.edge_at(2, 2).map(|e| *e.v()), Some("c"));
}

#[test]
fn clear_empties_the_graph() {
    let mut g = path_graph();
    g.clear();

    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.add_node(Node::new("a")));
    assert_eq!(g.node_index_of(&"a").unwrap(), 0);
}

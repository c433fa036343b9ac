use heap_dijkstra::graph::generators::{
    generate_grid, generate_random_graph, reference_graph, REFERENCE_EDGES,
};
use heap_dijkstra::graph::{DirectedGraph, Graph, MutableGraph};
use heap_dijkstra::Error;

fn two_vertex_graph() -> DirectedGraph<String, f64> {
    let mut graph = DirectedGraph::new();
    graph.add_vertex("a".to_string());
    graph.add_vertex("b".to_string());
    graph
}

#[test]
fn test_add_edge_to_missing_vertex_is_rejected() {
    let mut graph = two_vertex_graph();
    graph.add_edge("a".to_string(), "b".to_string(), 1.0).unwrap();

    let err = graph
        .add_edge("a".to_string(), "ghost".to_string(), 2.0)
        .unwrap_err();
    assert!(matches!(err, Error::MissingVertex { .. }));

    let err = graph
        .add_edge("ghost".to_string(), "b".to_string(), 2.0)
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingVertex {
            origin: "\"ghost\"".to_string(),
            destination: "\"b\"".to_string(),
        }
    );

    // Graph is unchanged
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.has_vertex(&"ghost".to_string()));
}

#[test]
fn test_edges_are_directed() {
    let mut graph = two_vertex_graph();
    graph.add_edge("a".to_string(), "b".to_string(), 4.0).unwrap();

    assert!(graph.has_edge(&"a".to_string(), &"b".to_string()));
    assert!(!graph.has_edge(&"b".to_string(), &"a".to_string()));
    assert_eq!(graph.outgoing_edges(&"b".to_string()).count(), 0);
}

#[test]
fn test_repeated_edge_overwrites_weight() {
    let mut graph = two_vertex_graph();
    graph.add_edge("a".to_string(), "b".to_string(), 4.0).unwrap();
    graph.add_edge("a".to_string(), "b".to_string(), 1.5).unwrap();

    assert_eq!(graph.edge_count(), 1, "Last write wins, no parallel edge");
    assert_eq!(graph.get_edge_weight(&"a".to_string(), &"b".to_string()), Some(1.5));
}

#[test]
fn test_invalid_weights_are_rejected() {
    let mut graph = two_vertex_graph();

    assert_eq!(
        graph.add_edge("a".to_string(), "b".to_string(), -1.0),
        Err(Error::InvalidWeight(-1.0))
    );
    assert!(matches!(
        graph.add_edge("a".to_string(), "b".to_string(), f64::NAN),
        Err(Error::InvalidWeight(w)) if w.is_nan()
    ));
    assert_eq!(
        graph.add_edge("a".to_string(), "b".to_string(), f64::INFINITY),
        Err(Error::InvalidWeight(f64::INFINITY))
    );
    assert_eq!(
        graph.add_edge("a".to_string(), "b".to_string(), f64::NEG_INFINITY),
        Err(Error::InvalidWeight(f64::NEG_INFINITY))
    );
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.validate_non_negative());

    // Zero-weight edges are fine
    graph.add_edge("a".to_string(), "b".to_string(), 0.0).unwrap();
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_readding_vertex_keeps_its_edges() {
    let mut graph = two_vertex_graph();
    graph.add_edge("a".to_string(), "b".to_string(), 3.0).unwrap();

    assert!(!graph.add_vertex("a".to_string()), "Vertex already present");
    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.has_edge(&"a".to_string(), &"b".to_string()));
}

#[test]
fn test_remove_edge_and_vertex() {
    let mut graph: DirectedGraph<u32, f64> = DirectedGraph::new();
    for v in 0..3 {
        graph.add_vertex(v);
    }
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 1, 1.0).unwrap();
    graph.add_edge(0, 2, 5.0).unwrap();

    assert!(graph.remove_edge(&0, &2));
    assert!(!graph.remove_edge(&0, &2), "Edge was already removed");
    assert_eq!(graph.edge_count(), 3);

    assert!(graph.remove_vertex(&1));
    assert!(!graph.has_vertex(&1));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0, "Edges into and out of the vertex are gone");
    assert!(!graph.remove_vertex(&1));
}

#[test]
fn test_reference_graph_shape() {
    let graph = reference_graph();
    assert_eq!(graph.vertex_count(), 7);
    assert_eq!(graph.edge_count(), REFERENCE_EDGES.len());
    for (from, to, weight) in REFERENCE_EDGES {
        assert_eq!(graph.get_edge_weight(&from, &to), Some(weight));
    }
}

#[test]
fn test_grid_generator() {
    let graph = generate_grid(3, 2);
    assert_eq!(graph.vertex_count(), 6);
    // 4 horizontal and 3 vertical links, each in both directions
    assert_eq!(graph.edge_count(), 2 * (2 * 2 + 3));
    assert!(graph.has_edge(&0, &1));
    assert!(graph.has_edge(&1, &0));
    assert!(graph.has_edge(&0, &3));
    assert!(!graph.has_edge(&2, &3), "Rows do not wrap around");
}

#[test]
fn test_random_graph_is_seeded_and_valid() {
    let graph = generate_random_graph(50, 4.0, 7);
    assert_eq!(graph.vertex_count(), 50);
    assert!(graph.edge_count() > 0);
    assert!(graph.edge_count() <= 200, "Repeated pairs overwrite instead of adding");
    assert!(graph.validate_non_negative());
    for v in graph.vertices() {
        assert!(!graph.has_edge(v, v), "No self-loops");
    }

    let again = generate_random_graph(50, 4.0, 7);
    assert_eq!(again.edge_count(), graph.edge_count(), "Same seed, same graph");
    for v in graph.vertices() {
        for (to, weight) in graph.outgoing_edges(v) {
            assert_eq!(again.get_edge_weight(v, to), Some(weight));
        }
    }

    assert_eq!(generate_random_graph(1, 4.0, 7).edge_count(), 0);
}

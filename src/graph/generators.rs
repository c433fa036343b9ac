use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Edge list of the demonstration graph: (origin, destination, weight)
pub const REFERENCE_EDGES: [(&str, &str, f64); 10] = [
    ("0", "1", 7.0),
    ("0", "2", 9.0),
    ("0", "5", 14.0),
    ("1", "2", 10.0),
    ("1", "3", 15.0),
    ("2", "3", 11.0),
    ("2", "5", 2.0),
    ("3", "4", 6.0),
    ("4", "5", 9.0),
    ("4", "6", 2.0),
];

/// Builds the 7-vertex demonstration graph with string vertex ids "0".."6"
pub fn reference_graph() -> DirectedGraph<&'static str, f64> {
    let mut graph = DirectedGraph::with_capacity(7);
    for vertex in ["0", "1", "2", "3", "4", "5", "6"] {
        graph.add_vertex(vertex);
    }
    for (from, to, weight) in REFERENCE_EDGES {
        graph
            .add_edge(from, to, weight)
            .expect("reference edges are valid");
    }
    graph
}

/// Generates a random directed graph with n vertices and about
/// `n * edge_factor` edges, reproducible from `seed`
///
/// Weights are drawn uniformly from [1, 100).
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    seed: u64,
) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return graph;
    }

    let edge_count = (n as f64 * edge_factor) as usize;
    let mut rejected = 0usize;
    for _ in 0..edge_count {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from == to {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(1.0..100.0));
        if graph.add_edge(from, to, weight).is_err() {
            rejected += 1;
        }
    }
    if rejected > 0 {
        log::debug!("Random graph (n={}, seed={}): {} edges rejected", n, seed, rejected);
    }

    graph
}

/// Generates a width*height grid with unit edges in both directions between
/// horizontal and vertical neighbours
///
/// Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<usize, OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    let mut links = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                links.push((current, current + 1));
            }
            if y + 1 < height {
                links.push((current, current + width));
            }
        }
    }

    let mut rejected = 0usize;
    for (a, b) in links {
        for (from, to) in [(a, b), (b, a)] {
            if graph.add_edge(from, to, OrderedFloat(1.0)).is_err() {
                rejected += 1;
            }
        }
    }
    if rejected > 0 {
        log::debug!("Grid {}x{}: {} edges rejected", width, height, rejected);
    }

    graph
}

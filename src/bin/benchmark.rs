use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use heap_dijkstra::algorithm::{Dijkstra, ShortestPathAlgorithm};
use heap_dijkstra::graph::generators::generate_random_graph;
use heap_dijkstra::graph::{DirectedGraph, Graph};

const RUNS_PER_SIZE: u32 = 5;

// Average wall-clock time of several runs from the same source
fn benchmark_dijkstra(
    dijkstra: &Dijkstra,
    graph: &DirectedGraph<usize, OrderedFloat<f64>>,
    source: usize,
) -> heap_dijkstra::Result<(Duration, usize)> {
    let mut total = Duration::ZERO;
    let mut reachable = 0;

    for _ in 0..RUNS_PER_SIZE {
        let start = Instant::now();
        let result = dijkstra.compute_shortest_paths(graph, &source)?;
        total += start.elapsed();
        reachable = result.reachable_count();
    }

    Ok((total / RUNS_PER_SIZE, reachable))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];
    let edge_factor = 4.0;
    let dijkstra = Dijkstra::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, 0x5EED ^ size as u64);
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (average, reachable) = benchmark_dijkstra(&dijkstra, &graph, 0)?;
        println!("  - {} reachable vertices, {:?} per run", reachable, average);

        results.push((size, graph.edge_count(), reachable, average));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<10} | {:<12}", "Vertices", "Edges", "Reachable", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, edges, reachable, average) in &results {
        println!(
            "{:<10} | {:<10} | {:<10} | {:<12.3}",
            size,
            edges,
            reachable,
            average.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}

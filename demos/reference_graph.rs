use colored::*;
use heap_dijkstra::graph::generators::reference_graph;
use heap_dijkstra::graph::Graph;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph = reference_graph();
    println!("{}", "Reference graph".bright_cyan().bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let start = Instant::now();
    let result = graph.shortest_paths(&"0")?;
    let elapsed = start.elapsed();
    println!(
        "{} {:?}",
        "Dijkstra with MinHeap took".bright_white(),
        elapsed
    );

    let mut vertices: Vec<_> = graph.vertices().copied().collect();
    vertices.sort();
    for vertex in vertices {
        match result.distance(&vertex) {
            Some(dist) => println!("  {} -> {}: {}", "0", vertex, dist.to_string().bright_green()),
            None => println!("  {} -> {}: {}", "0", vertex, "unreachable".bright_red()),
        }
    }

    match graph.shortest_path(&"0", &"6")? {
        Some(path) => println!(
            "{} {}",
            "Shortest path from 0 to 6:".bright_white().bold(),
            path.join(" -> ").bright_yellow().bold()
        ),
        None => println!("{}", "No path from 0 to 6".bright_red().bold()),
    }

    Ok(())
}

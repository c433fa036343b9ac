use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::graph::Graph;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{HeapEntry, MinHeap};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm on a lazy-deletion binary min-heap
///
/// Requires non-negative edge weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    trivial_paths: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Report `[source]` as the path from the source to itself instead of no path
    pub fn with_trivial_paths(mut self, enabled: bool) -> Self {
        self.trivial_paths = enabled;
        self
    }

    /// Path to `target` from a result computed by this instance
    pub fn path<V, W>(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Debug,
    {
        result.path_to(target, self.trivial_paths)
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn allows_trivial_paths(&self) -> bool {
        self.trivial_paths
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(format!("{:?}", source)));
        }

        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: HashMap<V, W> = HashMap::with_capacity(n);
        let mut predecessors: HashMap<V, Option<V>> = HashMap::with_capacity(n);
        for vertex in graph.vertices() {
            distances.insert(vertex.clone(), W::infinity());
            predecessors.insert(vertex.clone(), None);
        }

        // Distance to source is 0
        distances.insert(source.clone(), W::zero());

        let mut queue = MinHeap::with_capacity(n);
        queue.insert(source.clone(), W::zero());

        let mut pops = 0usize;
        let mut stale = 0usize;
        let mut relaxations = 0usize;

        // Main Dijkstra loop
        while !queue.is_empty() {
            let HeapEntry { key: u, priority: dist_u } = queue.extract_min()?;
            pops += 1;

            // A shorter path to u was already settled
            let best_u = distances.get(&u).copied().unwrap_or_else(W::infinity);
            if dist_u > best_u {
                stale += 1;
                continue;
            }

            // Relax all outgoing edges
            for (v, weight) in graph.outgoing_edges(&u) {
                let new_dist = dist_u + weight;
                let current = distances.get(v).copied().unwrap_or_else(W::infinity);

                if new_dist < current {
                    distances.insert(v.clone(), new_dist);
                    predecessors.insert(v.clone(), Some(u.clone()));
                    queue.insert(v.clone(), new_dist);
                    relaxations += 1;
                }
            }
        }

        log::debug!(
            "Dijkstra from {:?}: {} vertices, {} pops ({} stale), {} relaxations",
            source,
            n,
            pops,
            stale,
            relaxations
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}

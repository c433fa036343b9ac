use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;
use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Distances from source to each vertex, infinite when unreachable
    pub distances: HashMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: HashMap<V, Option<V>>,

    /// Source vertex ID
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Finite distance to `vertex`, `None` if unreachable or unknown
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances
            .get(vertex)
            .copied()
            .filter(|dist| dist.is_finite())
    }

    /// True if a finite path from the source to `vertex` was found
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|dist| dist.is_finite()).count()
    }

    /// Walks predecessor links back from `target` and returns the path in
    /// source-to-target order
    ///
    /// Returns `None` when the target was not reached. The single-vertex path
    /// from the source to itself is reported as `None` as well unless
    /// `allow_trivial` is set.
    pub fn path_to(&self, target: &V, allow_trivial: bool) -> Option<Vec<V>> {
        if !self.predecessors.contains_key(target) {
            return None;
        }

        // Build path in reverse order
        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(Some(pred)) = self.predecessors.get(current) {
            path.push(pred.clone());
            current = pred;

            // Predecessor links form a tree, a longer walk means a corrupted result
            if path.len() > self.predecessors.len() {
                log::warn!("Predecessor cycle detected while walking back from {:?}", target);
                return None;
            }
        }

        if path.len() > 1 {
            path.reverse();
            Some(path)
        } else if allow_trivial && *target == self.source {
            Some(path)
        } else {
            None
        }
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Whether a source-to-itself query yields the single-vertex path
    fn allows_trivial_paths(&self) -> bool {
        false
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target, self.allows_trivial_paths())
    }
}

use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Trait representing a weighted directed graph
///
/// Vertices are identified by any hashable token (integers, strings, ...).
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex id
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Adds a vertex, returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex together with every edge touching it
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Adds a directed edge, replacing the weight of an existing one
    ///
    /// Both endpoints must already exist and the weight must be finite and
    /// non-negative.
    /// On error the graph is left untouched.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;
}

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
///
/// Adjacency lists keep insertion order, so relaxations (and the choice
/// between equally short paths) are the same on every run.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .all(|(_, weight)| *weight >= W::zero())
    }

    /// Runs Dijkstra from `source` over the whole graph
    pub fn shortest_paths(&self, source: &V) -> Result<ShortestPathResult<V, W>> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }

    /// Shortest path from `source` to `destination`, `None` if there is none
    ///
    /// A vertex is never considered to have a path to itself.
    pub fn shortest_path(&self, source: &V, destination: &V) -> Result<Option<Vec<V>>> {
        if !self.has_vertex(destination) {
            return Err(Error::UnknownVertex(format!("{:?}", destination)));
        }

        let dijkstra = Dijkstra::new();
        let result = dijkstra.compute_shortest_paths(self, source)?;
        Ok(dijkstra.path(&result, destination))
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.outgoing_edges.remove(vertex).is_none() {
            return false;
        }

        for edges in self.outgoing_edges.values_mut() {
            edges.retain(|(target, _)| target != vertex);
        }
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if !self.has_vertex(&from) || !self.has_vertex(&to) {
            log::warn!("Rejected edge {:?} -> {:?}: vertex does not exist", from, to);
            return Err(Error::MissingVertex {
                origin: format!("{:?}", from),
                destination: format!("{:?}", to),
            });
        }

        // NaN and infinity are not finite
        if !weight.is_finite() || weight < W::zero() {
            log::warn!("Rejected edge {:?} -> {:?}: weight {:?}", from, to, weight);
            return Err(Error::InvalidWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        let Some(outgoing) = self.outgoing_edges.get_mut(&from) else {
            return Err(Error::UnknownVertex(format!("{:?}", from)));
        };

        // Check if edge already exists and update it if it does
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}

//! Heap Dijkstra - single-source shortest paths on a binary min-heap
//!
//! This library computes single-source shortest paths over weighted directed
//! graphs with Dijkstra's algorithm. The priority queue is an array-backed
//! binary min-heap without decrease-key: improved distances are inserted as
//! fresh entries and outdated ones are skipped when they surface.
//!
//! Edge weights must be non-negative.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::{HeapEntry, MinHeap};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot add edge from {origin} to {destination}: vertex does not exist")]
    MissingVertex { origin: String, destination: String },

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(f64),

    #[error("Cannot extract from an empty priority queue")]
    EmptyQueue,

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

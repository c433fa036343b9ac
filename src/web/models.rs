use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::graph::DirectedGraph;

/// A directed weighted edge as exchanged over the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEdge {
    pub origin: String,
    pub destination: String,
    pub weight: f64,
}

/// A complete graph as exchanged over the API
///
/// Used both as the upload body and as the response of `GET /api/graphs/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// An uploaded edge that `add_edge` refused
#[derive(Debug, Clone, Serialize)]
pub struct RejectedEdge {
    pub origin: String,
    pub destination: String,
    pub reason: String,
}

/// Public view of a stored graph session
#[derive(Debug, Clone, Serialize)]
pub struct GraphSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub rejected_edges: Vec<RejectedEdge>,
}

/// Parameters for a single-source run
#[derive(Debug, Deserialize)]
pub struct ShortestPathsRequest {
    pub source: String,
}

/// Distances and predecessors of a single-source run
///
/// Unreachable vertices have a `null` distance.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathsResponse {
    pub execution_id: Uuid,
    pub source: String,
    pub execution_time_ms: f64,
    pub reachable: usize,
    pub distances: HashMap<String, Option<f64>>,
    pub predecessors: HashMap<String, Option<String>>,
}

/// Parameters for a point-to-point query
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub source: String,
    pub destination: String,
    /// Report `[source]` when source and destination coincide
    #[serde(default)]
    pub allow_trivial: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResponse {
    pub source: String,
    pub destination: String,
    pub path: Option<Vec<String>>,
    pub distance: Option<f64>,
    pub execution_time_ms: f64,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding an uploaded graph
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: DirectedGraph<String, f64>,
    pub rejected_edges: Vec<RejectedEdge>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: DirectedGraph<String, f64>, rejected_edges: Vec<RejectedEdge>) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            rejected_edges,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> GraphSession {
        use crate::graph::Graph;

        GraphSession {
            id: self.id,
            created_at: self.created_at,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            rejected_edges: self.rejected_edges.clone(),
        }
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm};
use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_max_sessions(ServerConfig::default().max_sessions)
    }

    pub fn with_max_sessions(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
        }
    }

    fn sessions(&self) -> MutexGuard<'_, HashMap<Uuid, Session>> {
        // Sessions are plain data, a panicked writer cannot leave them half-updated
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn session_graph(&self, session_id: &Uuid) -> Result<DirectedGraph<String, f64>, ApiError> {
        self.sessions()
            .get(session_id)
            .map(|session| session.graph.clone())
            .ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route("/api/graphs/:session_id/shortest-paths", post(shortest_paths))
        .route("/api/graphs/:session_id/shortest-path", post(shortest_path))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Build a graph from the uploaded vertices and edges and store it in a new session
///
/// Edges that reference missing vertices or carry invalid weights are skipped
/// and reported back; they do not fail the upload. Fails with 503 once
/// `max_sessions` sessions are stored.
pub async fn create_graph(
    State(state): State<AppState>,
    Json(request): Json<WebGraph>,
) -> Result<Json<GraphSession>, ApiError> {
    let mut graph = DirectedGraph::with_capacity(request.vertices.len());
    for vertex in request.vertices {
        graph.add_vertex(vertex);
    }

    let mut rejected_edges = Vec::new();
    for edge in request.edges {
        if let Err(err) = graph.add_edge(edge.origin.clone(), edge.destination.clone(), edge.weight) {
            rejected_edges.push(RejectedEdge {
                origin: edge.origin,
                destination: edge.destination,
                reason: err.to_string(),
            });
        }
    }

    let session = Session::new(graph, rejected_edges);
    let summary = session.summary();

    {
        let mut sessions = state.sessions();
        if sessions.len() >= state.max_sessions {
            return Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "session_limit_reached",
                format!("At most {} sessions can be stored", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
    }

    log::info!(
        "Created session {} with {} vertices and {} edges ({} rejected)",
        summary.id,
        summary.vertex_count,
        summary.edge_count,
        summary.rejected_edges.len()
    );

    Ok(Json(summary))
}

/// Drop a session and free its slot
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GraphSession>, ApiError> {
    let session = state
        .sessions()
        .remove(&session_id)
        .ok_or_else(session_not_found)?;
    log::info!("Deleted session {}", session.id);
    Ok(Json(session.summary()))
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let graph = state.session_graph(&session_id)?;
    Ok(Json(convert_graph_to_web(&graph)))
}

/// Run Dijkstra from one source over the whole session graph
pub async fn shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathsRequest>,
) -> Result<Json<ShortestPathsResponse>, ApiError> {
    let graph = state.session_graph(&session_id)?;

    let start_time = Instant::now();
    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &request.source)
        .map_err(algorithm_error)?;
    let execution_time = start_time.elapsed();

    let distances = result
        .distances
        .keys()
        .map(|vertex| (vertex.clone(), result.distance(vertex)))
        .collect();

    Ok(Json(ShortestPathsResponse {
        execution_id: Uuid::new_v4(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        reachable: result.reachable_count(),
        distances,
        predecessors: result.predecessors,
    }))
}

/// Shortest path between two vertices of the session graph
pub async fn shortest_path(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> Result<Json<ShortestPathResponse>, ApiError> {
    let graph = state.session_graph(&session_id)?;
    if !graph.has_vertex(&request.destination) {
        return Err(algorithm_error(Error::UnknownVertex(request.destination)));
    }

    let dijkstra = Dijkstra::new().with_trivial_paths(request.allow_trivial);
    let start_time = Instant::now();
    let result = dijkstra
        .compute_shortest_paths(&graph, &request.source)
        .map_err(algorithm_error)?;
    let path = dijkstra.path(&result, &request.destination);
    let execution_time = start_time.elapsed();

    let distance = path
        .as_ref()
        .and_then(|_| result.distance(&request.destination));

    Ok(Json(ShortestPathResponse {
        source: request.source,
        destination: request.destination,
        path,
        distance,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
    }))
}

/// List all sessions
pub async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<Vec<GraphSession>>, ApiError> {
    let mut sessions: Vec<GraphSession> = state.sessions().values().map(Session::summary).collect();
    sessions.sort_by_key(|session| session.created_at);
    Ok(Json(sessions))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "sessions": state.sessions().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Helper functions

fn convert_graph_to_web(graph: &DirectedGraph<String, f64>) -> WebGraph {
    let mut vertices: Vec<String> = graph.vertices().cloned().collect();
    vertices.sort();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for origin in &vertices {
        for (destination, weight) in graph.outgoing_edges(origin) {
            edges.push(WebEdge {
                origin: origin.clone(),
                destination: destination.clone(),
                weight,
            });
        }
    }

    WebGraph { vertices, edges }
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

fn algorithm_error(err: Error) -> ApiError {
    match err {
        Error::UnknownVertex(_) => error_response(StatusCode::BAD_REQUEST, "unknown_vertex", err.to_string()),
        _ => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "algorithm_execution_failed",
            format!("Algorithm execution failed: {}", err),
        ),
    }
}

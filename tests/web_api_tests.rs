use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use heap_dijkstra::graph::generators::REFERENCE_EDGES;
use heap_dijkstra::web::api::*;
use heap_dijkstra::web::models::*;
use uuid::Uuid;

fn reference_upload() -> WebGraph {
    WebGraph {
        vertices: (0..7).map(|v| v.to_string()).collect(),
        edges: REFERENCE_EDGES
            .iter()
            .map(|&(origin, destination, weight)| WebEdge {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weight,
            })
            .collect(),
    }
}

async fn upload(state: &AppState, graph: WebGraph) -> GraphSession {
    create_graph(State(state.clone()), Json(graph)).await.unwrap().0
}

#[tokio::test]
async fn test_create_graph_reports_rejected_edges() {
    let state = AppState::new();
    let mut graph = reference_upload();
    graph.edges.push(WebEdge {
        origin: "0".to_string(),
        destination: "99".to_string(),
        weight: 1.0,
    });
    graph.edges.push(WebEdge {
        origin: "1".to_string(),
        destination: "2".to_string(),
        weight: -3.0,
    });

    let session = upload(&state, graph).await;
    assert_eq!(session.vertex_count, 7);
    assert_eq!(session.edge_count, 10, "Rejected edges must not change the graph");
    assert_eq!(session.rejected_edges.len(), 2);
    assert_eq!(session.rejected_edges[0].destination, "99");

    let stored = get_graph(State(state.clone()), Path(session.id)).await.unwrap().0;
    assert_eq!(stored.vertices.len(), 7);
    assert_eq!(stored.edges.len(), 10);
    assert!(stored
        .edges
        .contains(&WebEdge { origin: "1".to_string(), destination: "2".to_string(), weight: 10.0 }));
}

#[tokio::test]
async fn test_shortest_paths_endpoint() {
    let state = AppState::new();
    let mut graph = reference_upload();
    graph.vertices.push("island".to_string());
    let session = upload(&state, graph).await;

    let response = shortest_paths(
        State(state.clone()),
        Path(session.id),
        Json(ShortestPathsRequest { source: "0".to_string() }),
    )
    .await
    .unwrap()
    .0;

    assert_eq!(response.reachable, 7);
    assert_eq!(response.distances["6"], Some(28.0));
    assert_eq!(response.distances["island"], None);
    assert_eq!(response.predecessors["5"], Some("2".to_string()));
    assert_eq!(response.predecessors["0"], None);
}

#[tokio::test]
async fn test_shortest_path_endpoint() {
    let state = AppState::new();
    let session = upload(&state, reference_upload()).await;

    let response = shortest_path(
        State(state.clone()),
        Path(session.id),
        Json(ShortestPathRequest {
            source: "0".to_string(),
            destination: "6".to_string(),
            allow_trivial: false,
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(
        response.path,
        Some(vec!["0", "2", "3", "4", "6"].into_iter().map(String::from).collect())
    );
    assert_eq!(response.distance, Some(28.0));

    let same_vertex = |allow_trivial| ShortestPathRequest {
        source: "2".to_string(),
        destination: "2".to_string(),
        allow_trivial,
    };
    let response = shortest_path(State(state.clone()), Path(session.id), Json(same_vertex(false)))
        .await
        .unwrap()
        .0;
    assert_eq!(response.path, None);
    assert_eq!(response.distance, None);

    let response = shortest_path(State(state.clone()), Path(session.id), Json(same_vertex(true)))
        .await
        .unwrap()
        .0;
    assert_eq!(response.path, Some(vec!["2".to_string()]));
    assert_eq!(response.distance, Some(0.0));
}

#[tokio::test]
async fn test_error_responses() {
    let state = AppState::new();
    let session = upload(&state, reference_upload()).await;

    let (status, body) = shortest_paths(
        State(state.clone()),
        Path(session.id),
        Json(ShortestPathsRequest { source: "nowhere".to_string() }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "unknown_vertex");

    let (status, body) = shortest_path(
        State(state.clone()),
        Path(session.id),
        Json(ShortestPathRequest {
            source: "0".to_string(),
            destination: "nowhere".to_string(),
            allow_trivial: false,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "unknown_vertex");

    let (status, body) = get_graph(State(state.clone()), Path(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "session_not_found");
}

#[tokio::test]
async fn test_session_limit_and_listing() {
    let state = AppState::with_max_sessions(2);
    let first = upload(&state, reference_upload()).await;
    let second = upload(&state, WebGraph::default()).await;

    let (status, body) = create_graph(State(state.clone()), Json(reference_upload()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body.error, "session_limit_reached");

    let sessions = list_sessions(State(state.clone())).await.unwrap().0;
    let ids: Vec<Uuid> = sessions.iter().map(|session| session.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id) && ids.contains(&second.id));

    let health = health_check(State(state.clone())).await.0;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["sessions"], 2);
}

#[tokio::test]
async fn test_delete_graph_frees_a_session_slot() {
    let state = AppState::with_max_sessions(1);
    let first = upload(&state, reference_upload()).await;

    let (status, _) = create_graph(State(state.clone()), Json(WebGraph::default()))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let deleted = delete_graph(State(state.clone()), Path(first.id)).await.unwrap().0;
    assert_eq!(deleted.id, first.id);
    assert_eq!(deleted.edge_count, 10);

    let (status, body) = get_graph(State(state.clone()), Path(first.id)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "session_not_found");

    let (status, body) = delete_graph(State(state.clone()), Path(first.id)).await.unwrap_err();
    assert_eq!(status, StatusCode::NOT_FOUND, "Deleting twice must fail");
    assert_eq!(body.error, "session_not_found");

    let second = upload(&state, WebGraph::default()).await;
    assert_ne!(second.id, first.id);
    let health = health_check(State(state.clone())).await.0;
    assert_eq!(health["sessions"], 1);
}

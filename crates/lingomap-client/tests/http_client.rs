//! Integration tests for the HTTP lookup client against an in-process backend.
//!
//! Run with: `cargo test --package lingomap-client --test http_client`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use lingomap_client::{HoverSession, HttpLanguageClient, LanguageLookup, LookupError};
use lingomap_core::{Applied, HoverBody, LookupStatus, RegionData};

/// Requests seen by the mock backend: (content-type, body).
type Seen = Arc<Mutex<Vec<(String, Value)>>>;

/// Mirrors the real backend's behaviour for a handful of regions.
async fn most_spoken_languages(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    seen.lock().unwrap().push((content_type, body.clone()));

    let state = body["state_name"].as_str().unwrap_or_default();
    let n = body["num_languages"].as_u64().unwrap_or(0) as usize;

    match state {
        "Kerala" => Json(json!({
            "state": "Kerala",
            "top_languages": [
                {"Mother tongue name": "Malayalam", "Urban P": 30000000}
            ]
        }))
        .into_response(),
        "Karnataka" => {
            let all = [
                ("Kannada", 20000000),
                ("Urdu", 5000000),
                ("Telugu", 3000000),
                ("Tamil", 2000000),
            ];
            let top: Vec<Value> = all
                .iter()
                .take(n)
                .map(|(name, p)| json!({"Mother tongue name": name, "Urban P": p, "Total": p * 2}))
                .collect();
            Json(json!({"state": "Karnataka", "top_languages": top})).into_response()
        }
        "Broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "Slow" => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"top_languages": []})).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "File not found"})),
        )
            .into_response(),
    }
}

/// Start the mock backend on an ephemeral port and return its endpoint URL.
async fn spawn_backend() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let router = Router::new()
        .route("/most_spoken_languages/", post(most_spoken_languages))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{addr}/most_spoken_languages/"), seen)
}

#[tokio::test]
async fn test_fetch_posts_json_body() {
    let (endpoint, seen) = spawn_backend().await;
    let client = HttpLanguageClient::new(&endpoint).unwrap();

    let langs = client.fetch("Kerala", 3).await.unwrap();

    assert_eq!(langs.len(), 1);
    assert_eq!(langs[0].display_line(), "Malayalam: 30000000");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "application/json");
    assert_eq!(seen[0].1, json!({"state_name": "Kerala", "num_languages": 3}));
}

#[tokio::test]
async fn test_fetch_preserves_response_order() {
    let (endpoint, _) = spawn_backend().await;
    let client = HttpLanguageClient::new(&endpoint).unwrap();

    let langs = client.fetch("Karnataka", 3).await.unwrap();
    let names: Vec<&str> = langs.iter().map(|l| l.name.as_str()).collect();

    assert_eq!(names, ["Kannada", "Urdu", "Telugu"]);
}

#[tokio::test]
async fn test_fetch_maps_http_error_status() {
    let (endpoint, _) = spawn_backend().await;
    let client = HttpLanguageClient::new(&endpoint).unwrap();

    let err = client.fetch("Atlantis", 3).await.unwrap_err();

    match err {
        LookupError::Status { status, ref body } => {
            assert_eq!(status, 404);
            assert!(body.contains("File not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_maps_malformed_body() {
    let (endpoint, _) = spawn_backend().await;
    let client = HttpLanguageClient::new(&endpoint).unwrap();

    let err = client.fetch("Broken", 3).await.unwrap_err();
    assert!(matches!(err, LookupError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_fetch_maps_connection_refused() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpLanguageClient::new(format!("http://{addr}/most_spoken_languages/")).unwrap();
    let err = client.fetch("Kerala", 3).await.unwrap_err();

    assert!(matches!(err, LookupError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn test_configured_timeout_surfaces_as_transport_error() {
    let (endpoint, _) = spawn_backend().await;
    let client =
        HttpLanguageClient::with_timeout(&endpoint, Some(Duration::from_millis(100))).unwrap();

    let err = client.fetch("Slow", 3).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn test_session_end_to_end_kerala() {
    let (endpoint, seen) = spawn_backend().await;
    let client = HttpLanguageClient::new(&endpoint).unwrap();
    let mut session = HoverSession::new(Arc::new(client), tokio::runtime::Handle::current(), 3);
    let kerala = RegionData::india().get("Kerala").unwrap();

    assert!(session.hover("Kerala"));
    assert!(session.render(&kerala).is_loading());

    assert_eq!(session.settle().await, Some(Applied::Updated));

    let info = session.render(&kerala);
    assert_eq!(info.lines(), ["Malayalam: 30000000"]);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_session_backend_failure_clears_loading() {
    let (endpoint, _) = spawn_backend().await;
    let client = HttpLanguageClient::new(&endpoint).unwrap();
    let mut session = HoverSession::new(Arc::new(client), tokio::runtime::Handle::current(), 3);
    let region = RegionData::india().get("Lakshadweep").unwrap();

    session.hover("Lakshadweep");
    assert_eq!(session.settle().await, Some(Applied::Failed));

    assert!(!session.controller().is_loading());
    assert!(matches!(
        session.controller().status(),
        LookupStatus::Failed(msg) if msg.contains("404")
    ));
    assert!(matches!(session.render(&region).body, HoverBody::Failed(_)));
}

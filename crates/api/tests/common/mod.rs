use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use nearmiss_api::config::ServerConfig;
use nearmiss_api::router::build_app_router;
use nearmiss_api::state::AppState;
use nearmiss_store::DocumentStore;

/// Build a test `ServerConfig` with safe defaults and the given document
/// store path.
pub fn test_config(db_file: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_file: db_file.to_string_lossy().into_owned(),
    }
}

/// Build the full application router with all middleware layers, backed by
/// a document store at `db_file`.
///
/// This uses the same [`build_app_router`] as `main.rs`, so tests exercise
/// the production middleware stack.
pub fn build_test_app(db_file: &Path) -> Router {
    let config = test_config(db_file);
    let state = AppState {
        store: Arc::new(DocumentStore::open(db_file)),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

/// Send a POST request with an empty body.
pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

/// Send a PUT request with an empty body.
pub async fn put(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PUT, uri, None).await
}

/// Send a DELETE request to the router.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    app.oneshot(request).await.expect("Request failed")
}

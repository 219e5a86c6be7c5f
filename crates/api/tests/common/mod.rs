//! Shared harness for API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

// Each test binary compiles its own copy and uses a subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use triplan_api::config::ServerConfig;
use triplan_api::routes;
use triplan_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Bootstrap the schema on the per-test database and build the full
/// application router with all middleware layers.
pub async fn build_test_app(pool: PgPool) -> Router {
    triplan_db::ensure_schema(&pool).await.unwrap();

    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with a JSON body to the app.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body to the app.
pub async fn put(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Send a PATCH request with a JSON body to the app.
pub async fn patch(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PATCH, uri, body).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use signup_api::config::ServerConfig;
use signup_api::router::build_app_router;
use signup_api::state::AppState;

pub const SIGN_UP_PATH: &str = "/api/v1/users/sign_up";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and a 1 KiB body limit.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_body_bytes: 1024,
    }
}

pub fn test_state() -> AppState {
    AppState::new(test_config())
}

/// Build the full application router with all middleware layers, exactly as
/// `main.rs` does.
pub fn build_test_app() -> Router {
    build_app_router(test_state())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// A sign-up body that passes every check.
pub fn valid_sign_up() -> Value {
    serde_json::json!({
        "user": {
            "first_name": "Anna",
            "last_name": "Lee",
            "email": "anna@example.com",
            "password": "Abcdef1!",
            "age": 30
        }
    })
}

//! Shared helpers for HTTP-level integration tests.
//!
//! Requests are sent straight into the router via `tower::ServiceExt`,
//! no TCP listener involved. The router is built with the same
//! [`build_app_router`] the production binary uses, so every test goes
//! through the full middleware stack.

// Each test binary compiles this module separately and uses a different
// subset of the helpers.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use nexora_api::auth::jwt::JwtConfig;
use nexora_api::config::{AdminConfig, ServerConfig};
use nexora_api::router::build_app_router;
use nexora_api::state::AppState;

/// The fixed admin credentials every test logs in with.
pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Build a test `ServerConfig` with safe defaults and fixed credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            token_expiry_mins: 60,
        },
        admin: AdminConfig {
            username: TEST_ADMIN_USERNAME.to_string(),
            password: TEST_ADMIN_PASSWORD.to_string(),
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Log in with the fixed test admin credentials and return the bearer token.
pub async fn login_admin(app: Router) -> String {
    let body = serde_json::json!({
        "username": TEST_ADMIN_USERNAME,
        "password": TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/admin/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("login response must contain a token")
        .to_string()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}

fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("failed to build request"),
        None => builder.body(Body::empty()).expect("failed to build request"),
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(request(Method::GET, uri, None, None))
        .await
        .expect("request failed")
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(request(Method::GET, uri, Some(token), None))
        .await
        .expect("request failed")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(request(Method::POST, uri, None, Some(body)))
        .await
        .expect("request failed")
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(request(Method::POST, uri, Some(token), Some(body)))
        .await
        .expect("request failed")
}

/// POST with no body (publish/unpublish style endpoints).
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(request(Method::POST, uri, Some(token), None))
        .await
        .expect("request failed")
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(request(Method::PUT, uri, None, Some(body)))
        .await
        .expect("request failed")
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(request(Method::PUT, uri, Some(token), Some(body)))
        .await
        .expect("request failed")
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(request(Method::DELETE, uri, Some(token), None))
        .await
        .expect("request failed")
}

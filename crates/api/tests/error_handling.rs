//! Tests for the uniform JSON error envelope.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, put_json_auth};
use sqlx::SqlitePool;

/// Every error response carries `error` and `code` fields.
#[sqlx::test(migrations = "../db/migrations")]
async fn error_response_has_error_and_code_fields(pool: SqlitePool) {
    let response = get(common::build_test_app(pool), "/api/blog/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert!(json["error"].is_string(), "response must have an 'error' field");
    assert!(json["code"].is_string(), "response must have a 'code' field");
    assert_eq!(json["code"], "NOT_FOUND");
}

/// Validation failures use the VALIDATION_ERROR code and name the field.
#[sqlx::test(migrations = "../db/migrations")]
async fn validation_error_names_the_field(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;

    let body = serde_json::json!({
        "title": { "tr": "" },
        "content": { "tr": "İçerik" },
    });
    let response = put_json_auth(
        common::build_test_app(pool),
        "/api/admin/about-content/vision",
        &token,
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["error"].as_str().unwrap().contains("title"),
        "validation message should name the failing field"
    );
}

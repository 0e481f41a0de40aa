//! HTTP-level integration tests for admin login and auth enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, put_json};
use sqlx::SqlitePool;

use nexora_db::repositories::AboutContentRepo;

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with a token and admin info.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_success_returns_token(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": common::TEST_ADMIN_USERNAME,
        "password": common::TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert_eq!(json["user"]["username"], common::TEST_ADMIN_USERNAME);
    assert_eq!(json["user"]["role"], "admin");
}

/// Login with a wrong password returns 401 and no token.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_wrong_password_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": common::TEST_ADMIN_USERNAME,
        "password": "not-the-password",
    });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert!(json["token"].is_null(), "failed login must not issue a token");
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// Login with an unknown username returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_unknown_username_returns_401(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "username": "ghost",
        "password": common::TEST_ADMIN_PASSWORD,
    });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with empty credentials is a validation failure, not a 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn login_empty_credentials_returns_400(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "", "password": "" });
    let response = post_json(app, "/api/admin/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Enforcement
// ---------------------------------------------------------------------------

/// An admin write without a token is rejected with 401 and the store stays
/// untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn write_without_token_is_rejected_and_mutates_nothing(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let body = serde_json::json!({
        "title": { "tr": "Hakkımızda" },
        "content": { "tr": "Şirket tanıtımı" },
    });
    let response = put_json(app, "/api/admin/about-content/about", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let sections = AboutContentRepo::list(&pool).await.unwrap();
    assert!(sections.is_empty(), "rejected write must not reach the store");
}

/// A garbage bearer token is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_token_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/admin/team", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A token signed with a different secret is rejected with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn token_with_wrong_secret_is_rejected(pool: SqlitePool) {
    use nexora_api::auth::jwt::{generate_token, JwtConfig};

    let other_config = JwtConfig {
        secret: "some-other-secret".to_string(),
        token_expiry_mins: 60,
    };
    let forged = generate_token("admin", "admin", &other_config).unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/team", &forged).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A valid token with a non-admin role is rejected with 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn non_admin_role_is_rejected_with_403(pool: SqlitePool) {
    use nexora_api::auth::jwt::generate_token;

    let config = common::test_config();
    let token = generate_token("viewer", "viewer", &config.jwt).unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/admin/team", &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A freshly issued token grants access to the admin surface.
#[sqlx::test(migrations = "../db/migrations")]
async fn valid_token_grants_admin_access(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;

    let response = get_auth(common::build_test_app(pool), "/api/admin/team", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
}

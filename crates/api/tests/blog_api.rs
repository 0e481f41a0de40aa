//! HTTP-level integration tests for the blog publication lifecycle.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_auth, post_json_auth, put_json, put_json_auth};
use sqlx::SqlitePool;

use nexora_db::repositories::BlogPostRepo;

/// Create a post through the API and return its id.
async fn create_post(pool: &SqlitePool, token: &str, title_tr: &str, published: bool) -> i64 {
    let body = serde_json::json!({
        "title": { "tr": title_tr },
        "content": { "tr": "Yazı içeriği" },
        "category": "haberler",
        "published": published,
    });
    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/admin/blog",
        token,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().unwrap()
}

/// Drafts are invisible to the public; the admin list has them.
#[sqlx::test(migrations = "../db/migrations")]
async fn drafts_are_hidden_from_public(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;

    let draft_id = create_post(&pool, &token, "Taslak", false).await;
    create_post(&pool, &token, "Yayında", true).await;

    let response = get(common::build_test_app(pool.clone()), "/api/blog").await;
    let json = body_json(response).await;
    let posts = json["data"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["title"]["tr"], "Yayında");

    // Fetching the draft by id is a 404 on the public surface.
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/blog/{draft_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(common::build_test_app(pool), "/api/admin/blog", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

/// Publishing a draft makes it publicly visible, unpublishing hides it again.
#[sqlx::test(migrations = "../db/migrations")]
async fn publish_unpublish_roundtrip(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;
    let id = create_post(&pool, &token, "Duyuru", false).await;

    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/blog/{id}/publish"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["published_at"].is_string());

    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/blog/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/blog/{id}/unpublish"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["published_at"].is_null());

    let response = get(common::build_test_app(pool), &format!("/api/blog/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A content update never touches the publication state.
#[sqlx::test(migrations = "../db/migrations")]
async fn update_preserves_publication_state(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;
    let id = create_post(&pool, &token, "Makale", true).await;

    let body = serde_json::json!({ "category": "teknoloji" });
    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/admin/blog/{id}"),
        &token,
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["category"], "teknoloji");
    assert!(
        json["data"]["published_at"].is_string(),
        "content update must not unpublish the post"
    );
}

/// An unauthorized update is rejected with 401 and leaves the post unchanged.
#[sqlx::test(migrations = "../db/migrations")]
async fn unauthorized_update_changes_nothing(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;
    let id = create_post(&pool, &token, "Orijinal", true).await;

    let body = serde_json::json!({ "title": { "tr": "Değiştirilmiş" } });
    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/admin/blog/{id}"),
        body,
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let post = BlogPostRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(
        post.title.resolve(nexora_core::localized::Language::Tr),
        Some("Orijinal")
    );
}

/// Publishing an unknown post returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn publish_unknown_post_returns_404(pool: SqlitePool) {
    let token = common::login_admin(common::build_test_app(pool.clone())).await;

    let response = post_auth(
        common::build_test_app(pool),
        "/api/admin/blog/999999/publish",
        &token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

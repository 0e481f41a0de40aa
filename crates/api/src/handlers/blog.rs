//! Handlers for blog posts.
//!
//! The public endpoints see only published posts; drafts exist solely in the
//! admin view. Publication state changes through explicit publish/unpublish
//! operations, never through partial update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::error::CoreError;
use nexora_core::types::DbId;
use nexora_core::validation::require_non_empty;
use nexora_db::models::blog_post::{CreateBlogPost, UpdateBlogPost};
use nexora_db::repositories::BlogPostRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/blog
///
/// List published posts, newest first.
pub async fn list_published(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list_published(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/blog/{id}
///
/// Fetch a single published post. Drafts are indistinguishable from missing
/// posts here.
pub async fn get_published(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::find_by_id(&state.pool, post_id)
        .await?
        .filter(|p| p.published_at.is_some())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }))?;

    Ok(Json(DataResponse { data: post }))
}

/// GET /api/admin/blog
///
/// List all posts, drafts included, newest first.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// POST /api/admin/blog
///
/// Create a post, as a draft unless `published` is set.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    input.title.validate("title")?;
    input.content.validate("content")?;
    if let Some(excerpt) = &input.excerpt {
        excerpt.validate("excerpt")?;
    }
    require_non_empty("category", &input.category)?;

    let post = BlogPostRepo::create(&state.pool, &input).await?;

    tracing::info!(
        post_id = post.id,
        published = post.published_at.is_some(),
        admin = %admin.username,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/admin/blog/{id}
///
/// Partially update a post's content fields.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        title.validate("title")?;
    }
    if let Some(content) = &input.content {
        content.validate("content")?;
    }
    if let Some(excerpt) = &input.excerpt {
        excerpt.validate("excerpt")?;
    }
    if let Some(category) = &input.category {
        require_non_empty("category", category)?;
    }

    let post = BlogPostRepo::update(&state.pool, post_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }))?;

    tracing::info!(post_id, admin = %admin.username, "Blog post updated");

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/admin/blog/{id}/publish
///
/// Publish a post now.
pub async fn publish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::publish(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }))?;

    tracing::info!(post_id, admin = %admin.username, "Blog post published");

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/admin/blog/{id}/unpublish
///
/// Return a post to draft state.
pub async fn unpublish(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogPostRepo::unpublish(&state.pool, post_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }))?;

    tracing::info!(post_id, admin = %admin.username, "Blog post unpublished");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/admin/blog/{id}
///
/// Delete a post.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BlogPostRepo::delete(&state.pool, post_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id: post_id,
        }));
    }

    tracing::info!(post_id, admin = %admin.username, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}

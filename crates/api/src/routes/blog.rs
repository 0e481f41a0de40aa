//! Route definitions for blog posts.
//!
//! The public side only ever sees published posts; the admin side sees
//! everything, including drafts, and owns the publish lifecycle.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Public blog routes mounted at `/blog`.
///
/// ```text
/// GET /      -> list_published (newest first)
/// GET /{id}  -> get_published (drafts are 404)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_published))
        .route("/{id}", get(blog::get_published))
}

/// Admin blog routes mounted at `/admin/blog`.
///
/// ```text
/// GET    /                -> list_admin (drafts included)
/// POST   /                -> create
/// PUT    /{id}            -> update (never touches publication state)
/// DELETE /{id}            -> delete
/// POST   /{id}/publish    -> publish
/// POST   /{id}/unpublish  -> unpublish
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_admin).post(blog::create))
        .route("/{id}", put(blog::update).delete(blog::delete))
        .route("/{id}/publish", post(blog::publish))
        .route("/{id}/unpublish", post(blog::unpublish))
}

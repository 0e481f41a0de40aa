//! Route definitions for about-page content sections.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::about_content;
use crate::state::AppState;

/// Public about-content routes mounted at `/about-content`.
///
/// ```text
/// GET /  -> list
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(about_content::list))
}

/// Admin about-content routes mounted at `/admin/about-content`.
///
/// ```text
/// PUT /{section}  -> upsert (about | mission | vision | values)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/{section}", put(about_content::upsert))
}

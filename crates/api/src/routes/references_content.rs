//! Route definitions for references-page content sections.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::references_content;
use crate::state::AppState;

/// Public references-content routes mounted at `/references-content`.
///
/// ```text
/// GET /  -> list
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(references_content::list))
}

/// Admin references-content routes mounted at `/admin/references-content`.
///
/// ```text
/// PUT /{section}  -> upsert (hero | trusted_partner | cta)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/{section}", put(references_content::upsert))
}

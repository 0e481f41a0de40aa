//! Route definitions for team member management.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Public team routes mounted at `/team`.
///
/// ```text
/// GET /  -> list_public (active members only)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(team::list_public))
}

/// Admin team routes mounted at `/admin/team`.
///
/// ```text
/// GET    /      -> list_admin (all members, active or not)
/// POST   /      -> create
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list_admin).post(team::create))
        .route("/{id}", put(team::update).delete(team::delete))
}

//! Route definitions for the ordered company values collection.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::company_values;
use crate::state::AppState;

/// Public company-values routes mounted at `/company-values`.
///
/// ```text
/// GET /  -> list (display order)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(company_values::list))
}

/// Admin company-values routes mounted at `/admin/company-values`.
///
/// The static `/reorder` route is registered alongside `/{id}`; axum
/// matches the static segment first.
///
/// ```text
/// POST   /         -> create (appended at end of ordering)
/// PUT    /reorder  -> reorder (all-or-nothing batch)
/// PUT    /{id}     -> update
/// DELETE /{id}     -> delete
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(company_values::create))
        .route("/reorder", put(company_values::reorder))
        .route(
            "/{id}",
            put(company_values::update).delete(company_values::delete),
        )
}

//! Route definitions for the company statistics singleton.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::company_stats;
use crate::state::AppState;

/// Public company-stats routes mounted at `/company-stats`.
///
/// ```text
/// GET /  -> get
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(company_stats::get))
}

/// Admin company-stats routes mounted at `/admin/company-stats`.
///
/// ```text
/// PUT /  -> update (partial, counters only)
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new().route("/", put(company_stats::update))
}

//! Route definitions for the homepage collections (statistics, solutions).

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::homepage;
use crate::state::AppState;

/// Public homepage routes mounted at `/homepage`.
///
/// ```text
/// GET /statistics  -> list_statistics (display order)
/// GET /solutions   -> list_solutions (display order)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(homepage::list_statistics))
        .route("/solutions", get(homepage::list_solutions))
}

/// Admin homepage routes mounted at `/admin/homepage`.
///
/// ```text
/// POST   /statistics          -> create_statistic
/// PUT    /statistics/reorder  -> reorder_statistics
/// PUT    /statistics/{id}     -> update_statistic
/// DELETE /statistics/{id}     -> delete_statistic
/// POST   /solutions           -> create_solution
/// PUT    /solutions/reorder   -> reorder_solutions
/// PUT    /solutions/{id}      -> update_solution
/// DELETE /solutions/{id}      -> delete_solution
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/statistics", post(homepage::create_statistic))
        .route("/statistics/reorder", put(homepage::reorder_statistics))
        .route(
            "/statistics/{id}",
            put(homepage::update_statistic).delete(homepage::delete_statistic),
        )
        .route("/solutions", post(homepage::create_solution))
        .route("/solutions/reorder", put(homepage::reorder_solutions))
        .route(
            "/solutions/{id}",
            put(homepage::update_solution).delete(homepage::delete_solution),
        )
}

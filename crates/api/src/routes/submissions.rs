//! Route definitions for visitor submissions.
//!
//! The public router carries the three intake endpoints; the admin router
//! exposes the corresponding inboxes (list, read, delete).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::submissions;
use crate::state::AppState;

/// Public submission intake routes, merged at the `/api` root.
///
/// ```text
/// POST /demo-request     -> create_demo_request
/// POST /contact          -> create_contact_message
/// POST /job-application  -> create_job_application
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/demo-request", post(submissions::create_demo_request))
        .route("/contact", post(submissions::create_contact_message))
        .route("/job-application", post(submissions::create_job_application))
}

/// Admin submission inbox routes, merged under `/admin`.
///
/// ```text
/// GET        /demos                 -> list_demo_requests
/// GET/DELETE /demos/{id}            -> get/delete_demo_request
/// GET        /contacts              -> list_contact_messages
/// GET/DELETE /contacts/{id}         -> get/delete_contact_message
/// GET        /job-applications      -> list_job_applications
/// GET/DELETE /job-applications/{id} -> get/delete_job_application
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/demos", get(submissions::list_demo_requests))
        .route(
            "/demos/{id}",
            get(submissions::get_demo_request).delete(submissions::delete_demo_request),
        )
        .route("/contacts", get(submissions::list_contact_messages))
        .route(
            "/contacts/{id}",
            get(submissions::get_contact_message).delete(submissions::delete_contact_message),
        )
        .route("/job-applications", get(submissions::list_job_applications))
        .route(
            "/job-applications/{id}",
            get(submissions::get_job_application).delete(submissions::delete_job_application),
        )
}

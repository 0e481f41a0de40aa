//! Handlers for visitor submissions.
//!
//! The public side accepts new demo requests, contact messages, and job
//! applications. The admin side lists, reads, and deletes them. There are
//! no update handlers: submissions are never edited in place.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::error::CoreError;
use nexora_core::types::DbId;
use nexora_core::validation::{require_non_empty, validate_email};
use nexora_db::models::submission::{
    CreateContactMessage, CreateDemoRequest, CreateJobApplication,
};
use nexora_db::repositories::{ContactMessageRepo, DemoRequestRepo, JobApplicationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Demo requests
// ---------------------------------------------------------------------------

/// POST /api/demo-request
pub async fn create_demo_request(
    State(state): State<AppState>,
    Json(input): Json<CreateDemoRequest>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    validate_email("email", &input.email)?;

    let request = DemoRequestRepo::create(&state.pool, &input).await?;

    tracing::info!(request_id = request.id, "Demo request received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/admin/demos
pub async fn list_demo_requests(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let requests = DemoRequestRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/admin/demos/{id}
pub async fn get_demo_request(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = DemoRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DemoRequest",
            id: request_id,
        }))?;

    Ok(Json(DataResponse { data: request }))
}

/// DELETE /api/admin/demos/{id}
pub async fn delete_demo_request(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DemoRequestRepo::delete(&state.pool, request_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "DemoRequest",
            id: request_id,
        }));
    }

    tracing::info!(request_id, admin = %admin.username, "Demo request deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Contact messages
// ---------------------------------------------------------------------------

/// POST /api/contact
pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    validate_email("email", &input.email)?;
    require_non_empty("message", &input.message)?;

    let message = ContactMessageRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// GET /api/admin/contacts
pub async fn list_contact_messages(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/admin/contacts/{id}
pub async fn get_contact_message(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(message_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::find_by_id(&state.pool, message_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id: message_id,
        }))?;

    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/admin/contacts/{id}
pub async fn delete_contact_message(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(message_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ContactMessageRepo::delete(&state.pool, message_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id: message_id,
        }));
    }

    tracing::info!(message_id, admin = %admin.username, "Contact message deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Job applications
// ---------------------------------------------------------------------------

/// POST /api/job-application
pub async fn create_job_application(
    State(state): State<AppState>,
    Json(input): Json<CreateJobApplication>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    validate_email("email", &input.email)?;

    let application = JobApplicationRepo::create(&state.pool, &input).await?;

    tracing::info!(application_id = application.id, "Job application received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/admin/job-applications
pub async fn list_job_applications(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let applications = JobApplicationRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: applications }))
}

/// GET /api/admin/job-applications/{id}
pub async fn get_job_application(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(application_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let application = JobApplicationRepo::find_by_id(&state.pool, application_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "JobApplication",
            id: application_id,
        }))?;

    Ok(Json(DataResponse { data: application }))
}

/// DELETE /api/admin/job-applications/{id}
pub async fn delete_job_application(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(application_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = JobApplicationRepo::delete(&state.pool, application_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "JobApplication",
            id: application_id,
        }));
    }

    tracing::info!(application_id, admin = %admin.username, "Job application deleted");

    Ok(StatusCode::NO_CONTENT)
}

//! Handlers for team members.
//!
//! The public endpoint lists only active members; the admin endpoints see
//! and manage everyone.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::error::CoreError;
use nexora_core::types::DbId;
use nexora_core::validation::{require_non_empty, validate_email};
use nexora_db::models::team_member::{CreateTeamMember, UpdateTeamMember};
use nexora_db::repositories::TeamMemberRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/team
///
/// List active team members (public site view).
pub async fn list_public(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let members = TeamMemberRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// GET /api/admin/team
///
/// List all team members, active and inactive.
pub async fn list_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/admin/team
///
/// Create a new team member.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateTeamMember>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("name", &input.name)?;
    validate_email("email", &input.email)?;
    input.position.validate("position")?;

    let member = TeamMemberRepo::create(&state.pool, &input).await?;

    tracing::info!(
        member_id = member.id,
        name = %member.name,
        admin = %admin.username,
        "Team member created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: member })))
}

/// PUT /api/admin/team/{id}
///
/// Partially update a team member; omitted fields keep their prior values.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
    Json(input): Json<UpdateTeamMember>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = &input.name {
        require_non_empty("name", name)?;
    }
    if let Some(email) = &input.email {
        validate_email("email", email)?;
    }
    if let Some(position) = &input.position {
        position.validate("position")?;
    }

    let member = TeamMemberRepo::update(&state.pool, member_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id: member_id,
        }))?;

    tracing::info!(member_id, admin = %admin.username, "Team member updated");

    Ok(Json(DataResponse { data: member }))
}

/// DELETE /api/admin/team/{id}
///
/// Delete a team member.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(member_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TeamMemberRepo::delete(&state.pool, member_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TeamMember",
            id: member_id,
        }));
    }

    tracing::info!(member_id, admin = %admin.username, "Team member deleted");

    Ok(StatusCode::NO_CONTENT)
}

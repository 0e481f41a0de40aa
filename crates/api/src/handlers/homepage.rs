//! Handlers for the two ordered homepage collections: statistics and
//! solutions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::error::CoreError;
use nexora_core::icon::IconKind;
use nexora_core::types::DbId;
use nexora_core::validation::require_non_empty;
use nexora_db::models::homepage::{
    CreateHomepageSolution, CreateHomepageStatistic, UpdateHomepageSolution,
    UpdateHomepageStatistic,
};
use nexora_db::models::ReorderItem;
use nexora_db::repositories::{HomepageSolutionRepo, HomepageStatisticRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// GET /api/homepage/statistics
///
/// List homepage statistics in display order.
pub async fn list_statistics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let statistics = HomepageStatisticRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: statistics }))
}

/// POST /api/admin/homepage/statistics
///
/// Create a statistic at the end of the ordering.
pub async fn create_statistic(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateHomepageStatistic>,
) -> AppResult<impl IntoResponse> {
    require_non_empty("value", &input.value)?;
    input.label.validate("label")?;

    let icon = IconKind::from_name(input.icon.as_deref().unwrap_or_default());
    let statistic = HomepageStatisticRepo::create(&state.pool, icon.as_str(), &input).await?;

    tracing::info!(
        statistic_id = statistic.id,
        admin = %admin.username,
        "Homepage statistic created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: statistic })))
}

/// PUT /api/admin/homepage/statistics/{id}
///
/// Partially update a statistic.
pub async fn update_statistic(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(statistic_id): Path<DbId>,
    Json(input): Json<UpdateHomepageStatistic>,
) -> AppResult<impl IntoResponse> {
    if let Some(value) = &input.value {
        require_non_empty("value", value)?;
    }
    if let Some(label) = &input.label {
        label.validate("label")?;
    }

    let icon = input.icon.as_deref().map(IconKind::from_name);
    let statistic = HomepageStatisticRepo::update(
        &state.pool,
        statistic_id,
        icon.map(|i| i.as_str()),
        &input,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "HomepageStatistic",
        id: statistic_id,
    }))?;

    tracing::info!(statistic_id, admin = %admin.username, "Homepage statistic updated");

    Ok(Json(DataResponse { data: statistic }))
}

/// DELETE /api/admin/homepage/statistics/{id}
///
/// Delete a statistic.
pub async fn delete_statistic(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(statistic_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = HomepageStatisticRepo::delete(&state.pool, statistic_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HomepageStatistic",
            id: statistic_id,
        }));
    }

    tracing::info!(statistic_id, admin = %admin.username, "Homepage statistic deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/homepage/statistics/reorder
///
/// Apply a reorder batch, all-or-nothing.
pub async fn reorder_statistics(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(batch): Json<Vec<ReorderItem>>,
) -> AppResult<impl IntoResponse> {
    let statistics = HomepageStatisticRepo::reorder(&state.pool, &batch).await?;

    tracing::info!(
        moved = batch.len(),
        admin = %admin.username,
        "Homepage statistics reordered",
    );

    Ok(Json(DataResponse { data: statistics }))
}

// ---------------------------------------------------------------------------
// Solutions
// ---------------------------------------------------------------------------

/// GET /api/homepage/solutions
///
/// List homepage solutions in display order.
pub async fn list_solutions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let solutions = HomepageSolutionRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: solutions }))
}

/// POST /api/admin/homepage/solutions
///
/// Create a solution at the end of the ordering.
pub async fn create_solution(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateHomepageSolution>,
) -> AppResult<impl IntoResponse> {
    input.title.validate("title")?;
    input.description.validate("description")?;

    let icon = IconKind::from_name(input.icon.as_deref().unwrap_or_default());
    let solution = HomepageSolutionRepo::create(&state.pool, icon.as_str(), &input).await?;

    tracing::info!(
        solution_id = solution.id,
        admin = %admin.username,
        "Homepage solution created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: solution })))
}

/// PUT /api/admin/homepage/solutions/{id}
///
/// Partially update a solution.
pub async fn update_solution(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(solution_id): Path<DbId>,
    Json(input): Json<UpdateHomepageSolution>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        title.validate("title")?;
    }
    if let Some(description) = &input.description {
        description.validate("description")?;
    }

    let icon = input.icon.as_deref().map(IconKind::from_name);
    let solution = HomepageSolutionRepo::update(
        &state.pool,
        solution_id,
        icon.map(|i| i.as_str()),
        &input,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "HomepageSolution",
        id: solution_id,
    }))?;

    tracing::info!(solution_id, admin = %admin.username, "Homepage solution updated");

    Ok(Json(DataResponse { data: solution }))
}

/// DELETE /api/admin/homepage/solutions/{id}
///
/// Delete a solution.
pub async fn delete_solution(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(solution_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = HomepageSolutionRepo::delete(&state.pool, solution_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HomepageSolution",
            id: solution_id,
        }));
    }

    tracing::info!(solution_id, admin = %admin.username, "Homepage solution deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/homepage/solutions/reorder
///
/// Apply a reorder batch, all-or-nothing.
pub async fn reorder_solutions(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(batch): Json<Vec<ReorderItem>>,
) -> AppResult<impl IntoResponse> {
    let solutions = HomepageSolutionRepo::reorder(&state.pool, &batch).await?;

    tracing::info!(
        moved = batch.len(),
        admin = %admin.username,
        "Homepage solutions reordered",
    );

    Ok(Json(DataResponse { data: solutions }))
}

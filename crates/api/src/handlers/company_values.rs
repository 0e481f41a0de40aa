//! Handlers for company values (the ordered icon/title/description cards on
//! the about page).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::error::CoreError;
use nexora_core::icon::IconKind;
use nexora_core::types::DbId;
use nexora_db::models::company_value::{CreateCompanyValue, UpdateCompanyValue};
use nexora_db::models::ReorderItem;
use nexora_db::repositories::CompanyValueRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/company-values
///
/// List all company values in display order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let values = CompanyValueRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: values }))
}

/// POST /api/admin/company-values
///
/// Create a company value at the end of the ordering. Unknown icon names
/// fall back to the default icon rather than failing.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCompanyValue>,
) -> AppResult<impl IntoResponse> {
    input.title.validate("title")?;
    input.description.validate("description")?;

    let icon = IconKind::from_name(input.icon.as_deref().unwrap_or_default());
    let value = CompanyValueRepo::create(&state.pool, icon.as_str(), &input).await?;

    tracing::info!(value_id = value.id, admin = %admin.username, "Company value created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: value })))
}

/// PUT /api/admin/company-values/{id}
///
/// Partially update a company value.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(value_id): Path<DbId>,
    Json(input): Json<UpdateCompanyValue>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        title.validate("title")?;
    }
    if let Some(description) = &input.description {
        description.validate("description")?;
    }

    let icon = input.icon.as_deref().map(IconKind::from_name);
    let value = CompanyValueRepo::update(
        &state.pool,
        value_id,
        icon.map(|i| i.as_str()),
        &input,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "CompanyValue",
        id: value_id,
    }))?;

    tracing::info!(value_id, admin = %admin.username, "Company value updated");

    Ok(Json(DataResponse { data: value }))
}

/// DELETE /api/admin/company-values/{id}
///
/// Delete a company value.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(value_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CompanyValueRepo::delete(&state.pool, value_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CompanyValue",
            id: value_id,
        }));
    }

    tracing::info!(value_id, admin = %admin.username, "Company value deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/admin/company-values/reorder
///
/// Apply a reorder batch, all-or-nothing. Conflicting batches fail with 409
/// and leave every order unchanged.
pub async fn reorder(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(batch): Json<Vec<ReorderItem>>,
) -> AppResult<impl IntoResponse> {
    let values = CompanyValueRepo::reorder(&state.pool, &batch).await?;

    tracing::info!(
        moved = batch.len(),
        admin = %admin.username,
        "Company values reordered",
    );

    Ok(Json(DataResponse { data: values }))
}

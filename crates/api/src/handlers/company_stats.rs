//! Handlers for the company statistics singleton.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::error::CoreError;
use nexora_core::validation::validate_non_negative;
use nexora_db::models::company_stats::UpdateCompanyStats;
use nexora_db::repositories::CompanyStatsRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/company-stats
///
/// Fetch the singleton statistics record.
pub async fn get(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = CompanyStatsRepo::get(&state.pool)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CompanyStats",
            id: 1,
        }))?;

    Ok(Json(DataResponse { data: stats }))
}

/// PUT /api/admin/company-stats
///
/// Merge the supplied counters into the singleton; omitted counters keep
/// their prior values.
pub async fn update(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateCompanyStats>,
) -> AppResult<impl IntoResponse> {
    for (field, value) in [
        ("experience_years", input.experience_years),
        ("completed_projects", input.completed_projects),
        ("happy_customers", input.happy_customers),
        ("team_size", input.team_size),
    ] {
        if let Some(value) = value {
            validate_non_negative(field, value)?;
        }
    }

    let stats = CompanyStatsRepo::upsert(&state.pool, &input).await?;

    tracing::info!(admin = %admin.username, "Company stats updated");

    Ok(Json(DataResponse { data: stats }))
}

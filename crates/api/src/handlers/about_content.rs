//! Handlers for about-page content sections.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::section::AboutSection;
use nexora_db::models::about_content::UpsertAboutContent;
use nexora_db::repositories::AboutContentRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/about-content
///
/// List all about-page sections that have content.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = AboutContentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// PUT /api/admin/about-content/{section}
///
/// Create or replace one section's content (upsert keyed by the fixed
/// section name). An unknown section name is a validation error.
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(input): Json<UpsertAboutContent>,
) -> AppResult<impl IntoResponse> {
    let section = AboutSection::from_str(&section)?;
    input.title.validate("title")?;
    input.content.validate("content")?;

    let record = AboutContentRepo::upsert(&state.pool, section, &input).await?;

    tracing::info!(
        section = section.as_str(),
        admin = %admin.username,
        "About content upserted",
    );

    Ok(Json(DataResponse { data: record }))
}

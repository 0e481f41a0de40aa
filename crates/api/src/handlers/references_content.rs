//! Handlers for references-page content sections.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use nexora_core::section::ReferencesSection;
use nexora_db::models::references_content::UpsertReferencesContent;
use nexora_db::repositories::ReferencesContentRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/references-content
///
/// List all references-page sections that have content.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sections = ReferencesContentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: sections }))
}

/// PUT /api/admin/references-content/{section}
///
/// Create or replace one section's content (upsert keyed by the fixed
/// section name).
pub async fn upsert(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(section): Path<String>,
    Json(input): Json<UpsertReferencesContent>,
) -> AppResult<impl IntoResponse> {
    let section = ReferencesSection::from_str(&section)?;
    input.title.validate("title")?;
    input.content.validate("content")?;
    if let Some(button_text) = &input.button_text {
        button_text.validate("button_text")?;
    }

    let record = ReferencesContentRepo::upsert(&state.pool, section, &input).await?;

    tracing::info!(
        section = section.as_str(),
        admin = %admin.username,
        "References content upserted",
    );

    Ok(Json(DataResponse { data: record }))
}

//! About-page content models and DTOs.
//!
//! One row per fixed section (`about`, `mission`, `vision`, `values`),
//! maintained via upsert-by-section.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use nexora_core::localized::LocalizedText;
use nexora_core::types::{DbId, Timestamp};

/// A row from the `about_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutContent {
    pub id: DbId,
    /// Fixed section key; unique per row.
    pub section: String,
    pub title: Json<LocalizedText>,
    pub content: Json<LocalizedText>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting an about-page section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAboutContent {
    pub title: LocalizedText,
    pub content: LocalizedText,
}

//! References-page content models and DTOs.
//!
//! One row per fixed section (`hero`, `trusted_partner`, `cta`), maintained
//! via upsert-by-section.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use nexora_core::localized::LocalizedText;
use nexora_core::types::{DbId, Timestamp};

/// A row from the `references_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReferencesContent {
    pub id: DbId,
    /// Fixed section key; unique per row.
    pub section: String,
    pub title: Json<LocalizedText>,
    pub content: Json<LocalizedText>,
    pub button_text: Option<Json<LocalizedText>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a references-page section.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertReferencesContent {
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub button_text: Option<LocalizedText>,
}

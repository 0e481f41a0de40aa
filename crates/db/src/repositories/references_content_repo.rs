//! Repository for the `references_content` table.
//!
//! Same section-keyed upsert pattern as `about_content_repo`.

use sqlx::types::Json;

use nexora_core::section::ReferencesSection;

use crate::models::references_content::{ReferencesContent, UpsertReferencesContent};
use crate::DbPool;

/// Column list for `references_content` queries.
const COLUMNS: &str = "id, section, title, content, button_text, created_at, updated_at";

/// Provides data access for references-page sections.
pub struct ReferencesContentRepo;

impl ReferencesContentRepo {
    /// List all sections that have content.
    pub async fn list(pool: &DbPool) -> Result<Vec<ReferencesContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM references_content ORDER BY section");
        sqlx::query_as::<_, ReferencesContent>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find one section's content.
    pub async fn find_by_section(
        pool: &DbPool,
        section: ReferencesSection,
    ) -> Result<Option<ReferencesContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM references_content WHERE section = ?");
        sqlx::query_as::<_, ReferencesContent>(&query)
            .bind(section.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Create or replace a section's content, keyed by the section name.
    pub async fn upsert(
        pool: &DbPool,
        section: ReferencesSection,
        dto: &UpsertReferencesContent,
    ) -> Result<ReferencesContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO references_content (section, title, content, button_text) \
             VALUES (?, ?, ?, ?) \
             ON CONFLICT (section) DO UPDATE SET \
                 title = excluded.title, \
                 content = excluded.content, \
                 button_text = excluded.button_text, \
                 updated_at = CURRENT_TIMESTAMP \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ReferencesContent>(&query)
            .bind(section.as_str())
            .bind(Json(&dto.title))
            .bind(Json(&dto.content))
            .bind(dto.button_text.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }
}

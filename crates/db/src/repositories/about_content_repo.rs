//! Repository for the `about_content` table.
//!
//! Section-keyed singleton rows: `upsert` is the only write path, keyed by
//! the fixed section name rather than the generated id.

use sqlx::types::Json;

use nexora_core::section::AboutSection;

use crate::models::about_content::{AboutContent, UpsertAboutContent};
use crate::DbPool;

/// Column list for `about_content` queries.
const COLUMNS: &str = "id, section, title, content, created_at, updated_at";

/// Provides data access for about-page sections.
pub struct AboutContentRepo;

impl AboutContentRepo {
    /// List all sections that have content.
    pub async fn list(pool: &DbPool) -> Result<Vec<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content ORDER BY section");
        sqlx::query_as::<_, AboutContent>(&query).fetch_all(pool).await
    }

    /// Find one section's content.
    pub async fn find_by_section(
        pool: &DbPool,
        section: AboutSection,
    ) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content WHERE section = ?");
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(section.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Create or replace a section's content, keyed by the section name.
    ///
    /// Idempotent: repeated identical calls produce the same stored state.
    pub async fn upsert(
        pool: &DbPool,
        section: AboutSection,
        dto: &UpsertAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_content (section, title, content) \
             VALUES (?, ?, ?) \
             ON CONFLICT (section) DO UPDATE SET \
                 title = excluded.title, \
                 content = excluded.content, \
                 updated_at = CURRENT_TIMESTAMP \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AboutContent>(&query)
            .bind(section.as_str())
            .bind(Json(&dto.title))
            .bind(Json(&dto.content))
            .fetch_one(pool)
            .await
    }
}

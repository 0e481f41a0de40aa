//! Repository for the `company_values` table.
//!
//! An ordered collection: new values append at the end, and the reorder
//! operation keeps `display_order` dense from 1.

use sqlx::types::Json;

use nexora_core::error::CoreError;
use nexora_core::types::DbId;

use crate::models::company_value::{CompanyValue, CreateCompanyValue, UpdateCompanyValue};
use crate::models::ReorderItem;
use crate::repositories::reorder_collection;
use crate::DbPool;

/// Column list for `company_values` queries.
const COLUMNS: &str = "id, icon, title, description, display_order, created_at, updated_at";

/// Provides data access for company values.
pub struct CompanyValueRepo;

impl CompanyValueRepo {
    /// List all company values in display order.
    pub async fn list(pool: &DbPool) -> Result<Vec<CompanyValue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_values ORDER BY display_order");
        sqlx::query_as::<_, CompanyValue>(&query).fetch_all(pool).await
    }

    /// Find a company value by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<CompanyValue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_values WHERE id = ?");
        sqlx::query_as::<_, CompanyValue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a company value at the end of the ordering. The icon name must
    /// already be normalized to the closed set.
    pub async fn create(
        pool: &DbPool,
        icon: &str,
        dto: &CreateCompanyValue,
    ) -> Result<CompanyValue, sqlx::Error> {
        let query = format!(
            "INSERT INTO company_values (icon, title, description, display_order) \
             VALUES (?, ?, ?, \
                 (SELECT COALESCE(MAX(display_order), 0) + 1 FROM company_values)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyValue>(&query)
            .bind(icon)
            .bind(Json(&dto.title))
            .bind(Json(&dto.description))
            .fetch_one(pool)
            .await
    }

    /// Partially update a company value. Only provided fields change.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        icon: Option<&str>,
        dto: &UpdateCompanyValue,
    ) -> Result<Option<CompanyValue>, sqlx::Error> {
        let query = format!(
            "UPDATE company_values SET \
                 icon = COALESCE(?, icon), \
                 title = COALESCE(?, title), \
                 description = COALESCE(?, description), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyValue>(&query)
            .bind(icon)
            .bind(dto.title.as_ref().map(Json))
            .bind(dto.description.as_ref().map(Json))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a company value by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM company_values WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a reorder batch, all-or-nothing. See
    /// [`reorder_collection`](crate::repositories::reorder_collection).
    pub async fn reorder(
        pool: &DbPool,
        batch: &[ReorderItem],
    ) -> Result<Vec<CompanyValue>, CoreError> {
        reorder_collection(pool, "company_values", COLUMNS, "CompanyValue", batch).await
    }
}

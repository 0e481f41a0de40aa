//! Repositories for the `homepage_statistics` and `homepage_solutions`
//! tables — the two ordered collections rendered on the homepage.

use sqlx::types::Json;

use nexora_core::error::CoreError;
use nexora_core::types::DbId;

use crate::models::homepage::{
    CreateHomepageSolution, CreateHomepageStatistic, HomepageSolution, HomepageStatistic,
    UpdateHomepageSolution, UpdateHomepageStatistic,
};
use crate::models::ReorderItem;
use crate::repositories::reorder_collection;
use crate::DbPool;

/// Column list for `homepage_statistics` queries.
const STAT_COLUMNS: &str = "id, icon, value, label, display_order, created_at, updated_at";

/// Column list for `homepage_solutions` queries.
const SOLUTION_COLUMNS: &str = "id, icon, title, description, display_order, created_at, updated_at";

/// Provides data access for homepage statistics.
pub struct HomepageStatisticRepo;

impl HomepageStatisticRepo {
    /// List all statistics in display order.
    pub async fn list(pool: &DbPool) -> Result<Vec<HomepageStatistic>, sqlx::Error> {
        let query = format!("SELECT {STAT_COLUMNS} FROM homepage_statistics ORDER BY display_order");
        sqlx::query_as::<_, HomepageStatistic>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a statistic by id.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<HomepageStatistic>, sqlx::Error> {
        let query = format!("SELECT {STAT_COLUMNS} FROM homepage_statistics WHERE id = ?");
        sqlx::query_as::<_, HomepageStatistic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a statistic at the end of the ordering.
    pub async fn create(
        pool: &DbPool,
        icon: &str,
        dto: &CreateHomepageStatistic,
    ) -> Result<HomepageStatistic, sqlx::Error> {
        let query = format!(
            "INSERT INTO homepage_statistics (icon, value, label, display_order) \
             VALUES (?, ?, ?, \
                 (SELECT COALESCE(MAX(display_order), 0) + 1 FROM homepage_statistics)) \
             RETURNING {STAT_COLUMNS}"
        );
        sqlx::query_as::<_, HomepageStatistic>(&query)
            .bind(icon)
            .bind(&dto.value)
            .bind(Json(&dto.label))
            .fetch_one(pool)
            .await
    }

    /// Partially update a statistic. Only provided fields change.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        icon: Option<&str>,
        dto: &UpdateHomepageStatistic,
    ) -> Result<Option<HomepageStatistic>, sqlx::Error> {
        let query = format!(
            "UPDATE homepage_statistics SET \
                 icon = COALESCE(?, icon), \
                 value = COALESCE(?, value), \
                 label = COALESCE(?, label), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {STAT_COLUMNS}"
        );
        sqlx::query_as::<_, HomepageStatistic>(&query)
            .bind(icon)
            .bind(&dto.value)
            .bind(dto.label.as_ref().map(Json))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a statistic by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM homepage_statistics WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a reorder batch, all-or-nothing.
    pub async fn reorder(
        pool: &DbPool,
        batch: &[ReorderItem],
    ) -> Result<Vec<HomepageStatistic>, CoreError> {
        reorder_collection(
            pool,
            "homepage_statistics",
            STAT_COLUMNS,
            "HomepageStatistic",
            batch,
        )
        .await
    }
}

/// Provides data access for homepage solutions.
pub struct HomepageSolutionRepo;

impl HomepageSolutionRepo {
    /// List all solutions in display order.
    pub async fn list(pool: &DbPool) -> Result<Vec<HomepageSolution>, sqlx::Error> {
        let query =
            format!("SELECT {SOLUTION_COLUMNS} FROM homepage_solutions ORDER BY display_order");
        sqlx::query_as::<_, HomepageSolution>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a solution by id.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<HomepageSolution>, sqlx::Error> {
        let query = format!("SELECT {SOLUTION_COLUMNS} FROM homepage_solutions WHERE id = ?");
        sqlx::query_as::<_, HomepageSolution>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a solution at the end of the ordering.
    pub async fn create(
        pool: &DbPool,
        icon: &str,
        dto: &CreateHomepageSolution,
    ) -> Result<HomepageSolution, sqlx::Error> {
        let query = format!(
            "INSERT INTO homepage_solutions (icon, title, description, display_order) \
             VALUES (?, ?, ?, \
                 (SELECT COALESCE(MAX(display_order), 0) + 1 FROM homepage_solutions)) \
             RETURNING {SOLUTION_COLUMNS}"
        );
        sqlx::query_as::<_, HomepageSolution>(&query)
            .bind(icon)
            .bind(Json(&dto.title))
            .bind(Json(&dto.description))
            .fetch_one(pool)
            .await
    }

    /// Partially update a solution. Only provided fields change.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        icon: Option<&str>,
        dto: &UpdateHomepageSolution,
    ) -> Result<Option<HomepageSolution>, sqlx::Error> {
        let query = format!(
            "UPDATE homepage_solutions SET \
                 icon = COALESCE(?, icon), \
                 title = COALESCE(?, title), \
                 description = COALESCE(?, description), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {SOLUTION_COLUMNS}"
        );
        sqlx::query_as::<_, HomepageSolution>(&query)
            .bind(icon)
            .bind(dto.title.as_ref().map(Json))
            .bind(dto.description.as_ref().map(Json))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a solution by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM homepage_solutions WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Apply a reorder batch, all-or-nothing.
    pub async fn reorder(
        pool: &DbPool,
        batch: &[ReorderItem],
    ) -> Result<Vec<HomepageSolution>, CoreError> {
        reorder_collection(
            pool,
            "homepage_solutions",
            SOLUTION_COLUMNS,
            "HomepageSolution",
            batch,
        )
        .await
    }
}

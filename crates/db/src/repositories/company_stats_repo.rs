//! Repository for the `company_stats` singleton.
//!
//! The table holds exactly one row keyed by the constant id 1 (seeded by the
//! initial migration). Updates merge supplied counters via COALESCE; there is
//! no create or delete operation.

use nexora_core::types::DbId;

use crate::models::company_stats::{CompanyStats, UpdateCompanyStats};
use crate::DbPool;

/// The singleton row's fixed id.
const SINGLETON_ID: DbId = 1;

/// Column list for `company_stats` queries.
const COLUMNS: &str = "id, experience_years, completed_projects, happy_customers, \
                       team_size, created_at, updated_at";

/// Provides data access for the company statistics singleton.
pub struct CompanyStatsRepo;

impl CompanyStatsRepo {
    /// Fetch the singleton row.
    pub async fn get(pool: &DbPool) -> Result<Option<CompanyStats>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM company_stats WHERE id = ?");
        sqlx::query_as::<_, CompanyStats>(&query)
            .bind(SINGLETON_ID)
            .fetch_optional(pool)
            .await
    }

    /// Merge the supplied counters into the singleton row. Creates the row
    /// if it is somehow absent, so the operation is a true upsert.
    pub async fn upsert(
        pool: &DbPool,
        dto: &UpdateCompanyStats,
    ) -> Result<CompanyStats, sqlx::Error> {
        let query = format!(
            "INSERT INTO company_stats \
                 (id, experience_years, completed_projects, happy_customers, team_size) \
             VALUES (?, COALESCE(?, 0), COALESCE(?, 0), COALESCE(?, 0), COALESCE(?, 0)) \
             ON CONFLICT (id) DO UPDATE SET \
                 experience_years = COALESCE(?, company_stats.experience_years), \
                 completed_projects = COALESCE(?, company_stats.completed_projects), \
                 happy_customers = COALESCE(?, company_stats.happy_customers), \
                 team_size = COALESCE(?, company_stats.team_size), \
                 updated_at = CURRENT_TIMESTAMP \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompanyStats>(&query)
            .bind(SINGLETON_ID)
            .bind(dto.experience_years)
            .bind(dto.completed_projects)
            .bind(dto.happy_customers)
            .bind(dto.team_size)
            .bind(dto.experience_years)
            .bind(dto.completed_projects)
            .bind(dto.happy_customers)
            .bind(dto.team_size)
            .fetch_one(pool)
            .await
    }
}

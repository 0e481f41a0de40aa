//! Company statistics: a singleton row keyed by the constant id 1.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use nexora_core::types::{DbId, Timestamp};

/// The single row of the `company_stats` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyStats {
    pub id: DbId,
    pub experience_years: i64,
    pub completed_projects: i64,
    pub happy_customers: i64,
    pub team_size: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for partially updating the singleton. Omitted counters keep their
/// prior values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyStats {
    pub experience_years: Option<i64>,
    pub completed_projects: Option<i64>,
    pub happy_customers: Option<i64>,
    pub team_size: Option<i64>,
}

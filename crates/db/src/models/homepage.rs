//! Homepage statistic and solution models and DTOs.
//!
//! Both are ordered collections: `display_order` values stay unique and
//! dense (1..n) after any reorder, enforced by the repositories.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use nexora_core::localized::LocalizedText;
use nexora_core::types::{DbId, Timestamp};

/// A row from the `homepage_statistics` table (e.g. value "25+", label
/// "Years of experience").
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HomepageStatistic {
    pub id: DbId,
    pub icon: String,
    pub value: String,
    pub label: Json<LocalizedText>,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a homepage statistic.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHomepageStatistic {
    pub icon: Option<String>,
    pub value: String,
    pub label: LocalizedText,
}

/// DTO for partially updating a homepage statistic.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHomepageStatistic {
    pub icon: Option<String>,
    pub value: Option<String>,
    pub label: Option<LocalizedText>,
}

/// A row from the `homepage_solutions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HomepageSolution {
    pub id: DbId,
    pub icon: String,
    pub title: Json<LocalizedText>,
    pub description: Json<LocalizedText>,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a homepage solution.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHomepageSolution {
    pub icon: Option<String>,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// DTO for partially updating a homepage solution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHomepageSolution {
    pub icon: Option<String>,
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
}

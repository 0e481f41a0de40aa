//! Company value models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use nexora_core::localized::LocalizedText;
use nexora_core::types::{DbId, Timestamp};

/// A row from the `company_values` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyValue {
    pub id: DbId,
    /// Canonical icon name from the closed set (see `nexora_core::icon`).
    pub icon: String,
    pub title: Json<LocalizedText>,
    pub description: Json<LocalizedText>,
    pub display_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a company value. The icon name is normalized through
/// `IconKind::from_name` before it reaches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompanyValue {
    pub icon: Option<String>,
    pub title: LocalizedText,
    pub description: LocalizedText,
}

/// DTO for partially updating a company value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyValue {
    pub icon: Option<String>,
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
}

//! Team member models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use nexora_core::localized::LocalizedText;
use nexora_core::types::{DbId, Timestamp};

/// A row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    /// Job title; plain string or per-language map.
    pub position: Json<LocalizedText>,
    pub email: String,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub position: LocalizedText,
    pub email: String,
    pub image: Option<String>,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
}

/// DTO for partially updating a team member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub position: Option<LocalizedText>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

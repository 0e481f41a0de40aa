//! Repository for the `team_members` table.

use sqlx::types::Json;

use nexora_core::types::DbId;

use crate::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use crate::DbPool;

/// Column list for `team_members` queries.
const COLUMNS: &str = "id, name, position, email, image, is_active, created_at, updated_at";

/// Provides data access for team members.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// List all team members, active and inactive (admin view).
    pub async fn list(pool: &DbPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members ORDER BY id");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// List only active team members (public site view).
    pub async fn list_active(pool: &DbPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE is_active = 1 ORDER BY id");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// Find a team member by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = ?");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new team member. `is_active` defaults to true.
    pub async fn create(pool: &DbPool, dto: &CreateTeamMember) -> Result<TeamMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO team_members (name, position, email, image, is_active) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&dto.name)
            .bind(Json(&dto.position))
            .bind(&dto.email)
            .bind(&dto.image)
            .bind(dto.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Partially update a team member. Only provided fields change.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        dto: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET \
                 name = COALESCE(?, name), \
                 position = COALESCE(?, position), \
                 email = COALESCE(?, email), \
                 image = COALESCE(?, image), \
                 is_active = COALESCE(?, is_active), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(&dto.name)
            .bind(dto.position.as_ref().map(Json))
            .bind(&dto.email)
            .bind(&dto.image)
            .bind(dto.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a team member by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

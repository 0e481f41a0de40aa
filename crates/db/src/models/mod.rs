//! Row structs and request DTOs, one module per content collection.
//!
//! Row structs derive `FromRow` + `Serialize`; `Create*` DTOs carry required
//! fields, `Update*` DTOs are all-`Option` so repositories can apply
//! COALESCE partial updates (omitted fields keep their prior values).

pub mod about_content;
pub mod blog_post;
pub mod company_stats;
pub mod company_value;
pub mod homepage;
pub mod references_content;
pub mod submission;
pub mod team_member;

use serde::Deserialize;

use nexora_core::types::DbId;

/// One entry in a reorder batch: assign `display_order` to the row `id`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderItem {
    pub id: DbId,
    pub display_order: i64,
}

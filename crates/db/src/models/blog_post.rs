//! Blog post models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use nexora_core::localized::LocalizedText;
use nexora_core::types::{DbId, Timestamp};

/// A row from the `blog_posts` table.
///
/// `published_at` is `None` for drafts; publish/unpublish are explicit
/// operations, not partial-update fields, so a partial update can never
/// silently change publication state.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: Json<LocalizedText>,
    pub content: Json<LocalizedText>,
    pub excerpt: Option<Json<LocalizedText>>,
    pub category: String,
    pub image: Option<String>,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBlogPost {
    pub title: LocalizedText,
    pub content: LocalizedText,
    pub excerpt: Option<LocalizedText>,
    pub category: String,
    pub image: Option<String>,
    /// When `true` the post is published immediately; defaults to draft.
    pub published: Option<bool>,
}

/// DTO for partially updating a blog post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<LocalizedText>,
    pub content: Option<LocalizedText>,
    pub excerpt: Option<LocalizedText>,
    pub category: Option<String>,
    pub image: Option<String>,
}

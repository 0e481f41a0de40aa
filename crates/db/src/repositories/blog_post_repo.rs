//! Repository for the `blog_posts` table.

use sqlx::types::Json;

use nexora_core::types::DbId;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use crate::DbPool;

/// Column list for `blog_posts` queries.
const COLUMNS: &str = "id, title, content, excerpt, category, image, \
                       published_at, created_at, updated_at";

/// Provides data access for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// List all posts, drafts included, newest first (admin view).
    pub async fn list(pool: &DbPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// List only published posts, newest first (public site view).
    pub async fn list_published(pool: &DbPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts \
             WHERE published_at IS NOT NULL \
             ORDER BY published_at DESC, id DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Find a post by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = ?");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a post. Published immediately when `dto.published` is true,
    /// otherwise stored as a draft. The publish timestamp is always set by
    /// `CURRENT_TIMESTAMP` so every row shares one format and
    /// `ORDER BY published_at` stays consistent with [`Self::publish`].
    pub async fn create(pool: &DbPool, dto: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title, content, excerpt, category, image, published_at) \
             VALUES (?, ?, ?, ?, ?, CASE WHEN ? THEN CURRENT_TIMESTAMP END) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(Json(&dto.title))
            .bind(Json(&dto.content))
            .bind(dto.excerpt.as_ref().map(Json))
            .bind(&dto.category)
            .bind(&dto.image)
            .bind(dto.published.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Partially update a post's content fields. Publication state is
    /// untouched; use [`Self::publish`] / [`Self::unpublish`] for that.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        dto: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 title = COALESCE(?, title), \
                 content = COALESCE(?, content), \
                 excerpt = COALESCE(?, excerpt), \
                 category = COALESCE(?, category), \
                 image = COALESCE(?, image), \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(dto.title.as_ref().map(Json))
            .bind(dto.content.as_ref().map(Json))
            .bind(dto.excerpt.as_ref().map(Json))
            .bind(&dto.category)
            .bind(&dto.image)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a post as published now. Idempotent for already-published posts
    /// apart from refreshing the publish timestamp.
    pub async fn publish(pool: &DbPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 published_at = CURRENT_TIMESTAMP, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return a post to draft state.
    pub async fn unpublish(pool: &DbPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 published_at = NULL, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&DbPool` as the first argument. Partial updates use COALESCE so
//! omitted fields keep their prior values; section-keyed collections use
//! `INSERT ... ON CONFLICT ... DO UPDATE` upserts.

pub mod about_content_repo;
pub mod blog_post_repo;
pub mod company_stats_repo;
pub mod company_value_repo;
pub mod homepage_repo;
pub mod references_content_repo;
pub mod submission_repo;
pub mod team_member_repo;

pub use about_content_repo::AboutContentRepo;
pub use blog_post_repo::BlogPostRepo;
pub use company_stats_repo::CompanyStatsRepo;
pub use company_value_repo::CompanyValueRepo;
pub use homepage_repo::{HomepageSolutionRepo, HomepageStatisticRepo};
pub use references_content_repo::ReferencesContentRepo;
pub use submission_repo::{ContactMessageRepo, DemoRequestRepo, JobApplicationRepo};
pub use team_member_repo::TeamMemberRepo;

use std::collections::BTreeMap;
use std::collections::HashSet;

use nexora_core::error::CoreError;
use nexora_core::types::DbId;

use crate::models::ReorderItem;
use crate::DbPool;

/// Apply a reorder batch to a `display_order`-bearing table, all-or-nothing.
///
/// Rejects the whole batch with [`CoreError::StaleOrder`] if two entries
/// target the same id or the same order value, and with
/// [`CoreError::NotFound`] if any id is unknown. On success every row is
/// renumbered dense from 1, ordered by (assigned order, id), inside a single
/// transaction.
pub(crate) async fn reorder_collection<T>(
    pool: &DbPool,
    table: &str,
    columns: &str,
    entity: &'static str,
    batch: &[ReorderItem],
) -> Result<Vec<T>, CoreError>
where
    T: for<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> + Send + Unpin,
{
    validate_reorder_batch(batch)?;

    let mut tx = pool
        .begin()
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    let query = format!("SELECT id, display_order FROM {table}");
    let rows: Vec<(DbId, i64)> = sqlx::query_as(&query)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    let mut orders: BTreeMap<DbId, i64> = rows.into_iter().collect();

    for item in batch {
        if !orders.contains_key(&item.id) {
            // Dropping the transaction rolls back.
            return Err(CoreError::NotFound {
                entity,
                id: item.id,
            });
        }
        orders.insert(item.id, item.display_order);
    }

    // Renumber dense from 1, stable on id for equal orders.
    let mut ranked: Vec<(DbId, i64)> = orders.into_iter().collect();
    ranked.sort_by_key(|&(id, order)| (order, id));

    let update = format!(
        "UPDATE {table} SET display_order = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?"
    );
    for (position, (id, _)) in ranked.iter().enumerate() {
        sqlx::query(&update)
            .bind(position as i64 + 1)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;
    }

    tx.commit()
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))?;

    let list = format!("SELECT {columns} FROM {table} ORDER BY display_order");
    sqlx::query_as::<_, T>(&list)
        .fetch_all(pool)
        .await
        .map_err(|e| CoreError::Internal(e.to_string()))
}

/// Check a reorder batch for internal conflicts before touching the store.
fn validate_reorder_batch(batch: &[ReorderItem]) -> Result<(), CoreError> {
    if batch.is_empty() {
        return Err(CoreError::Validation(
            "Reorder batch must not be empty".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();
    let mut seen_orders = HashSet::new();
    for item in batch {
        if !seen_ids.insert(item.id) {
            return Err(CoreError::StaleOrder(format!(
                "id {} appears more than once in the batch",
                item.id
            )));
        }
        if !seen_orders.insert(item.display_order) {
            return Err(CoreError::StaleOrder(format!(
                "order {} is assigned to more than one id",
                item.display_order
            )));
        }
    }
    Ok(())
}

//! Integration tests for the reorder operation on `display_order`-bearing
//! collections: dense renumbering, atomic rejection of conflicting batches,
//! and rollback on unknown ids.

use assert_matches::assert_matches;
use sqlx::SqlitePool;

use nexora_core::error::CoreError;
use nexora_core::localized::LocalizedText;
use nexora_db::models::homepage::CreateHomepageStatistic;
use nexora_db::models::ReorderItem;
use nexora_db::repositories::HomepageStatisticRepo;

async fn seed_three(pool: &SqlitePool) -> Vec<i64> {
    let mut ids = Vec::new();
    for (value, label) in [("25+", "Yıllık deneyim"), ("500+", "Proje"), ("120+", "Müşteri")] {
        let dto = CreateHomepageStatistic {
            icon: None,
            value: value.to_string(),
            label: LocalizedText::tr_only(label),
        };
        let row = HomepageStatisticRepo::create(pool, "target", &dto)
            .await
            .unwrap();
        ids.push(row.id);
    }
    ids
}

fn item(id: i64, display_order: i64) -> ReorderItem {
    ReorderItem { id, display_order }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_appends_dense_orders(pool: SqlitePool) {
    seed_three(&pool).await;

    let rows = HomepageStatisticRepo::list(&pool).await.unwrap();
    let orders: Vec<i64> = rows.iter().map(|r| r.display_order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_reorder_renumbers_dense_from_one(pool: SqlitePool) {
    let ids = seed_three(&pool).await;

    // Move the last row to the front with a deliberately sparse order value.
    let rows = HomepageStatisticRepo::reorder(&pool, &[item(ids[2], 0)])
        .await
        .unwrap();

    let got: Vec<(i64, i64)> = rows.iter().map(|r| (r.id, r.display_order)).collect();
    assert_eq!(got, vec![(ids[2], 1), (ids[0], 2), (ids[1], 3)]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_full_permutation_reorder(pool: SqlitePool) {
    let ids = seed_three(&pool).await;

    let batch = [item(ids[0], 3), item(ids[1], 1), item(ids[2], 2)];
    let rows = HomepageStatisticRepo::reorder(&pool, &batch).await.unwrap();

    let got: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(got, vec![ids[1], ids[2], ids[0]]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_conflicting_batch_is_rejected_atomically(pool: SqlitePool) {
    let ids = seed_three(&pool).await;
    let before: Vec<(i64, i64)> = HomepageStatisticRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|r| (r.id, r.display_order))
        .collect();

    // Two ids assigned the same new order: the whole batch must fail.
    let result =
        HomepageStatisticRepo::reorder(&pool, &[item(ids[0], 1), item(ids[1], 1)]).await;
    assert_matches!(result, Err(CoreError::StaleOrder(_)));

    let after: Vec<(i64, i64)> = HomepageStatisticRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|r| (r.id, r.display_order))
        .collect();
    assert_eq!(after, before);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_id_rolls_back_whole_batch(pool: SqlitePool) {
    let ids = seed_three(&pool).await;

    let result =
        HomepageStatisticRepo::reorder(&pool, &[item(ids[0], 3), item(999_999, 1)]).await;
    assert_matches!(result, Err(CoreError::NotFound { id: 999_999, .. }));

    let orders: Vec<i64> = HomepageStatisticRepo::list(&pool)
        .await
        .unwrap()
        .iter()
        .map(|r| r.display_order)
        .collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_then_reorder_restores_density(pool: SqlitePool) {
    let ids = seed_three(&pool).await;
    HomepageStatisticRepo::delete(&pool, ids[1]).await.unwrap();

    // Orders now have a gap (1, 3); any reorder re-densifies.
    let rows = HomepageStatisticRepo::reorder(&pool, &[item(ids[0], 1)])
        .await
        .unwrap();
    let orders: Vec<i64> = rows.iter().map(|r| r.display_order).collect();
    assert_eq!(orders, vec![1, 2]);
}

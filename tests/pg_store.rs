//! Store contract against a real PostgreSQL. Needs `DATABASE_URL`; run with
//! `cargo test -- --ignored`.

use axum_test::TestServer;
use rowkeep::{app, ensure_tables, Account, EntityStore, InventoryItem, PgStore, StoreError};
use serde_json::json;
use sqlx::PgPool;

async fn stores(pool: &PgPool) -> (PgStore<Account>, PgStore<InventoryItem>) {
    ensure_tables(pool).await.unwrap();
    (PgStore::new(pool.clone()), PgStore::new(pool.clone()))
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn create_assigns_distinct_positive_ids(pool: PgPool) {
    let (accounts, _) = stores(&pool).await;

    let a = accounts.create(Account::new("joao", "joao@x.com")).await.unwrap();
    let b = accounts.create(Account::new("ana", "ana@x.com")).await.unwrap();

    assert!(a.id.unwrap() > 0);
    assert!(b.id.unwrap() > 0);
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn get_returns_what_was_created(pool: PgPool) {
    let (_, items) = stores(&pool).await;

    let created = items.create(InventoryItem::new("bolt", 40, 0.25)).await.unwrap();
    let found = items.get_by_id(created.id.unwrap()).await.unwrap();

    assert_eq!(found, created);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn update_overwrites_every_field(pool: PgPool) {
    let (_, items) = stores(&pool).await;
    let mut item = items.create(InventoryItem::new("bolt", 40, 0.25)).await.unwrap();

    item.name = "hex bolt".into();
    item.qty = 0;
    item.price = 0.3;
    items.update_by_id(&item).await.unwrap();

    assert_eq!(items.get_by_id(item.id.unwrap()).await.unwrap(), item);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn update_of_missing_row_still_succeeds(pool: PgPool) {
    let (accounts, _) = stores(&pool).await;
    let mut ghost = Account::new("ghost", "ghost@x.com");
    ghost.id = Some(123_456);

    accounts.update_by_id(&ghost).await.unwrap();

    assert!(accounts.list_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn delete_then_get_is_not_found(pool: PgPool) {
    let (accounts, _) = stores(&pool).await;
    let id = accounts
        .create(Account::new("joao", "joao@x.com"))
        .await
        .unwrap()
        .id
        .unwrap();

    assert!(accounts.delete_by_id(id).await.unwrap());

    let err = accounts.get_by_id(id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "account", id: missing } if missing == id));
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn delete_of_unused_id_succeeds(pool: PgPool) {
    let (accounts, _) = stores(&pool).await;

    assert!(!accounts.delete_by_id(987_654).await.unwrap());
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn list_tracks_creates_and_matching_deletes(pool: PgPool) {
    let (accounts, _) = stores(&pool).await;
    assert!(accounts.list_all().await.unwrap().is_empty());

    let a = accounts.create(Account::new("a", "a@x.com")).await.unwrap();
    assert_eq!(accounts.list_all().await.unwrap().len(), 1);
    accounts.create(Account::new("b", "b@x.com")).await.unwrap();
    assert_eq!(accounts.list_all().await.unwrap().len(), 2);

    accounts.delete_by_id(a.id.unwrap()).await.unwrap();
    assert_eq!(accounts.list_all().await.unwrap().len(), 1);
    accounts.delete_by_id(a.id.unwrap()).await.unwrap();
    assert_eq!(accounts.list_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn overlong_username_is_a_persistence_error(pool: PgPool) {
    let (accounts, _) = stores(&pool).await;

    let err = accounts
        .create(Account::new("x".repeat(51), "x@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Persistence(_)));
}

#[sqlx::test(migrations = false)]
#[ignore = "needs a reachable PostgreSQL at DATABASE_URL"]
async fn http_round_trip_against_the_accounts_table(pool: PgPool) {
    ensure_tables(&pool).await.unwrap();
    let server = TestServer::new(app(pool)).unwrap();

    let response = server
        .post("/user")
        .json(&json!({"Username": "joao", "Email": "joao@x.com"}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let created: Account = response.json();
    let id = created.id.unwrap();

    let fetched: Account = server.get(&format!("/albums/{}", id)).await.json();
    assert_eq!(fetched, created);

    server.delete(&format!("/albums/{}", id)).await.assert_status_ok();
    server
        .get(&format!("/albums/{}", id))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);

    server.get("/ready").await.assert_status_ok();
}

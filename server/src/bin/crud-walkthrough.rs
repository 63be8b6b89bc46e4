//! One-shot walkthrough of the store contract for both entity kinds:
//! create, list, update, read back, delete, then confirm the delete.
//!
//! Run from repo root: `cargo run -p rowkeep-server --bin crud-walkthrough`

use rowkeep::{ensure_tables, Account, Entity, EntityStore, InventoryItem, PgStore, Settings, StoreError};
use sqlx::PgPool;
use std::fmt::Debug;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rowkeep=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool: PgPool = settings
        .database
        .pool_options()
        .connect_with(settings.database.connect_options()?)
        .await?;
    ensure_tables(&pool).await?;
    println!("connected to database");

    let accounts = PgStore::<Account>::new(pool.clone());
    walk(&accounts, Account::new("joao", "joao@example.com"), |a| {
        a.username = "john_smith".into();
    })
    .await?;

    let items = PgStore::<InventoryItem>::new(pool);
    walk(&items, InventoryItem::new("widget", 12, 3.5), |i| {
        i.qty -= 2;
        i.price = 3.25;
    })
    .await?;

    Ok(())
}

async fn walk<E, S, F>(store: &S, record: E, edit: F) -> Result<(), StoreError>
where
    E: Entity + Debug,
    S: EntityStore<E>,
    F: FnOnce(&mut E),
{
    let mut created = store.create(record).await?;
    let Some(id) = created.id() else {
        return Err(StoreError::Unsaved { kind: E::KIND });
    };
    println!("{} created with id {}", E::KIND, id);

    let all = store.list_all().await?;
    println!("{} {} row(s):", all.len(), E::KIND);
    for row in &all {
        println!("  {:?}", row);
    }

    edit(&mut created);
    store.update_by_id(&created).await?;
    println!("{} {} updated", E::KIND, id);

    let found = store.get_by_id(id).await?;
    println!("{} found: {:?}", E::KIND, found);

    store.delete_by_id(id).await?;
    println!("{} {} deleted", E::KIND, id);

    match store.get_by_id(id).await {
        Err(StoreError::NotFound { .. }) => println!("{} {} is gone", E::KIND, id),
        Err(e) => return Err(e),
        Ok(row) => println!("{} {} still present: {:?}", E::KIND, id, row),
    }
    Ok(())
}

//! Database and table bootstrap run once at startup. Not a migration system:
//! every statement is idempotent and nothing is ever altered or dropped.

use crate::entity::Entity;
use crate::error::StoreError;
use crate::model::{Account, InventoryItem};
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};

/// Create the target database if it does not exist, via the `postgres` maintenance database.
pub async fn ensure_database_exists(opts: &PgConnectOptions) -> Result<(), StoreError> {
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = opts.clone().database("postgres").connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Run one entity kind's `CREATE TABLE IF NOT EXISTS`.
pub async fn ensure_table<E: Entity>(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(E::CREATE_TABLE).execute(pool).await?;
    tracing::debug!(table = E::TABLE, "table ready");
    Ok(())
}

/// Tables for every entity kind this crate knows.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), StoreError> {
    ensure_table::<Account>(pool).await?;
    ensure_table::<InventoryItem>(pool).await?;
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

//! rowkeep: generic entity store over PostgreSQL with a thin account REST façade.

pub mod bootstrap;
pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_utils;

pub use bootstrap::{ensure_database_exists, ensure_table, ensure_tables};
pub use config::{DatabaseSettings, Settings};
pub use entity::{Entity, Id};
pub use error::{AppError, ConfigError, StoreError};
pub use model::{Account, InventoryItem};
pub use routes::{account_routes, app, common_routes, common_routes_with_ready};
pub use state::AppState;
pub use store::{EntityStore, PgStore};

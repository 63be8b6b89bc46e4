//! Shared application state for all routes.

use crate::model::Account;
use crate::store::{EntityStore, PgStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<dyn EntityStore<Account>>,
}

impl AppState {
    /// State backed by PostgreSQL stores sharing one pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            accounts: Arc::new(PgStore::<Account>::new(pool)),
        }
    }
}

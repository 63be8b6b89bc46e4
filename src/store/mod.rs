//! The entity store contract and its PostgreSQL implementation.

mod postgres;

use crate::entity::{Entity, Id};
use crate::error::StoreError;
use async_trait::async_trait;

pub use postgres::PgStore;

/// Persistence operations for one entity kind.
///
/// The store keeps no copy of any record between calls. Mutations carry no
/// existence check or version token: an update or delete that matches no row
/// still succeeds.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Insert `record` (its identity is ignored) and return it with the assigned identity.
    async fn create(&self, record: E) -> Result<E, StoreError>;

    /// Every persisted record in backend order; empty when there are none.
    async fn list_all(&self) -> Result<Vec<E>, StoreError>;

    async fn get_by_id(&self, id: Id) -> Result<E, StoreError>;

    /// Overwrite every mutable field at the record's identity.
    async fn update_by_id(&self, record: &E) -> Result<(), StoreError>;

    /// Remove the record if present. Returns whether a row matched; a miss is not an error.
    async fn delete_by_id(&self, id: Id) -> Result<bool, StoreError>;
}

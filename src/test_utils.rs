//! In-process store doubles for handler tests.

use crate::entity::{Entity, Id};
use crate::error::StoreError;
use crate::store::EntityStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Behaves like a table with a SERIAL identity: ids start at 1 and are never reused.
pub struct MemoryStore<E> {
    rows: Mutex<(Id, BTreeMap<Id, E>)>,
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new((0, BTreeMap::new())),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn create(&self, mut record: E) -> Result<E, StoreError> {
        let mut guard = self.rows.lock().unwrap();
        let (seq, rows) = &mut *guard;
        *seq += 1;
        record.set_id(*seq);
        rows.insert(*seq, record.clone());
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<E>, StoreError> {
        Ok(self.rows.lock().unwrap().1.values().cloned().collect())
    }

    async fn get_by_id(&self, id: Id) -> Result<E, StoreError> {
        self.rows
            .lock()
            .unwrap()
            .1
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { kind: E::KIND, id })
    }

    async fn update_by_id(&self, record: &E) -> Result<(), StoreError> {
        let id = record.id().ok_or(StoreError::Unsaved { kind: E::KIND })?;
        if let Some(row) = self.rows.lock().unwrap().1.get_mut(&id) {
            *row = record.clone();
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: Id) -> Result<bool, StoreError> {
        Ok(self.rows.lock().unwrap().1.remove(&id).is_some())
    }
}

/// Every operation fails as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl<E: Entity> EntityStore<E> for FailingStore {
    async fn create(&self, _record: E) -> Result<E, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn list_all(&self) -> Result<Vec<E>, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn get_by_id(&self, _id: Id) -> Result<E, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update_by_id(&self, _record: &E) -> Result<(), StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete_by_id(&self, _id: Id) -> Result<bool, StoreError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;

    #[tokio::test]
    async fn memory_store_follows_the_store_contract() {
        let store = MemoryStore::<InventoryItem>::default();
        let a = store.create(InventoryItem::new("bolt", 10, 0.25)).await.unwrap();
        let b = store.create(InventoryItem::new("nut", 4, 0.1)).await.unwrap();
        assert_ne!(a.id, b.id);

        assert!(store.delete_by_id(a.id.unwrap()).await.unwrap());
        assert!(!store.delete_by_id(a.id.unwrap()).await.unwrap());
        let c = store.create(InventoryItem::new("washer", 1, 0.05)).await.unwrap();
        assert!(c.id > b.id);

        let unsaved = InventoryItem::new("ghost", 0, 0.0);
        assert!(matches!(
            store.update_by_id(&unsaved).await,
            Err(StoreError::Unsaved { .. })
        ));
    }
}

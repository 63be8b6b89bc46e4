//! Generic CRUD execution against PostgreSQL.

use super::EntityStore;
use crate::entity::{Entity, Id};
use crate::error::StoreError;
use crate::sql::{delete_by_id, insert_returning_id, select_all, select_by_id, update_by_id, ColumnValue};
use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;

/// Entity store for kind `E` over a shared pool.
pub struct PgStore<E> {
    pool: PgPool,
    _kind: PhantomData<fn() -> E>,
}

impl<E> PgStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _kind: PhantomData,
        }
    }
}

impl<E> Clone for PgStore<E> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for PgStore<E> {
    async fn create(&self, mut record: E) -> Result<E, StoreError> {
        let sql = insert_returning_id::<E>();
        let params = record.values();
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query_scalar::<_, Id>(&sql);
        for p in params {
            query = query.bind(p);
        }
        let id = query.fetch_one(&self.pool).await?;
        record.set_id(id);
        tracing::info!(kind = E::KIND, id, "created");
        Ok(record)
    }

    async fn list_all(&self) -> Result<Vec<E>, StoreError> {
        let sql = select_all::<E>();
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: Id) -> Result<E, StoreError> {
        let sql = select_by_id::<E>();
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { kind: E::KIND, id })
    }

    async fn update_by_id(&self, record: &E) -> Result<(), StoreError> {
        let id = record.id().ok_or(StoreError::Unsaved { kind: E::KIND })?;
        let sql = update_by_id::<E>();
        let mut params = record.values();
        params.push(ColumnValue::Int(id));
        tracing::debug!(sql = %sql, params = ?params, "query");
        let mut query = sqlx::query(&sql);
        for p in params {
            query = query.bind(p);
        }
        let result = query.execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(kind = E::KIND, id, "update matched no row");
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: Id) -> Result<bool, StoreError> {
        let sql = delete_by_id::<E>();
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Record-shape abstraction shared by every persisted entity kind.

use crate::sql::ColumnValue;
use sqlx::postgres::PgRow;

/// Identity assigned by the backend's SERIAL column.
pub type Id = i32;

/// A record kind the generic store can persist.
///
/// `COLUMNS` lists the mutable columns in bind order; `values` must return them
/// in exactly that order. The identity column is never part of `COLUMNS`.
pub trait Entity: for<'r> sqlx::FromRow<'r, PgRow> + Clone + Send + Sync + Unpin + 'static {
    /// Singular noun used in user-facing messages ("account not found").
    const KIND: &'static str;
    const TABLE: &'static str;
    const ID_COLUMN: &'static str = "id";
    const COLUMNS: &'static [&'static str];
    /// Bootstrap DDL; must be idempotent.
    const CREATE_TABLE: &'static str;

    /// None until the record has been persisted.
    fn id(&self) -> Option<Id>;
    fn set_id(&mut self, id: Id);
    fn values(&self) -> Vec<ColumnValue>;
}

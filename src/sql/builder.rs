//! Builds the parameterized statements the store issues for an entity kind.

use crate::entity::Entity;

/// Quote identifier for PostgreSQL (safe: only from entity metadata).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Identity column first, then the mutable columns, so rows decode into the full record.
fn select_column_list<E: Entity>() -> String {
    std::iter::once(E::ID_COLUMN)
        .chain(E::COLUMNS.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// INSERT of every mutable column; `$1..$n` follow `E::COLUMNS`. Returns the generated identity.
pub fn insert_returning_id<E: Entity>() -> String {
    let cols = E::COLUMNS.iter().copied().map(quoted).collect::<Vec<_>>();
    let placeholders = (1..=cols.len()).map(|i| format!("${}", i)).collect::<Vec<_>>();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(E::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        quoted(E::ID_COLUMN)
    )
}

/// SELECT every row, no ordering.
pub fn select_all<E: Entity>() -> String {
    format!("SELECT {} FROM {}", select_column_list::<E>(), quoted(E::TABLE))
}

/// SELECT by identity. Caller binds the id as `$1`.
pub fn select_by_id<E: Entity>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        select_column_list::<E>(),
        quoted(E::TABLE),
        quoted(E::ID_COLUMN)
    )
}

/// Whole-row UPDATE: every mutable column is `$1..$n`, the identity is `$n+1`.
pub fn update_by_id<E: Entity>() -> String {
    let sets = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect::<Vec<_>>();
    format!(
        "UPDATE {} SET {} WHERE {} = ${}",
        quoted(E::TABLE),
        sets.join(", "),
        quoted(E::ID_COLUMN),
        E::COLUMNS.len() + 1
    )
}

/// DELETE by identity. Caller binds the id as `$1`.
pub fn delete_by_id<E: Entity>() -> String {
    format!(
        "DELETE FROM {} WHERE {} = $1",
        quoted(E::TABLE),
        quoted(E::ID_COLUMN)
    )
}

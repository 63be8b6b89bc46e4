//! Column values that sqlx can bind regardless of the entity they came from.

use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{PgTypeInfo, Postgres};
use sqlx::{Database, Type};

/// A value for one mutable column, produced by `Entity::values`.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnValue {
    Int(i32),
    Float(f64),
    Text(String),
}

impl From<i32> for ColumnValue {
    fn from(n: i32) -> Self {
        ColumnValue::Int(n)
    }
}

impl From<f64> for ColumnValue {
    fn from(n: f64) -> Self {
        ColumnValue::Float(n)
    }
}

impl From<&str> for ColumnValue {
    fn from(s: &str) -> Self {
        ColumnValue::Text(s.to_string())
    }
}

impl From<String> for ColumnValue {
    fn from(s: String) -> Self {
        ColumnValue::Text(s)
    }
}

impl<'q> Encode<'q, Postgres> for ColumnValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            ColumnValue::Int(n) => <i32 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            ColumnValue::Float(n) => <f64 as Encode<Postgres>>::encode_by_ref(n, buf)?,
            ColumnValue::Text(s) => <String as Encode<Postgres>>::encode_by_ref(s, buf)?,
        })
    }

    /// The declared parameter type must follow the variant, not the TEXT default below.
    fn produces(&self) -> Option<PgTypeInfo> {
        Some(match self {
            ColumnValue::Int(_) => <i32 as Type<Postgres>>::type_info(),
            ColumnValue::Float(_) => <f64 as Type<Postgres>>::type_info(),
            ColumnValue::Text(_) => <String as Type<Postgres>>::type_info(),
        })
    }
}

impl Type<Postgres> for ColumnValue {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }
}

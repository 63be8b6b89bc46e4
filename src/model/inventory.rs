use crate::entity::{Entity, Id};
use crate::sql::ColumnValue;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct InventoryItem {
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Qty")]
    pub qty: i32,
    #[serde(rename = "Price")]
    pub price: f64,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, qty: i32, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            qty,
            price,
        }
    }
}

impl Entity for InventoryItem {
    const KIND: &'static str = "inventory item";
    const TABLE: &'static str = "inventory_items";
    const COLUMNS: &'static [&'static str] = &["name", "qty", "price"];
    const CREATE_TABLE: &'static str = r#"
        CREATE TABLE IF NOT EXISTS inventory_items (
            id SERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL,
            qty INT NOT NULL,
            price FLOAT NOT NULL
        )"#;

    fn id(&self) -> Option<Id> {
        self.id
    }

    fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }

    fn values(&self) -> Vec<ColumnValue> {
        vec![self.name.as_str().into(), self.qty.into(), self.price.into()]
    }
}

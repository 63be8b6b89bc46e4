//! Concrete entity kinds.

mod account;
mod inventory;

pub use account::Account;
pub use inventory::InventoryItem;

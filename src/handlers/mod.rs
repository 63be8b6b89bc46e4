//! HTTP handlers for the account façade.

pub mod account;

//! Top-level routed pages.

pub mod chat;
pub mod dashboard;
pub mod products;

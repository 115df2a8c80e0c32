//! Client-side state models, one per screen plus shared contexts.
//!
//! DESIGN
//! ======
//! Each model is a plain struct held in an `RwSignal` by its page. Async
//! calls live in `net::api`; their results are folded in through `apply_*`
//! methods so the fail-soft policy is testable without a browser.

pub mod auth;
pub mod cart;
pub mod chat;
pub mod dashboard;
pub mod notify;
pub mod products;
#[cfg(test)]
pub mod test_support;

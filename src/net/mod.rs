//! Network layer: wire types, the HTTP client seam, and endpoint calls.

pub mod api;
pub mod http;
#[cfg(test)]
pub mod test_support;
pub mod types;

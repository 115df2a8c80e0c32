//! API location resolved at build time.
//!
//! The WASM bundle has no process environment, so the base URL is baked in
//! from `PHARMACY_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ApiConfig {
    /// Build config from the compile-time `PHARMACY_API_BASE_URL` variable.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("PHARMACY_API_BASE_URL"))
    }

    /// Normalize a raw base URL; blank or missing values use [`DEFAULT_API_BASE_URL`].
    pub fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .map(|v| v.trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self { base_url: base.to_owned() }
    }

    /// Absolute URL for an API path such as `/products/3`.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.base_url)
    }
}

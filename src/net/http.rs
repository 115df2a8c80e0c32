//! Generic JSON HTTP client used by every screen.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native: every call fails with [`ApiError::Unavailable`]
//! since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies all surface
//! as [`ApiError`]. Screens never inspect the variant beyond logging it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("http client not available outside the browser")]
    Unavailable,
}

/// Minimal JSON REST client. Paths are relative to the API base URL.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    /// `GET path`, decoding the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError>;
    /// `POST path` with a JSON body; the response body is ignored.
    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError>;
    /// `PUT path` with a JSON body; the response body is ignored.
    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError>;
    /// `DELETE path`.
    async fn delete(&self, path: &str) -> Result<(), ApiError>;
}

/// Browser `fetch` client rooted at the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserClient {
    config: ApiConfig,
}

impl BrowserClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

#[cfg(feature = "hydrate")]
fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(ApiError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl HttpClient for BrowserClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url(path))
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)?;
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.url(path))
                .json(body)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::put(&self.url(path))
                .json(body)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.url(path))
                .send()
                .await
                .map_err(network_error)?;
            check_status(&resp)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

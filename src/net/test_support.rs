//! Scripted in-memory [`HttpClient`] for exercising screen flows natively.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{ApiError, HttpClient};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// A request observed by [`MockClient`].
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// Replies are queued per `(method, path)`; an unscripted call fails with
/// `ApiError::Status(404)`.
#[derive(Default)]
pub struct MockClient {
    replies: RefCell<HashMap<(Method, String), VecDeque<Result<serde_json::Value, ApiError>>>>,
    requests: RefCell<Vec<Recorded>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, method: Method, path: &str, reply: Result<serde_json::Value, ApiError>) -> &Self {
        self.replies
            .borrow_mut()
            .entry((method, path.to_owned()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn ok(&self, method: Method, path: &str, body: serde_json::Value) -> &Self {
        self.reply(method, path, Ok(body))
    }

    pub fn fail(&self, method: Method, path: &str) -> &Self {
        self.reply(method, path, Err(ApiError::Network("connection refused".to_owned())))
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn take(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<serde_json::Value, ApiError> {
        self.requests.borrow_mut().push(Recorded { method, path: path.to_owned(), body });
        self.replies
            .borrow_mut()
            .get_mut(&(method, path.to_owned()))
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(ApiError::Status(404)))
    }
}

impl HttpClient for MockClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.take(Method::Get, path, None)?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.take(Method::Post, path, Some(body)).map(drop)
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.take(Method::Put, path, Some(body)).map(drop)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.take(Method::Delete, path, None).map(drop)
    }
}

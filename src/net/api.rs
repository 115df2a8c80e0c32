//! Pharmacy REST endpoints.
//!
//! Each function is one request through an [`HttpClient`]; callers decide how
//! a failure degrades the screen (see `state::notify::report_failure`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiError, HttpClient};
use super::types::{ChatMessage, Conversation, Id, OutgoingMessage, Product, ProductPayload, StatsResponse};

pub const CONVERSATIONS_PATH: &str = "/chat/conversations";
pub const PHARMACIST_PATH: &str = "/chat/pharmacist";
pub const SEND_MESSAGE_PATH: &str = "/chat/send";
pub const DASHBOARD_STATS_PATH: &str = "/dashboard/stats";
pub const PRODUCTS_PATH: &str = "/products";

pub fn conversation_endpoint(other_user_id: Id) -> String {
    format!("/chat/conversation/{other_user_id}")
}

pub fn product_endpoint(product_id: Id) -> String {
    format!("{PRODUCTS_PATH}/{product_id}")
}

/// `GET /chat/conversations`. A `null` body is an empty list.
pub async fn fetch_conversations<C: HttpClient>(client: &C) -> Result<Vec<Conversation>, ApiError> {
    let list: Option<Vec<Conversation>> = client.get(CONVERSATIONS_PATH).await?;
    Ok(list.unwrap_or_default())
}

/// `GET /chat/pharmacist`: an available privileged user to chat with.
pub async fn find_pharmacist<C: HttpClient>(client: &C) -> Result<Conversation, ApiError> {
    client.get(PHARMACIST_PATH).await
}

/// `GET /chat/conversation/{otherUserId}`. A `null` body is an empty history.
pub async fn fetch_messages<C: HttpClient>(client: &C, other_user_id: Id) -> Result<Vec<ChatMessage>, ApiError> {
    let list: Option<Vec<ChatMessage>> = client.get(&conversation_endpoint(other_user_id)).await?;
    Ok(list.unwrap_or_default())
}

/// `POST /chat/send`.
pub async fn send_message<C: HttpClient>(client: &C, message: &OutgoingMessage) -> Result<(), ApiError> {
    client.post(SEND_MESSAGE_PATH, message).await
}

/// `GET /dashboard/stats`.
pub async fn fetch_dashboard_stats<C: HttpClient>(client: &C) -> Result<StatsResponse, ApiError> {
    client.get(DASHBOARD_STATS_PATH).await
}

/// `GET /products`. A `null` body is an empty catalog.
pub async fn fetch_products<C: HttpClient>(client: &C) -> Result<Vec<Product>, ApiError> {
    let list: Option<Vec<Product>> = client.get(PRODUCTS_PATH).await?;
    Ok(list.unwrap_or_default())
}

/// `POST /products`.
pub async fn create_product<C: HttpClient>(client: &C, payload: &ProductPayload) -> Result<(), ApiError> {
    client.post(PRODUCTS_PATH, payload).await
}

/// `PUT /products/{id}`.
pub async fn update_product<C: HttpClient>(client: &C, id: Id, payload: &ProductPayload) -> Result<(), ApiError> {
    client.put(&product_endpoint(id), payload).await
}

/// `DELETE /products/{id}`.
pub async fn delete_product<C: HttpClient>(client: &C, id: Id) -> Result<(), ApiError> {
    client.delete(&product_endpoint(id)).await
}

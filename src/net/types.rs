//! Wire-format DTOs for the pharmacy REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Identifiers and counters
//! are decoded leniently (numeric strings, `null`) so a slightly different
//! backend serializer does not blank out whole screens.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Backend record identifier.
pub type Id = i64;

/// Role of the signed-in user as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Customer,
    User,
    Admin,
    Pharmacist,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Roles granted catalog-management affordances.
    pub fn is_privileged(self) -> bool {
        matches!(self, Self::Admin | Self::Pharmacist)
    }

    /// Roles that shop and chat as customers.
    pub fn is_customer(self) -> bool {
        matches!(self, Self::Customer | Self::User)
    }
}

/// The signed-in user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// A chat counterpart as listed by `/chat/conversations`.
///
/// `/chat/pharmacist` returns the same shape for the located staff member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Counterpart user id.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default)]
    pub full_name: Option<String>,
    /// Role label shown under the name.
    #[serde(default)]
    pub role: Option<String>,
}

/// A single chat message. Server order is chronological.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(deserialize_with = "deserialize_id")]
    pub sender_id: Id,
    #[serde(deserialize_with = "deserialize_id")]
    pub receiver_id: Id,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub message: String,
    /// ISO 8601 creation timestamp.
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub created_at: String,
}

/// Body of `POST /chat/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutgoingMessage {
    pub receiver_id: Id,
    pub message: String,
}

/// A catalog product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: Id,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub stock_quantity: u64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /products` and `PUT /products/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock_quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Aggregate dashboard counters. Absent or `null` counters decode as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_products: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub pending_prescriptions: u64,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub active_users: u64,
}

/// `GET /dashboard/stats` body: either `{ "stats": { .. } }` or the flat object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatsResponse {
    Wrapped { stats: DashboardStats },
    Flat(DashboardStats),
}

impl StatsResponse {
    pub fn into_stats(self) -> DashboardStats {
        match self {
            Self::Wrapped { stats } | Self::Flat(stats) => stats,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Id, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| D::Error::custom("expected integer id")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<Id>()
            .map_err(|_| D::Error::custom(format!("invalid id {raw:?}"))),
        _ => Err(D::Error::custom("expected id")),
    }
}

/// `null` decodes as the field's default instead of failing the record.
fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(0),
        Some(serde_json::Value::Number(number)) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float >= 0.0
                && float.fract() == 0.0
            {
                return Ok(float as u64);
            }
            Err(D::Error::custom("expected non-negative integer count"))
        }
        Some(_) => Err(D::Error::custom("expected number")),
    }
}

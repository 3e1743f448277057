//! Wire DTOs for the remote storefront REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend JSON exactly (`accessToken`,
//! `plainTextToken`, `productCount`) so serde does the mapping and callers
//! never touch raw `serde_json::Value` except for the opaque user profile.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// AUTH REQUESTS
// =============================================================================

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    /// Client-identifying string, the browser user agent.
    pub device_name: String,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub user_type: String,
    pub device_name: String,
}

// =============================================================================
// AUTH RESPONSES
// =============================================================================

/// Successful login/register response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub payload: AuthPayload,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub access_token: AccessToken,
    /// Opaque profile record; stored and echoed back, never interpreted.
    pub user: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub plain_text_token: String,
}

/// Body of a 422 response: `{ message?, errors: { field: [msg, ...] } }`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ValidationErrors {
    #[serde(default)]
    pub message: Option<String>,
    pub errors: serde_json::Map<String, serde_json::Value>,
}

impl ValidationErrors {
    /// Every field message, flattened in the order the server sent them.
    pub fn messages(&self) -> Vec<String> {
        let mut out = Vec::new();
        for value in self.errors.values() {
            match value {
                serde_json::Value::Array(items) => out.extend(items.iter().map(message_text)),
                other => out.push(message_text(other)),
            }
        }
        out
    }

    /// The single user-facing string shown above the form.
    pub fn joined(&self) -> String {
        self.messages().join(" ")
    }
}

fn message_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// A storefront category as returned by `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub image: Option<CategoryImage>,
    #[serde(default, rename = "productCount")]
    pub product_count: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryImage {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

/// Envelope: `{ "categories": { "data": [...] } }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoriesResponse {
    pub categories: CategoryPage,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CategoryPage {
    #[serde(default)]
    pub data: Vec<Category>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

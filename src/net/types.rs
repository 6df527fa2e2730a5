//! Wire DTOs for the users REST API.
//!
//! DESIGN
//! ======
//! The session only needs to know that a user exists, so every `User` field
//! is optional and unknown fields are ignored. Ids arrive as JSON numbers or
//! strings, under `id` or `_id`, and are normalized to strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Authenticated identity as returned by the users API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier normalized to a string, if the backend sends one.
    #[serde(default, alias = "_id", deserialize_with = "deserialize_id")]
    pub id: Option<String>,
    /// Display name, if the backend provides one.
    #[serde(default, alias = "username")]
    pub name: Option<String>,
    /// Contact email, if the backend provides one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Short-lived status text shown after register/login/logout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthMessage(pub String);

impl AuthMessage {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registration form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginUser {
    pub email: String,
    pub password: String,
}

/// Body of `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUserResponse {
    pub user: User,
}

/// Body of a successful register or login call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub message: AuthMessage,
}

/// Body of a successful logout call.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LogoutResponse {
    pub message: AuthMessage,
}

/// Failure from the users API or the transport underneath it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
    /// REST calls only run in the browser.
    #[error("not available on server")]
    Unavailable,
}

impl AuthError {
    /// HTTP status for rejections, `None` for every other variant.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(id) => Ok(Some(id).filter(|id| !id.is_empty())),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int.to_string()));
            }
            if let Some(uint) = number.as_u64() {
                return Ok(Some(uint.to_string()));
            }
            Err(D::Error::custom("expected integer id"))
        }
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}

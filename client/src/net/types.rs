//! Wire DTOs for the banking backend's user endpoints.
//!
//! DESIGN
//! ======
//! `User` is also the value the auth store persists, so it must survive a
//! JSON round-trip unchanged. Fields the client does not know about are kept
//! in `extra` rather than dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Profile of the logged-in user as returned by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    /// RFC 3339 timestamp of the last password change.
    #[serde(default)]
    pub password_changed_at: String,
    /// RFC 3339 account creation timestamp.
    #[serde(default)]
    pub created_at: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginUserRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: both tokens plus the user they belong to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginUserResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: User,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
}

/// Error body shape used by the backend (`{"error": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

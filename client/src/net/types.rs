//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! `UserRecord` is the server's JSON object kept as-is. Nothing in it is
//! required, not even `username`, which may be missing, `null` or not a
//! string; the stored session round-trips exactly what the server returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The user object returned by a successful login or registration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    /// Every field the server sent (`username`, `email`, `token`, ...).
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
    /// A record holding only `username`.
    pub fn with_username(username: impl Into<String>) -> Self {
        let mut fields = serde_json::Map::new();
        fields.insert("username".to_owned(), serde_json::Value::String(username.into()));
        Self { fields }
    }

    /// `username`, when the server sent it as a string.
    pub fn username(&self) -> Option<&str> {
        self.field_str("username")
    }

    /// Name shown in the header; empty when `username` is absent or not a string.
    pub fn display_name(&self) -> &str {
        self.username().unwrap_or_default()
    }

    /// Look up a field as a string, e.g. `email`.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(serde_json::Value::as_str)
    }
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest<'a> {
    /// First and last name joined by a single space.
    pub username: String,
    pub email: &'a str,
    pub password: &'a str,
}

/// Optional JSON body of a failed auth call.
///
/// Some deployments report `error`, others `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The first non-empty human-readable message, `error` before `message`.
    pub fn into_message(self) -> Option<String> {
        self.error
            .filter(|s| !s.is_empty())
            .or_else(|| self.message.filter(|s| !s.is_empty()))
    }
}

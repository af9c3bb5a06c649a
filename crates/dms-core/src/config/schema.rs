//! Configuration schema.
//!
//! Serialized with camelCase keys, matching the backend's field names.
//! The token is never serialized.

use serde::Serialize;

/// API base URL used when `DMS_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Resolved client configuration.
///
/// Built once at process start and passed by reference; never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Base URL of the Client Channel API (e.g. `http://localhost:3001/api`).
    pub api_url: String,
    /// Bearer token forwarded as `Authorization: Bearer <jwt>`.
    #[serde(skip_serializing)]
    pub jwt: Option<String>,
    /// Channel id passed through to `/connect`.
    pub channel_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            jwt: None,
            channel_id: None,
        }
    }
}

impl Config {
    /// The bearer token, if one is configured and non-empty.
    pub fn bearer_token(&self) -> Option<&str> {
        self.jwt.as_deref().filter(|t| !t.is_empty())
    }

    /// Whether requests will carry an `Authorization` header.
    pub fn has_token(&self) -> bool {
        self.bearer_token().is_some()
    }
}

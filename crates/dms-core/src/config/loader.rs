//! Config loader: resolves [`Config`] from environment variables.
//!
//! # Variables
//! - `DMS_API_URL` → `api_url` (default `http://localhost:3001/api`)
//! - `DMS_JWT` → `jwt`
//! - `DMS_CHANNEL_ID` → `channel_id`
//!
//! Unset variables fall back to defaults. There is no error path.

use tracing::debug;

use super::schema::Config;

pub const ENV_API_URL: &str = "DMS_API_URL";
pub const ENV_JWT: &str = "DMS_JWT";
pub const ENV_CHANNEL_ID: &str = "DMS_CHANNEL_ID";

/// Load configuration from the process environment.
pub fn load_config() -> Config {
    Config::from_lookup(|key| std::env::var(key).ok())
}

impl Config {
    /// Same as [`load_config`].
    pub fn from_env() -> Self {
        load_config()
    }

    /// Resolve configuration through an arbitrary key lookup.
    ///
    /// `lookup` returns `None` for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(val) = lookup(ENV_API_URL) {
            config.api_url = val;
        }
        config.jwt = lookup(ENV_JWT);
        config.channel_id = lookup(ENV_CHANNEL_ID);

        debug!(
            api_url = %config.api_url,
            token_set = config.has_token(),
            channel_id = config.channel_id.as_deref().unwrap_or("-"),
            "Resolved configuration"
        );

        config
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

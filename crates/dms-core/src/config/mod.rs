//! Configuration system: schema and environment resolution.
//!
//! # Usage
//! ```no_run
//! use dms_core::config;
//!
//! let cfg = config::load_config();
//! println!("API: {}", cfg.api_url);
//! ```

pub mod loader;
pub mod schema;

// Re-export key types
pub use loader::{load_config, ENV_API_URL, ENV_CHANNEL_ID, ENV_JWT};
pub use schema::{Config, DEFAULT_API_URL};

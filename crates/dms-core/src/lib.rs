//! Core pieces of the DMS chat client: configuration and session persistence.
//!
//! - [`config`]: environment-resolved, immutable [`Config`]
//! - [`session`]: single-slot on-disk [`SessionStore`] for the active session id
//! - [`utils`]: path helpers

pub mod config;
pub mod session;
pub mod utils;

pub use config::Config;
pub use session::SessionStore;

//! HTTP client for the DMS Client Channel API.
//!
//! # Architecture
//!
//! - [`client::SessionClient`]: connect / send / fetch / end / health
//! - [`types`]: request and response bodies
//! - [`error::ClientError`]: typed failures (precondition, transport, status, decode)

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{SessionClient, REQUEST_TIMEOUT};
pub use error::ClientError;
pub use types::Message;

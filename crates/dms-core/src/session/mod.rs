//! Session persistence.
//!
//! File format: a single plain-text file (default `~/.dms_session`) holding
//! exactly one session id. A missing or blank file means "no active session".

pub mod store;

pub use store::SessionStore;

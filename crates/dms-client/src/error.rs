//! Errors returned by [`SessionClient`](crate::SessionClient).

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a Client Channel API call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An operation needing a session id was called without one.
    #[error("session not initialized")]
    SessionNotInitialized,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// Connection failure, timeout, or other transport error.
    ///
    /// `source` is stored without its URL, which the variant already names.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-2xx status.
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("invalid JSON from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// `/connect` succeeded but carried no usable `sessionId`.
    #[error("connect response did not contain a sessionId")]
    MissingSessionId,
}

pub type Result<T> = std::result::Result<T, ClientError>;

//! HTTP client for the Client Channel API.
//!
//! Every call is one request against `{api_url}/<route>` with a JSON body,
//! a fixed timeout, and `Authorization: Bearer <token>` when a token is set.

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use dms_core::Config;

use crate::error::{ClientError, Result};
use crate::types::{
    ConnectRequest, ConnectResponse, EndSessionRequest, Message, MessagesResponse,
    SendMessageRequest,
};

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ─────────────────────────────────────────────
// SessionClient
// ─────────────────────────────────────────────

/// A chat session against the Client Channel API.
///
/// Holds at most one session id. [`init_session`](Self::init_session) sets
/// it; send/fetch/end require it.
pub struct SessionClient {
    client: reqwest::Client,
    /// Base URL without a trailing slash.
    api_base: String,
    token: Option<String>,
    channel_id: Option<String>,
    session_id: Option<String>,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("api_base", &self.api_base)
            .field("has_token", &self.token.is_some())
            .field("channel_id", &self.channel_id)
            .field("session_id", &self.session_id)
            .finish()
    }
}

impl SessionClient {
    /// Create a client with no session.
    pub fn new(config: &Config) -> Result<Self> {
        Self::build(config, REQUEST_TIMEOUT)
    }

    fn build(config: &Config, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(SessionClient {
            client,
            api_base: config.api_url.trim_end_matches('/').to_string(),
            token: config.bearer_token().map(String::from),
            channel_id: config.channel_id.clone(),
            session_id: None,
        })
    }

    /// Create a client bound to an existing session.
    pub fn with_session(config: &Config, session_id: impl Into<String>) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.session_id = Some(session_id.into());
        Ok(client)
    }

    /// The current session id, if any.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Open a new session via `POST /connect` and remember its id.
    pub async fn init_session(&mut self) -> Result<String> {
        let url = self.url("connect");
        let body = ConnectRequest {
            channel_id: self.channel_id.as_deref(),
        };

        debug!(url = %url, channel = ?self.channel_id, "Connecting");
        let response = self.execute(self.client.post(&url).json(&body), &url).await?;
        let parsed: ConnectResponse = read_json(response, &url).await?;

        let session_id = parsed
            .session_id
            .filter(|id| !id.is_empty())
            .ok_or(ClientError::MissingSessionId)?;

        debug!(session = %session_id, "Session started");
        self.session_id = Some(session_id.clone());
        Ok(session_id)
    }

    /// Send `text` via `POST /send-message`. Returns the response body as-is.
    pub async fn send_message(&self, text: &str) -> Result<Value> {
        let session_id = self.require_session()?;
        let url = self.url("send-message");
        let body = SendMessageRequest { session_id, text };

        debug!(url = %url, session = %session_id, bytes = text.len(), "Sending message");
        let response = self.execute(self.client.post(&url).json(&body), &url).await?;
        read_json(response, &url).await
    }

    /// Fetch messages via `GET /sessions/{id}/messages`.
    ///
    /// A response without `messages` yields an empty list.
    pub async fn get_messages(&self) -> Result<Vec<Message>> {
        let session_id = self.require_session()?;
        let url = self.url(&format!("sessions/{session_id}/messages"));

        debug!(url = %url, "Fetching messages");
        let response = self.execute(self.client.get(&url), &url).await?;
        let parsed: MessagesResponse = read_json(response, &url).await?;
        let messages = parsed.messages.unwrap_or_default();

        debug!(count = messages.len(), "Messages received");
        Ok(messages)
    }

    /// Terminate the session via `POST /end-session`. The body is ignored.
    pub async fn end_session(&self) -> Result<()> {
        let session_id = self.require_session()?;
        let url = self.url("end-session");
        let body = EndSessionRequest { session_id };

        debug!(url = %url, session = %session_id, "Ending session");
        self.execute(self.client.post(&url).json(&body), &url).await?;
        Ok(())
    }

    /// Probe `GET /health`. No session needed.
    pub async fn health(&self) -> Result<Value> {
        let url = self.url("health");
        debug!(url = %url, "Checking API health");
        let response = self.execute(self.client.get(&url), &url).await?;
        read_json(response, &url).await
    }

    // ── internals ──

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.api_base, route)
    }

    fn require_session(&self) -> Result<&str> {
        self.session_id
            .as_deref()
            .ok_or(ClientError::SessionNotInitialized)
    }

    /// Attach auth, send, and reject non-2xx statuses.
    async fn execute(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let request = match self.token.as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|source| {
            error!(url = %url, error = %source, "HTTP request failed");
            ClientError::Transport {
                url: url.to_string(),
                source: source.without_url(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(url = %url, status = %status, body = %body, "API error");
            return Err(ClientError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        Ok(response)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, url: &str) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source: source.without_url(),
        })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

//! Wire types for the Client Channel API.
//!
//! Request bodies are typed; response bodies the client relays verbatim stay
//! as [`serde_json::Value`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message as returned by the API. Never interpreted, only relayed.
pub type Message = Value;

// ─────────────────────────────────────────────
// Requests
// ─────────────────────────────────────────────

/// Body of `POST /connect`. A missing channel id is sent as `null`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest<'a> {
    pub channel_id: Option<&'a str>,
}

/// Body of `POST /send-message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest<'a> {
    pub session_id: &'a str,
    pub text: &'a str,
}

/// Body of `POST /end-session`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndSessionRequest<'a> {
    pub session_id: &'a str,
}

// ─────────────────────────────────────────────
// Responses
// ─────────────────────────────────────────────

/// The part of the `/connect` response we use. Other fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    #[serde(default)]
    pub session_id: Option<String>,
}

/// The part of the messages response we use. `messages` may be absent or null.
#[derive(Debug, Default, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

//! Session commands: `init-session`, `send-message`, `get-messages`,
//! `end-session`, and `health`.
//!
//! Each command loads the stored session id, makes one API call, updates the
//! store, and returns the text to print.

use anyhow::{bail, Context, Result};
use tracing::info;

use dms_client::SessionClient;
use dms_core::{Config, SessionStore};

use crate::helpers::to_pretty_json;

pub const NO_ACTIVE_SESSION: &str = "No active session. Run 'init-session' first.";
pub const NO_SESSION_TO_END: &str = "No active session to end.";

// ─────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────

/// `dms init-session`: always opens a new session, replacing any stored id.
pub async fn init_session(config: &Config, store: &SessionStore) -> Result<String> {
    let mut client = SessionClient::new(config)?;
    let session_id = client
        .init_session()
        .await
        .context("failed to start session")?;

    store
        .save(&session_id)
        .with_context(|| format!("failed to write {}", store.path().display()))?;

    info!(session = %session_id, "session started");
    Ok(format!("Session started: {session_id}"))
}

/// `dms send-message <text>`
pub async fn send_message(config: &Config, store: &SessionStore, text: &str) -> Result<String> {
    let Some(session_id) = load_session_id(store)? else {
        bail!(NO_ACTIVE_SESSION);
    };

    let client = SessionClient::with_session(config, session_id)?;
    let response = client
        .send_message(text)
        .await
        .context("failed to send message")?;

    to_pretty_json(&response)
}

/// `dms get-messages`
pub async fn get_messages(config: &Config, store: &SessionStore) -> Result<String> {
    let Some(session_id) = load_session_id(store)? else {
        bail!(NO_ACTIVE_SESSION);
    };

    let client = SessionClient::with_session(config, session_id)?;
    let messages = client
        .get_messages()
        .await
        .context("failed to fetch messages")?;

    to_pretty_json(&messages)
}

/// `dms end-session`: the stored id is cleared only after the API accepts.
pub async fn end_session(config: &Config, store: &SessionStore) -> Result<String> {
    let Some(session_id) = load_session_id(store)? else {
        bail!(NO_SESSION_TO_END);
    };

    let client = SessionClient::with_session(config, session_id.as_str())?;
    client
        .end_session()
        .await
        .context("failed to end session")?;

    store
        .clear()
        .with_context(|| format!("failed to remove {}", store.path().display()))?;

    info!(session = %session_id, "session ended");
    Ok("Session ended".to_string())
}

/// `dms health`
pub async fn health(config: &Config) -> Result<String> {
    let client = SessionClient::new(config)?;
    let body = client.health().await.context("health check failed")?;
    to_pretty_json(&body)
}

fn load_session_id(store: &SessionStore) -> Result<Option<String>> {
    store
        .load()
        .with_context(|| format!("failed to read {}", store.path().display()))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn setup(api_url: &str) -> (TempDir, Config, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join(".dms_session"));
        let config = Config {
            api_url: api_url.to_string(),
            jwt: None,
            channel_id: Some("support".to_string()),
        };
        (dir, config, store)
    }

    async fn expect_no_requests(server: &MockServer) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_commands_without_session_make_no_requests() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;
        let (_dir, config, store) = setup(&mock_server.uri());

        let err = send_message(&config, &store, "hi").await.unwrap_err();
        assert_eq!(err.to_string(), NO_ACTIVE_SESSION);

        let err = get_messages(&config, &store).await.unwrap_err();
        assert_eq!(err.to_string(), NO_ACTIVE_SESSION);

        let err = end_session(&config, &store).await.unwrap_err();
        assert_eq!(err.to_string(), NO_SESSION_TO_END);
    }

    #[tokio::test]
    async fn test_blank_store_counts_as_no_session() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;
        let (_dir, config, store) = setup(&mock_server.uri());
        std::fs::write(store.path(), "\n").unwrap();

        let err = get_messages(&config, &store).await.unwrap_err();
        assert_eq!(err.to_string(), NO_ACTIVE_SESSION);
    }

    #[tokio::test]
    async fn test_init_then_send_uses_returned_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/connect"))
            .and(body_json(json!({ "channelId": "support" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sessionId": "s-1" })))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/send-message"))
            .and(body_json(json!({ "sessionId": "s-1", "text": "hi" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": { "messageId": "m-1" }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());

        let out = init_session(&config, &store).await.unwrap();
        assert_eq!(out, "Session started: s-1");
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "s-1");

        let out = send_message(&config, &store, "hi").await.unwrap();
        let echoed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(echoed["data"]["messageId"], "m-1");
        assert!(out.contains("\n  \"data\""));
    }

    #[tokio::test]
    async fn test_init_session_replaces_existing_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/connect"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sessionId": "new" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());
        store.save("old").unwrap();

        init_session(&config, &store).await.unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_init_session_failure_keeps_store_untouched() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/connect"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());
        store.save("old").unwrap();

        let err = init_session(&config, &store).await.unwrap_err();
        assert!(format!("{err:#}").contains("500"));
        assert_eq!(store.load().unwrap().as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_refused_connection_renders_url_once() {
        let (_dir, config, store) = setup("http://127.0.0.1:1");
        store.save("s-1").unwrap();

        let err = send_message(&config, &store, "hi").await.unwrap_err();
        let line = format!("{err:#}");

        assert!(line.starts_with("failed to send message: request to "), "{line}");
        assert_eq!(line.matches("http://127.0.0.1:1/send-message").count(), 1, "{line}");
        assert_eq!(line.matches("error sending request").count(), 1, "{line}");
        assert!(!line.contains('\n'));
    }

    #[tokio::test]
    async fn test_get_messages_prints_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions/s-1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "messages": [{ "text": "hello" }]
            })))
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());
        store.save("s-1").unwrap();

        let out = get_messages(&config, &store).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, json!([{ "text": "hello" }]));
    }

    #[tokio::test]
    async fn test_get_messages_without_key_prints_empty_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions/s-1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());
        store.save("s-1").unwrap();

        assert_eq!(get_messages(&config, &store).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_end_session_clears_store() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/end-session"))
            .and(body_json(json!({ "sessionId": "s-1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());
        store.save("s-1").unwrap();

        assert_eq!(end_session(&config, &store).await.unwrap(), "Session ended");
        assert!(!store.path().exists());

        let err = send_message(&config, &store, "hi").await.unwrap_err();
        assert_eq!(err.to_string(), NO_ACTIVE_SESSION);
    }

    #[tokio::test]
    async fn test_end_session_failure_keeps_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/end-session"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let (_dir, config, store) = setup(&mock_server.uri());
        store.save("s-1").unwrap();

        assert!(end_session(&config, &store).await.is_err());
        assert_eq!(store.load().unwrap().as_deref(), Some("s-1"));
    }

    #[tokio::test]
    async fn test_health() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&mock_server)
            .await;

        let (_dir, config, _store) = setup(&mock_server.uri());
        let out = health(&config).await.unwrap();
        assert!(out.contains("\"success\": true"));
    }
}

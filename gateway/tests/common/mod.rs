//! Shared harness for the gateway integration tests.
//!
//! `TestApp` runs the real router on an ephemeral port. The model is replaced
//! either by a scripted `Completer` or by the real `Brain` pointed at an
//! `httpmock` server speaking the chat-completions wire format.

#![allow(unused)]

use anyhow::Result;
use async_trait::async_trait;
use httpmock::MockServer;
use reqwest::Client;
use std::sync::Arc;
use tokio::{net::TcpListener, task::JoinHandle};
use wordbook_core::{Brain, Completer, Definer, Settings};
use wordbook_gateway::{router, AppState};

pub struct TestApp {
    pub address: String,
    pub client: Client,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    /// Spawns the gateway with the given completer standing in for the model.
    pub async fn spawn(completer: Arc<dyn Completer>) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let state = AppState {
            definer: Arc::new(Definer::new(completer)),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let address = format!("http://{}", listener.local_addr()?);
        let app = router(state);
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            address,
            client: Client::new(),
            _server_handle: server_handle,
        })
    }

    /// Spawns the gateway backed by a real `Brain` talking to `api_base`.
    pub async fn spawn_with_api_base(api_base: &str) -> Result<Self> {
        let settings = test_settings(api_base)?;
        Self::spawn(Arc::new(Brain::new(&settings))).await
    }

    pub async fn define(&self, word: &str) -> Result<reqwest::Response> {
        Ok(self
            .client
            .post(format!("{}/define", self.address))
            .json(&serde_json::json!({ "word": word }))
            .send()
            .await?)
    }
}

pub fn test_settings(api_base: &str) -> Result<Settings> {
    let api_base = api_base.to_string();
    Settings::from_lookup(move |key| match key {
        "OPENAI_API_KEY" => Some("sk-test".to_string()),
        "OPENAI_API_BASE" => Some(api_base.clone()),
        "WORDBOOK_BIND_ADDR" => Some("127.0.0.1:0".to_string()),
        _ => None,
    })
}

/// Base URL for a mock server that serves `/v1/chat/completions`.
pub fn mock_api_base(server: &MockServer) -> String {
    server.url("/v1")
}

/// A chat-completions response body carrying `content` as the assistant reply.
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1_700_000_000u32,
        "model": "gpt-4o",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Replies with a fixed string, or fails with a fixed message.
pub struct ScriptedCompleter(pub Result<String, String>);

impl ScriptedCompleter {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self(Ok(reply.to_string())))
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self(Err(message.to_string())))
    }
}

#[async_trait]
impl Completer for ScriptedCompleter {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.0.clone().map_err(|m| anyhow::anyhow!(m))
    }
}

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{Settings, TEMPERATURE};

/// Anything that can turn a rendered prompt into a completion string.
///
/// One call per request, no streaming.
#[async_trait]
pub trait Completer: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// The OpenAI-backed completer.
pub struct Brain {
    client: Client<OpenAIConfig>,
    model: String,
}

impl Brain {
    pub fn new(settings: &Settings) -> Self {
        let mut config = OpenAIConfig::new().with_api_key(settings.api_key.clone());
        if let Some(base) = &settings.api_base {
            config = config.with_api_base(base.clone());
        }
        // A failed call fails the request; rate limits (429) included.
        let no_retry = backoff::ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        let client = Client::with_config(config).with_backoff(no_retry);

        info!("Brain connected. Model: {}", settings.model);
        Self {
            client,
            model: settings.model.clone(),
        }
    }

    pub async fn say_hello(&self) -> Result<String> {
        self.complete("Hello! Reply with 'System Online'.").await
    }
}

#[async_trait]
impl Completer for Brain {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(TEMPERATURE)
            .messages([ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()?,
            )])
            .build()?;

        let response = self.client.chat().create(request).await?;
        debug!("Completion id '{}' from model '{}'", response.id, response.model);

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .context("model returned no completion text")
    }
}

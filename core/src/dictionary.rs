use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::DefineError;
use crate::llm::Completer;
use crate::parse::{parse_reply, DefinitionResult};
use crate::prompt::{self, PROMPT_VERSION};

/// The Definition Service: prompt, one model call, parse.
///
/// Holds no per-request state, so a single instance is shared by every request.
#[derive(Clone)]
pub struct Definer {
    completer: Arc<dyn Completer>,
}

impl Definer {
    pub fn new(completer: Arc<dyn Completer>) -> Self {
        Self { completer }
    }

    pub async fn define(&self, word: &str) -> Result<DefinitionResult, DefineError> {
        let word = word.trim();
        info!("Defining '{}' with prompt {}", word, PROMPT_VERSION);

        let prompt = prompt::render(word);
        let reply = self.completer.complete(&prompt).await.map_err(|e| {
            error!("Model call failed for '{}': {:#}", word, e);
            DefineError::Upstream(e)
        })?;

        parse_reply(&reply).inspect_err(|_| {
            error!("Model reply for '{}' is missing a marker line", word);
            debug!("Raw reply: {}", reply);
        })
    }
}

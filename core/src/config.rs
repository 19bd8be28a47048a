use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Sampling temperature for every definition request.
///
/// Kept above zero so polysemous words surface different senses across calls.
pub const TEMPERATURE: f32 = 1.0;

/// Everything the service needs from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub api_base: Option<String>,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, so tests never touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .context("OPENAI_API_KEY must be set in .env")?;
        let model = lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_base = lookup("OPENAI_API_BASE").filter(|b| !b.trim().is_empty());

        let raw_addr = lookup("WORDBOOK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("WORDBOOK_BIND_ADDR is not a socket address: '{}'", raw_addr))?;

        Ok(Self {
            api_key,
            model,
            api_base,
            bind_addr,
        })
    }
}

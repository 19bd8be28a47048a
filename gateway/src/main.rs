use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wordbook_core::{Brain, Definer, Settings};
use wordbook_gateway::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Logging Setup
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    info!("Wordbook Gateway Initializing...");

    // 2. Configuration
    let settings = Settings::from_env().inspect_err(|e| error!("CRITICAL: {:#}", e))?;

    // 3. Initialize The Brain
    info!("Connecting to OpenAI Brain...");
    let brain = Brain::new(&settings);

    // Quick connectivity check; failure is logged, not fatal.
    match brain.say_hello().await {
        Ok(msg) => info!("Brain Status: {}", msg),
        Err(e) => error!("Brain is online but unresponsive: {:#}", e),
    }

    // 4. Bundle State
    let state = AppState {
        definer: Arc::new(Definer::new(Arc::new(brain))),
    };

    // 5. Start Server
    let listener = TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    info!("Gateway listening on {}...", settings.bind_addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

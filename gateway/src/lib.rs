pub mod api;
mod error;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{DefineRequest, DefineResponse};
use crate::error::AppError;
use wordbook_core::Definer;

// Shared across requests; the Definer holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub definer: Arc<Definer>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/define", post(define_word))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// --- HANDLERS ---

async fn health_check() -> &'static str {
    "Wordbook Gateway: Operational"
}

async fn define_word(
    State(state): State<AppState>,
    Json(payload): Json<DefineRequest>,
) -> Result<Json<DefineResponse>, AppError> {
    info!("Definition requested for: '{}'", payload.word);

    let result = state.definer.define(&payload.word).await?;
    info!("Returning {} categories", result.categories.len());

    Ok(Json(result))
}

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::prompt::Direction;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let static_dir = state.config.system.static_dir.clone();

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/translate", post(translate_to_standard))
        .route("/api/to-dialect", post(translate_to_dialect))
        .fallback_service(ServeDir::new(static_dir))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "completion_configured": state.completion.is_some(),
    }))
}

async fn translate_to_standard(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    translate(state, Direction::ToStandard, payload).await
}

async fn translate_to_dialect(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    translate(state, Direction::ToDialect, payload).await
}

/// Shared handler for both directions: validate, build the prompt, make one
/// upstream call, answer with the extracted text. Every failure leaves this
/// boundary as the documented `{ "error": ... }` JSON shape.
async fn translate(
    state: AppState,
    direction: Direction,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!("Unreadable request body: {}", rejection);
        ApiError::Internal
    })?;

    let text = payload
        .get("text")
        .and_then(|v| v.as_str())
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::InvalidInput)?;

    let backend = state.completion.as_ref().ok_or(ApiError::MissingApiKey)?;

    let prompt = state.templates.build(direction, text);
    let translated_text = backend.complete(&prompt).await?;

    info!(
        "Translated {} chars ({:?}) -> {} chars",
        text.chars().count(),
        direction,
        translated_text.chars().count()
    );

    Ok(Json(json!({ "translatedText": translated_text })))
}

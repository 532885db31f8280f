use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::completion::CompletionError;

/// Request-level error taxonomy. Every variant is reported once and leaves
/// the server in an idle, retryable state.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input text absent, non-string, or empty. Rejected before any network
    /// activity.
    #[error("テキストが提供されていないか、無効です")]
    InvalidInput,

    /// Server-side credential is not configured. Not retryable.
    #[error("API キーが設定されていません")]
    MissingApiKey,

    /// The completion provider answered with a non-success status.
    #[error("翻訳サービスとの通信中にエラーが発生しました")]
    Upstream,

    /// Anything else that fails while handling the request.
    #[error("翻訳処理中にエラーが発生しました")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput => StatusCode::BAD_REQUEST,
            ApiError::MissingApiKey | ApiError::Upstream | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

impl From<CompletionError> for ApiError {
    fn from(err: CompletionError) -> Self {
        match err {
            // Provider payload is already logged at the gateway.
            CompletionError::Upstream { .. } => ApiError::Upstream,
            CompletionError::Transport(_) => ApiError::Internal,
        }
    }
}

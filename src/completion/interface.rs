use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// The provider answered with a non-success status.
    #[error("completion provider returned {status}: {body}")]
    Upstream {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Network failure or an unreadable response body.
    #[error("completion transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Interface to a generative-text completion service.
///
/// Each call is independent and at most once: no retry, no backoff, no
/// timeout beyond the transport default.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one prompt and return the first candidate's text.
    ///
    /// Returns an empty string when the response is well-formed but carries
    /// no candidate text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

use std::sync::Arc;

use crate::completion::{CompletionBackend, GeminiClient};
use crate::config::Config;
use crate::prompt::PromptTemplates;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub templates: Arc<PromptTemplates>,
    /// None when no provider credential was found at startup. Requests then
    /// fail with a configuration error instead of crashing the server.
    pub completion: Option<Arc<dyn CompletionBackend>>,
}

impl AppState {
    /// Build state from config, resolving the provider credential from the
    /// environment once. The gateway itself never touches the environment.
    pub fn new(config: Config) -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        let completion: Option<Arc<dyn CompletionBackend>> = match api_key {
            Some(key) => Some(Arc::new(GeminiClient::new(&config.gemini, key))),
            None => {
                tracing::warn!("GEMINI_API_KEY is not set; translation requests will fail");
                None
            }
        };

        Self::with_backend(config, completion)
    }

    /// Inject an arbitrary backend, or none to simulate a missing credential.
    pub fn with_backend(
        config: Config,
        completion: Option<Arc<dyn CompletionBackend>>,
    ) -> Self {
        Self {
            config,
            templates: Arc::new(PromptTemplates::default()),
            completion,
        }
    }
}

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::interface::{CompletionBackend, CompletionError};
use crate::config::GeminiConfig;

/// Client for the Gemini `generateContent` endpoint.
///
/// The API key is resolved once at startup and injected here; the client
/// never reads the process environment itself.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: &'a GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Deserialize, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize, Default)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, or an empty string when the
    /// response lacks that path.
    pub fn first_candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default()
    }
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig, api_key: String) -> Self {
        info!(
            "Initialized GeminiClient: model={}, base_url={}",
            config.model, config.base_url
        );
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
            generation_config: GenerationConfig {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: &self.generation_config,
        };

        debug!("Sending generateContent request: model={}", self.model);
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            error!("Gemini API error ({}): {}", status, payload);
            return Err(CompletionError::Upstream {
                status,
                body: payload,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.first_candidate_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [ { "text": "疲れました" }, { "text": "後続" } ] } },
                { "content": { "parts": [ { "text": "二番目の候補" } ] } }
            ]
        }))
        .unwrap();
        assert_eq!(parsed.first_candidate_text(), "疲れました");
    }

    #[test]
    fn missing_candidates_extracts_empty_string() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(parsed.first_candidate_text(), "");
    }

    #[test]
    fn candidate_without_parts_extracts_empty_string() {
        let parsed: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [ { "content": {} } ]
        }))
        .unwrap();
        assert_eq!(parsed.first_candidate_text(), "");
    }

    #[test]
    fn request_body_carries_prompt_and_fixed_parameters() {
        let generation_config = GenerationConfig {
            temperature: 0.1,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        };
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "宮崎弁: ひんだれた" }],
            }],
            generation_config: &generation_config,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "宮崎弁: ひんだれた"
        );
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }
}

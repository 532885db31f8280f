use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use miyaben_backend::completion::{CompletionBackend, CompletionError};
use miyaben_backend::config::Config;
use miyaben_backend::routes::create_routes;
use miyaben_backend::state::AppState;

/// Backend double: records every prompt and plays back a scripted outcome.
struct MockBackend {
    prompts: Mutex<Vec<String>>,
    reply: Result<String, u16>,
}

impl MockBackend {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply: Ok(text.to_string()),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            prompts: Mutex::new(Vec::new()),
            reply: Err(status),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(CompletionError::Upstream {
                status: reqwest::StatusCode::from_u16(*status).unwrap(),
                body: "{\"error\":{\"message\":\"quota exceeded\"}}".to_string(),
            }),
        }
    }
}

fn app(backend: Option<Arc<dyn CompletionBackend>>) -> Router {
    let state = AppState::with_backend(Config::default(), backend);
    Router::new()
        .merge(create_routes(state.clone()))
        .with_state(state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn translate_embeds_input_after_dialect_label() {
    let backend = MockBackend::replying("疲れました");
    let (status, body) = post_json(
        app(Some(backend.clone())),
        "/api/translate",
        json!({ "text": "ひんだれた" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "translatedText": "疲れました" }));

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("宮崎弁: ひんだれた"));
}

#[tokio::test]
async fn to_dialect_embeds_input_after_standard_label() {
    let backend = MockBackend::replying("ひんだれた");
    let (status, body) = post_json(
        app(Some(backend.clone())),
        "/api/to-dialect",
        json!({ "text": "疲れた" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translatedText"], "ひんだれた");

    let prompts = backend.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("標準語: 疲れた"));
}

#[tokio::test]
async fn missing_text_is_rejected_before_any_call() {
    let backend = MockBackend::replying("unused");
    let (status, body) = post_json(
        app(Some(backend.clone())),
        "/api/translate",
        json!({ "other": "field" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "テキストが提供されていないか、無効です");
    assert!(backend.prompts().is_empty());
}

#[tokio::test]
async fn non_string_text_is_rejected() {
    let backend = MockBackend::replying("unused");
    let (status, _) = post_json(
        app(Some(backend.clone())),
        "/api/translate",
        json!({ "text": 42 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(backend.prompts().is_empty());
}

#[tokio::test]
async fn empty_text_is_rejected() {
    let backend = MockBackend::replying("unused");
    let (status, _) = post_json(
        app(Some(backend.clone())),
        "/api/translate",
        json!({ "text": "" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(backend.prompts().is_empty());
}

#[tokio::test]
async fn missing_credential_is_a_server_configuration_error() {
    let (status, body) = post_json(
        app(None),
        "/api/translate",
        json!({ "text": "ひんだれた" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "API キーが設定されていません");
}

#[tokio::test]
async fn upstream_failure_is_a_generic_service_error() {
    let backend = MockBackend::failing(429);
    let (status, body) = post_json(
        app(Some(backend)),
        "/api/translate",
        json!({ "text": "ひんだれた" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "翻訳サービスとの通信中にエラーが発生しました");
}

#[tokio::test]
async fn empty_candidate_text_is_returned_as_empty_string() {
    let backend = MockBackend::replying("");
    let (status, body) = post_json(
        app(Some(backend)),
        "/api/translate",
        json!({ "text": "ひんだれた" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["translatedText"], "");
}

#[tokio::test]
async fn malformed_body_is_a_generic_processing_error_in_json_shape() {
    let backend = MockBackend::replying("unused");
    let request = Request::builder()
        .method("POST")
        .uri("/api/translate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app(Some(backend.clone())).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "翻訳処理中にエラーが発生しました");
    assert!(backend.prompts().is_empty());
}

#[tokio::test]
async fn internal_error_responds_with_generic_processing_message() {
    use axum::response::IntoResponse;
    use miyaben_backend::error::ApiError;

    let response = ApiError::Internal.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "翻訳処理中にエラーが発生しました" }));
}

#[tokio::test]
async fn health_reports_backend_configuration() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app(None).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["completion_configured"], false);
}

use std::sync::Arc;

use crate::completion::CompletionBackend;
use crate::prompt::{Direction, PromptTemplates};
use crate::speech::input::{SpeechEvent, SpeechInput};
use crate::speech::kana::to_hiragana;
use crate::speech::synthesis::{SpeechOptions, SpeechOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Listening,
}

/// Per-session presentation state: current input, direction, loading flag,
/// last result and error, and the voice capture state machine.
///
/// At most one translation request is in flight; `submit` refuses re-entry
/// while loading. Nothing here survives the session.
pub struct TranslatorSession {
    templates: PromptTemplates,
    backend: Arc<dyn CompletionBackend>,
    input: String,
    direction: Direction,
    result: Option<String>,
    error: Option<String>,
    loading: bool,
    capture: CaptureState,
}

impl TranslatorSession {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            templates: PromptTemplates::default(),
            backend,
            input: String::new(),
            direction: Direction::ToStandard,
            result: None,
            error: None,
            loading: false,
            capture: CaptureState::Idle,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn capture_state(&self) -> CaptureState {
        self.capture
    }

    fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Send the current input in the current direction. Does nothing while a
    /// request is in flight or when the input is empty/whitespace-only. A
    /// failed request leaves the previous result untouched and returns the
    /// session to an idle, retryable state.
    pub async fn submit(&mut self) {
        if !self.can_submit() {
            return;
        }

        self.loading = true;
        self.error = None;

        let prompt = self.templates.build(self.direction, &self.input);
        let backend = self.backend.clone();
        let outcome = backend.complete(&prompt).await;
        match outcome {
            Ok(text) => self.result = Some(text),
            Err(_) => self.error = Some("翻訳中にエラーが発生しました".to_string()),
        }

        self.loading = false;
    }

    /// Switch direction, clearing both the input and the last result.
    pub fn toggle_direction(&mut self) {
        self.direction = match self.direction {
            Direction::ToStandard => Direction::ToDialect,
            Direction::ToDialect => Direction::ToStandard,
        };
        self.input.clear();
        self.result = None;
    }

    /// Start voice capture. A no-op while already listening; the recognizer
    /// manages its own single active session.
    pub fn start_capture(&mut self, recognizer: &mut dyn SpeechInput) {
        if self.capture == CaptureState::Listening {
            return;
        }
        match recognizer.start() {
            Ok(()) => {
                self.capture = CaptureState::Listening;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(format!("音声認識の開始に失敗しました: {}", e));
            }
        }
    }

    pub fn stop_capture(&mut self, recognizer: &mut dyn SpeechInput) {
        recognizer.stop();
        self.pump_capture(recognizer);
    }

    /// Apply pending recognizer events. Partial results append their
    /// normalized text to the input; an error or end of utterance returns
    /// the capture machine to idle without tearing the session down.
    pub fn pump_capture(&mut self, recognizer: &mut dyn SpeechInput) {
        for event in recognizer.drain_events() {
            match event {
                SpeechEvent::Partial(text) => {
                    if self.capture == CaptureState::Listening {
                        self.input.push_str(&to_hiragana(&text));
                    }
                }
                SpeechEvent::Error(reason) => {
                    self.error = Some(format!("音声認識エラー: {}", reason));
                    self.capture = CaptureState::Idle;
                }
                SpeechEvent::Ended => {
                    self.capture = CaptureState::Idle;
                }
            }
        }
    }

    /// Read the last result aloud, if there is one.
    pub fn read_aloud(&self, output: &mut dyn SpeechOutput, options: &SpeechOptions) {
        if let Some(text) = &self.result {
            if let Err(e) = output.speak(text, options) {
                tracing::warn!("Read-aloud failed: {}", e);
            }
        }
    }

    /// Cancel the current utterance, whatever it is.
    pub fn stop_speaking(&self, output: &mut dyn SpeechOutput) {
        output.stop();
    }
}

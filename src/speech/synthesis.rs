/// Utterance parameters for read-aloud of a translation result.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechOptions {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
    pub voice: Option<String>,
    pub lang: String,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
            voice: None,
            lang: "ja-JP".to_string(),
        }
    }
}

/// Capability surface of a speech synthesizer. `stop` cancels whatever is
/// currently being spoken and discards it.
pub trait SpeechOutput {
    fn speak(&mut self, text: &str, options: &SpeechOptions) -> anyhow::Result<()>;
    fn stop(&mut self);
}

/// Test double that records utterances instead of producing audio.
#[derive(Default)]
pub struct RecordingSpeechOutput {
    pub spoken: Vec<(String, SpeechOptions)>,
    pub cancelled: usize,
}

impl SpeechOutput for RecordingSpeechOutput {
    fn speak(&mut self, text: &str, options: &SpeechOptions) -> anyhow::Result<()> {
        self.spoken.push((text.to_string(), options.clone()));
        Ok(())
    }

    fn stop(&mut self) {
        self.cancelled += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_target_japanese() {
        let options = SpeechOptions::default();
        assert_eq!(options.rate, 1.0);
        assert_eq!(options.pitch, 1.0);
        assert_eq!(options.volume, 1.0);
        assert_eq!(options.voice, None);
        assert_eq!(options.lang, "ja-JP");
    }
}

/// Events emitted by a speech input provider during one listening session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// A partial recognition result; may arrive several times per session.
    Partial(String),
    /// The recognizer reported a failure. Ends the session.
    Error(String),
    /// Natural end of the utterance. Ends the session.
    Ended,
}

/// Capability surface of a speech recognizer.
///
/// A browser-backed recognizer (single active session, interim results,
/// Japanese locale) lives outside this crate; the session logic only
/// depends on this trait.
pub trait SpeechInput {
    fn start(&mut self) -> anyhow::Result<()>;
    fn stop(&mut self);
    /// Events that arrived since the last call, in order.
    fn drain_events(&mut self) -> Vec<SpeechEvent>;
}

/// Scriptable recognizer for tests: plays back a fixed event sequence once
/// started, and emits `Ended` when stopped early.
#[derive(Default)]
pub struct ScriptedSpeechInput {
    script: Vec<SpeechEvent>,
    pending: Vec<SpeechEvent>,
    active: bool,
}

impl ScriptedSpeechInput {
    pub fn new(script: Vec<SpeechEvent>) -> Self {
        Self {
            script,
            pending: Vec::new(),
            active: false,
        }
    }
}

impl SpeechInput for ScriptedSpeechInput {
    fn start(&mut self) -> anyhow::Result<()> {
        if self.active {
            return Ok(());
        }
        self.active = true;
        self.pending = std::mem::take(&mut self.script);
        Ok(())
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            self.pending.push(SpeechEvent::Ended);
        }
    }

    fn drain_events(&mut self) -> Vec<SpeechEvent> {
        std::mem::take(&mut self.pending)
    }
}

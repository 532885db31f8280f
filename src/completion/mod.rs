mod gemini;
mod interface;

pub use gemini::GeminiClient;
pub use interface::{CompletionBackend, CompletionError};

pub mod fake;
pub mod real;

use anyhow::Result;
use async_trait::async_trait;

/// A record of one request issued through a chat client, used by the fake
/// client so tests can verify call counts and payloads.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub prompt: String,
}

/// A trait that abstracts the chat-completion backend for testing
///
/// The agent only needs one capability: send a rendered prompt, get the
/// reply text. Both the real and the fake client implement this, making it
/// easy to swap between them.
///
/// Implementation notes:
/// - Uses `async-trait` to enable async methods in traits
/// - The real implementation talks to any OpenAI-compatible endpoint via
///   the async_openai crate
#[async_trait]
pub trait ChatClientTrait: Send + Sync {
    /// Sends one prompt to the model and returns the reply text
    ///
    /// # Arguments
    /// * `model` - The model identifier (e.g., "gemini-2.5-flash")
    /// * `temperature` - Sampling temperature for the request
    /// * `prompt` - The fully rendered prompt string
    async fn chat_completion(
        &self,
        model: &str,
        temperature: f32,
        prompt: &str,
    ) -> Result<String, anyhow::Error>;
}

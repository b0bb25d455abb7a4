use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use crate::openai::{ChatClientTrait, ChatRequest};

enum ScriptedReply {
    Text(String),
    TransportError(String),
}

/// A fake implementation of the chat client for testing
///
/// This fake client allows tests to control exactly what reply text is
/// returned, without making any real API calls. It provides a builder
/// pattern for configuration and tracks requests for verification in tests.
///
/// # Example
///
/// ```
/// use sehat_triage::openai::fake::FakeChatClient;
/// use sehat_triage::openai::ChatClientTrait;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let client = FakeChatClient::new().with_response("First reply");
///
///     let reply = client
///         .chat_completion("gemini-2.5-flash", 0.2, "Hello")
///         .await?;
///     assert_eq!(reply, "First reply");
///
///     let requests = client.requests.lock().unwrap();
///     assert_eq!(requests.len(), 1);
///     assert_eq!(requests[0].model, "gemini-2.5-flash");
///     Ok(())
/// }
/// ```
pub struct FakeChatClient {
    replies: Mutex<Vec<ScriptedReply>>,
    // Track requests for verification in tests
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl Default for FakeChatClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeChatClient {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(vec![]),
            requests: Mutex::new(vec![]),
        }
    }

    /// Add a reply to be returned by the fake client
    pub fn with_response(self, response: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(ScriptedReply::Text(response.to_string()));
        self
    }

    /// Add multiple replies to be returned by the fake client in sequence
    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        for response in responses {
            self.replies
                .lock()
                .unwrap()
                .push(ScriptedReply::Text(response.to_string()));
        }
        self
    }

    /// Script a transport failure for the next call
    pub fn with_transport_error(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push(ScriptedReply::TransportError(message.to_string()));
        self
    }
}

#[async_trait]
impl ChatClientTrait for FakeChatClient {
    async fn chat_completion(
        &self,
        model: &str,
        temperature: f32,
        prompt: &str,
    ) -> Result<String, anyhow::Error> {
        // Store the request for later verification
        self.requests.lock().unwrap().push(ChatRequest {
            model: model.to_string(),
            temperature,
            prompt: prompt.to_string(),
        });

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok("Fake default reply".to_string());
        }

        match replies.remove(0) {
            ScriptedReply::Text(text) => Ok(text),
            ScriptedReply::TransportError(message) => Err(anyhow!(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_chat_client_replies_in_sequence() -> Result<()> {
        let client = FakeChatClient::new()
            .with_response("First reply")
            .with_response("Second reply");

        let first = client
            .chat_completion("gemini-2.5-flash", 0.2, "prompt one")
            .await?;
        assert_eq!(first, "First reply");

        let second = client
            .chat_completion("gemini-2.5-flash", 0.2, "prompt two")
            .await?;
        assert_eq!(second, "Second reply");

        // Exhausted scripts fall back to the default reply
        let third = client
            .chat_completion("gemini-2.5-flash", 0.2, "prompt three")
            .await?;
        assert_eq!(third, "Fake default reply");

        Ok(())
    }

    #[tokio::test]
    async fn test_request_tracking() -> Result<()> {
        let client = FakeChatClient::new().with_response("reply");

        let _ = client
            .chat_completion("gemini-2.5-flash", 0.7, "rendered prompt")
            .await?;

        let requests = client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model, "gemini-2.5-flash");
        assert_eq!(requests[0].temperature, 0.7);
        assert_eq!(requests[0].prompt, "rendered prompt");
        Ok(())
    }

    #[tokio::test]
    async fn test_scripted_transport_error() {
        let client =
            FakeChatClient::new().with_transport_error("connection refused");

        let result = client
            .chat_completion("gemini-2.5-flash", 0.2, "prompt")
            .await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("connection refused"));
    }
}

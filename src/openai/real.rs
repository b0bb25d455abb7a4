use crate::openai::ChatClientTrait;
use anyhow::{anyhow, Result};
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
    CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI-compatible endpoint for Gemini models; any compatible gateway can
/// be substituted via configuration.
pub const DEFAULT_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai";

// A real implementation of the chat client
pub struct RealChatClient {
    client: Client<OpenAIConfig>,
}

impl RealChatClient {
    pub fn new(client: Client<OpenAIConfig>) -> Self {
        Self { client }
    }
}

/// Build a live client from explicit credentials.
///
/// The process environment is never read here; the command-line front end
/// resolves the credential at the outermost entry point.
pub fn create_chat_client(
    api_key: &str,
    api_base: &str,
) -> Result<Arc<dyn ChatClientTrait>> {
    if api_key.trim().is_empty() {
        return Err(anyhow!(
            "API key is required for model access; set GOOGLE_API_KEY or pass --api-key"
        ));
    }

    let config = OpenAIConfig::new()
        .with_api_key(api_key)
        .with_api_base(api_base);
    Ok(Arc::new(RealChatClient::new(Client::with_config(config))))
}

#[async_trait]
impl ChatClientTrait for RealChatClient {
    async fn chat_completion(
        &self,
        model: &str,
        temperature: f32,
        prompt: &str,
    ) -> Result<String, anyhow::Error> {
        let user_message = ChatCompletionRequestMessage::User(
            ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| {
                    anyhow!("Failed to build user message: {}", e)
                })?,
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .temperature(temperature)
            .messages([user_message])
            .build()
            .map_err(|e| anyhow!("Failed to build request message: {}", e))?;

        // One request per call; transport failures propagate to the caller
        let response = self.client.chat().create(request).await.map_err(|e| {
            anyhow!("Failed to create chat completion: {}", e)
        })?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_ref())
            .map(String::from)
            .ok_or_else(|| anyhow!("Model response contained no message content"))
    }
}

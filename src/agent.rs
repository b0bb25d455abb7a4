use crate::openai::real::{create_chat_client, DEFAULT_API_BASE};
use crate::openai::ChatClientTrait;
use crate::parser::{self, TriageAssessment};
use crate::prompt::{build_prompt, PromptTemplate};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::{info, instrument};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Configuration for a [`TriageAgent`].
///
/// The credential is explicit configuration; only the command-line front end
/// reads the process environment.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub model: String,
    pub temperature: f32,
    pub api_key: String,
    pub api_base: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// High-level interface for assessing symptoms.
///
/// Everything is built eagerly at construction: the output contract, the
/// few-shot prompt template and the model client. The agent is read-only
/// afterwards, so concurrent `assess` calls can share it without locking.
pub struct TriageAgent {
    model: String,
    temperature: f32,
    prompt: PromptTemplate,
    client: Arc<dyn ChatClientTrait>,
}

impl std::fmt::Debug for TriageAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageAgent")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

impl TriageAgent {
    /// Validate the configuration and build a live client for it.
    ///
    /// Fails with a configuration error when the credential is blank;
    /// no network activity happens here.
    pub fn new(config: AgentConfig) -> Result<Self> {
        let client = create_chat_client(&config.api_key, &config.api_base)?;
        Ok(Self::with_client(config, client))
    }

    /// Construct the agent around an injected client.
    ///
    /// Tests substitute a fake client here; the caller owns the client's
    /// credential handling.
    pub fn with_client(
        config: AgentConfig,
        client: Arc<dyn ChatClientTrait>,
    ) -> Self {
        let prompt = build_prompt(&parser::format_instructions());
        Self {
            model: config.model,
            temperature: config.temperature,
            prompt,
            client,
        }
    }

    /// Assess a symptom description and return a structured triage plan.
    ///
    /// Issues exactly one request per call; transport and parsing failures
    /// propagate unchanged. Empty input fails before any network activity.
    #[instrument(skip(self, symptoms), err)]
    pub async fn assess(&self, symptoms: &str) -> Result<TriageAssessment> {
        if symptoms.trim().is_empty() {
            return Err(anyhow!("Symptoms text must not be empty"));
        }

        let prompt = self.prompt.render(symptoms);

        let start_time = std::time::Instant::now();
        let raw = self
            .client
            .chat_completion(&self.model, self.temperature, &prompt)
            .await?;

        info!(
            "Assessment response received from {} in {}ms",
            self.model,
            start_time.elapsed().as_millis()
        );

        parser::parse_assessment(&raw)
    }
}

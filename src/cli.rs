use crate::agent::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::openai::real::DEFAULT_API_BASE;
use clap::Parser;

/// Command-line arguments for the triage assistant
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Citizen-facing symptom triage assistant",
    long_about = None
)]
pub struct Args {
    /// Symptom description in Urdu or English. If omitted, read from stdin.
    pub symptoms: Option<String>,

    /// Model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature for the LLM
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// API key for model access
    #[arg(long, env = "GOOGLE_API_KEY")]
    pub api_key: Option<String>,

    /// Base URL of the OpenAI-compatible model endpoint
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Print the assessment as JSON instead of XML-style blocks
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_agent_configuration() {
        let args = Args::try_parse_from(["sehat-triage", "mild headache"])
            .unwrap();
        assert_eq!(args.symptoms.as_deref(), Some("mild headache"));
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(args.api_base, DEFAULT_API_BASE);
        assert!(!args.json);
    }

    #[test]
    fn test_overrides_are_accepted() {
        let args = Args::try_parse_from([
            "sehat-triage",
            "--model",
            "gemini-2.5-pro",
            "--temperature",
            "0.7",
            "--json",
        ])
        .unwrap();
        assert!(args.symptoms.is_none());
        assert_eq!(args.model, "gemini-2.5-pro");
        assert_eq!(args.temperature, 0.7);
        assert!(args.json);
    }
}

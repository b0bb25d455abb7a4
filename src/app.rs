use crate::agent::{AgentConfig, TriageAgent};
use crate::cli::Args;
use crate::parser::TriageAssessment;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::io::Read;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    run_app(Args::parse()).await
}

pub async fn run_app(args: Args) -> Result<()> {
    let symptoms = match args.symptoms {
        Some(symptoms) => symptoms,
        None => read_symptoms_from_stdin()?,
    };

    if symptoms.trim().is_empty() {
        return Err(anyhow!("Symptoms input is required"));
    }

    let agent = TriageAgent::new(AgentConfig {
        model: args.model,
        temperature: args.temperature,
        api_key: args.api_key.unwrap_or_default(),
        api_base: args.api_base,
    })?;

    info!("Assessing symptom report");
    let assessment = agent.assess(&symptoms).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{}", format_assessment(&assessment));
    }

    Ok(())
}

fn read_symptoms_from_stdin() -> Result<String> {
    eprintln!("Enter symptoms (Ctrl-D to finish):");
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow!("Failed to read symptoms from stdin: {}", e))?;
    Ok(buffer.trim().to_string())
}

/// Render the final report: analysis, urgency and plan blocks in fixed
/// order, one line break between sections, surrounding whitespace trimmed.
pub fn format_assessment(assessment: &TriageAssessment) -> String {
    format!(
        "<analysis>{}</analysis>\n<urgency>{}</urgency>\n<plan>{}</plan>",
        assessment.reasoning.trim(),
        assessment.urgency,
        assessment.plan.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::examples::Urgency;

    #[test]
    fn test_format_assessment_block_order() {
        let assessment = TriageAssessment {
            reasoning: "  Low-grade fever without red flags.  ".to_string(),
            urgency: Urgency::SelfCare,
            plan: "Rest and hydrate.\n".to_string(),
        };

        let output = format_assessment(&assessment);

        assert_eq!(
            output,
            "<analysis>Low-grade fever without red flags.</analysis>\n\
             <urgency>Self-care</urgency>\n\
             <plan>Rest and hydrate.</plan>"
        );
    }

    #[tokio::test]
    async fn test_empty_symptom_argument_is_a_usage_error() {
        let args = Args {
            symptoms: Some("   \n ".to_string()),
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.2,
            api_key: Some("test-key".to_string()),
            api_base: "http://localhost:1/v1".to_string(),
            json: false,
        };

        let result = run_app(args).await;

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Symptoms input is required"));
    }
}

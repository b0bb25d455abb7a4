use crate::examples::Urgency;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Structured assessment parsed from the model's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageAssessment {
    /// Explanation for the urgency decision
    pub reasoning: String,
    /// One of the three urgency tiers; an out-of-vocabulary value is a
    /// parsing error
    pub urgency: Urgency,
    /// Follow-up steps and safety advice
    pub plan: String,
}

/// Output-format contract handed to the prompt builder.
///
/// The model is expected to reply with exactly these three tags; the parser
/// holds it to that.
pub fn format_instructions() -> String {
    let labels = Urgency::ALL
        .iter()
        .map(|urgency| urgency.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Reply with exactly three XML tags and no other text:\n\
         <reasoning>explanation for the urgency decision</reasoning>\n\
         <urgency>one of: {}</urgency>\n\
         <plan>follow-up steps and safety advice</plan>",
        labels
    )
}

/// Parse the model's raw reply into a [`TriageAssessment`].
///
/// Each required tag must be present and non-empty; there is no fallback
/// extraction or partial result.
pub fn parse_assessment(raw: &str) -> Result<TriageAssessment> {
    let reasoning = extract_tag(raw, "reasoning")?;
    let urgency_text = extract_tag(raw, "urgency")?;
    let plan = extract_tag(raw, "plan")?;

    let urgency = urgency_text.parse::<Urgency>().map_err(|e| {
        anyhow!("Model response has an invalid <urgency> section: {}", e)
    })?;

    Ok(TriageAssessment {
        reasoning,
        urgency,
        plan,
    })
}

fn extract_tag(raw: &str, tag: &str) -> Result<String> {
    // (?s) so the section may span multiple lines
    let pattern = format!(r"(?s)<{tag}>(.*?)</{tag}>");
    let re = regex::Regex::new(&pattern)
        .map_err(|e| anyhow!("Failed to build tag pattern for <{}>: {}", tag, e))?;

    let captures = re.captures(raw).ok_or_else(|| {
        anyhow!("Model response is missing the <{}> section", tag)
    })?;

    let value = captures[1].trim().to_string();
    if value.is_empty() {
        return Err(anyhow!("Model response has an empty <{}> section", tag));
    }
    Ok(value)
}

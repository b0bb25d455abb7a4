use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency tier assigned to a symptom report.
///
/// The three tiers mirror the referral ladder of the telehealth service:
/// home care, a Basic Health Unit visit, or emergency services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    #[serde(rename = "Self-care")]
    SelfCare,
    #[serde(rename = "BHU Visit")]
    BhuVisit,
    #[serde(rename = "Emergency")]
    Emergency,
}

impl Urgency {
    pub const ALL: [Urgency; 3] =
        [Urgency::SelfCare, Urgency::BhuVisit, Urgency::Emergency];

    /// Canonical label used in prompts, model replies and printed output
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::SelfCare => "Self-care",
            Urgency::BhuVisit => "BHU Visit",
            Urgency::Emergency => "Emergency",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Urgency {
    type Err = anyhow::Error;

    // Exact label match only; the model is told the canonical spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Self-care" => Ok(Urgency::SelfCare),
            "BHU Visit" => Ok(Urgency::BhuVisit),
            "Emergency" => Ok(Urgency::Emergency),
            other => Err(anyhow!("Unknown urgency level: {}", other)),
        }
    }
}

/// A single few-shot triage example shown to the model before the live query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageExample {
    pub symptoms: String,
    pub reasoning: String,
    pub urgency: Urgency,
    pub recommendation: String,
}

impl TriageExample {
    fn new(
        symptoms: &str,
        reasoning: &str,
        urgency: Urgency,
        recommendation: &str,
    ) -> Self {
        Self {
            symptoms: symptoms.to_string(),
            reasoning: reasoning.to_string(),
            urgency,
            recommendation: recommendation.to_string(),
        }
    }
}

/// Curated few-shot examples, one per urgency tier.
///
/// The order is fixed and the prompt builder preserves it.
pub fn default_examples() -> Vec<TriageExample> {
    vec![
        TriageExample::new(
            "Headache for two days, mild fever (100F), body aches. No breathing \
             issues. Drinking fluids and can eat.",
            "Symptoms consistent with viral infection without red flags. Fever is \
             low-grade and patient remains hydrated.",
            Urgency::SelfCare,
            "Rest, hydrate, take paracetamol for fever, monitor for worsening \
             symptoms such as high fever or shortness of breath.",
        ),
        TriageExample::new(
            "Elderly patient with chest tightness, sweating, and pain radiating to \
             left arm for 20 minutes.",
            "Possible acute coronary syndrome; chest pain with radiation and \
             autonomic symptoms is an emergency.",
            Urgency::Emergency,
            "Call emergency services immediately, chew aspirin if not allergic, and \
             do not delay transport to hospital.",
        ),
        TriageExample::new(
            "Child with cough, sore throat, mild fever (101F), eating less but able \
             to drink, no breathing difficulty.",
            "Likely upper respiratory infection without danger signs; evaluation at \
             primary care can ensure no complications.",
            Urgency::BhuVisit,
            "Schedule visit to Basic Health Unit within 24 hours, continue fluids, \
             and use honey/lemon for cough if age >1 year.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_examples_cover_all_tiers_in_order() {
        let examples = default_examples();
        assert_eq!(examples.len(), 3);
        assert_eq!(examples[0].urgency, Urgency::SelfCare);
        assert_eq!(examples[1].urgency, Urgency::Emergency);
        assert_eq!(examples[2].urgency, Urgency::BhuVisit);
    }

    #[test]
    fn test_urgency_labels_round_trip() {
        for urgency in Urgency::ALL {
            let parsed: Urgency = urgency.label().parse().unwrap();
            assert_eq!(parsed, urgency);
        }
    }

    #[test]
    fn test_unknown_urgency_is_rejected() {
        let result = "Urgent".parse::<Urgency>();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown urgency level"));
    }

    #[test]
    fn test_urgency_serializes_as_canonical_label() {
        let json = serde_json::to_string(&Urgency::BhuVisit).unwrap();
        assert_eq!(json, "\"BHU Visit\"");
    }
}

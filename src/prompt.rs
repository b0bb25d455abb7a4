use crate::examples::{default_examples, TriageExample};

/// System preamble for the few-shot prompt. The format-instructions slot is
/// substituted once at template build time.
pub const SYSTEM_PREAMBLE: &str = r####"You are the Triage Agent for a citizen-facing telehealth service.
You converse in Urdu and English, accept free-text symptom descriptions, and assign an urgency level: Self-care, BHU Visit, or Emergency.
Use structured XML tags in your final answer with sections for reasoning, urgency, and plan.
Follow this process:
1. Understand the key symptoms, onset, and risk factors.
2. Determine the most likely urgency level and justify it.
3. Provide actionable next steps, including safety net advice.
You may respond in the user's language when possible.
Output format instructions:
{format_instructions}"####;

/// Closing block carrying the live symptom text.
pub const CONVERSATION_SUFFIX: &str = r####"<conversation>
<symptoms>{symptoms}</symptoms>
</conversation>
Provide your assessment now."####;

/// A composed prompt with the format instructions already applied and one
/// remaining slot for the symptom text.
///
/// Built once per agent; immutable and safe to share afterwards.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    preamble: String,
    example_blocks: Vec<String>,
}

/// Compose the few-shot template: preamble, then each curated example in
/// declaration order, then the conversation slot.
pub fn build_prompt(format_instructions: &str) -> PromptTemplate {
    let preamble =
        SYSTEM_PREAMBLE.replace("{format_instructions}", format_instructions);
    let example_blocks = default_examples()
        .iter()
        .map(render_example)
        .collect();
    PromptTemplate {
        preamble,
        example_blocks,
    }
}

impl PromptTemplate {
    /// Substitute the symptom text into the trailing slot and return the
    /// complete prompt string. Non-empty enforcement is the caller's job.
    pub fn render(&self, symptoms: &str) -> String {
        let mut sections = Vec::with_capacity(self.example_blocks.len() + 2);
        sections.push(self.preamble.clone());
        sections.extend(self.example_blocks.iter().cloned());
        sections.push(CONVERSATION_SUFFIX.replace("{symptoms}", symptoms));
        sections.join("\n\n")
    }
}

// Attribute-free tags, one example per block; the downstream parser and the
// model's in-context learning both rely on this exact shape.
fn render_example(example: &TriageExample) -> String {
    format!(
        "<example>\n<symptoms>{}</symptoms>\n<reasoning>{}</reasoning>\n<urgency>{}</urgency>\n<plan>{}</plan>\n</example>",
        example.symptoms, example.reasoning, example.urgency, example.recommendation
    )
}

//! Presentation Renderer: transcript entries as text cards.
//!
//! A thin consumer of the Transcript Store: formats the narrative and
//! the structured annotations for display, nothing more. All derived
//! values (probabilities, severities, slugs) arrive precomputed.

use crate::models::{Message, MessageRole};
use crate::transcript::Transcript;

/// Line shown while a send is in flight.
pub const TYPING_INDICATOR: &str = "Remy is analyzing your symptoms...";

/// Render one transcript entry, including any structured cards.
pub fn render_message(message: &Message) -> String {
    let speaker = match message.role {
        MessageRole::User => "You",
        MessageRole::Assistant => "Remy",
    };

    let mut out = format!("{speaker}:\n{}\n", message.content);

    for assessment in &message.analysis {
        out.push_str(&format!(
            "\n  [{}] {}% likelihood, {} severity\n    {}\n",
            assessment.condition,
            assessment.probability,
            assessment.severity.as_str(),
            assessment.description,
        ));
    }

    for remedy in &message.remedies {
        out.push_str(&format!(
            "\n  Remedy: {} ({}% match, {})\n    {}\n    /remedies/{}\n",
            remedy.name, remedy.confidence, remedy.category, remedy.relevant_for, remedy.slug,
        ));
    }

    if let Some(source) = &message.ai_source {
        out.push_str(&format!("\n  Source: {source}\n"));
    }

    out
}

/// Render the whole transcript, one card per entry.
pub fn render_transcript(transcript: &Transcript) -> String {
    transcript
        .messages()
        .iter()
        .map(render_message)
        .collect::<Vec<_>>()
        .join("\n")
}

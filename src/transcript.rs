//! Transcript Store: the ordered message sequence for one consultation.

use crate::config;
use crate::models::{Message, MessageRole};

/// Append-only message store for the current consultation.
///
/// Holds the greeting plus everything sent and received since the last
/// reset. There is no delete or edit; the transcript lives in memory
/// only and is owned by a single session.
///
/// Reset bumps a generation counter. A send captures the generation at
/// issue time and appends its result through `append_if_current`, so a
/// completion that arrives after a reset is discarded instead of leaking
/// into the fresh consultation.
#[derive(Debug)]
pub struct Transcript {
    messages: Vec<Message>,
    generation: u64,
}

impl Transcript {
    /// A fresh transcript containing only the greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![greeting()],
            generation: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The current consultation generation. Bumped by `reset`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Append a message to the end of the transcript.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append only if the consultation has not been reset since
    /// `generation` was captured. Returns whether the message landed.
    pub fn append_if_current(&mut self, generation: u64, message: Message) -> bool {
        if generation != self.generation {
            tracing::debug!(
                issued = generation,
                current = self.generation,
                "discarding completion from a previous consultation"
            );
            return false;
        }
        self.messages.push(message);
        true
    }

    /// Start a new consultation: greeting only, next generation.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.messages.clear();
        self.messages.push(greeting());
    }

    /// Title for this consultation, derived from the first user message.
    pub fn title(&self) -> String {
        self.messages
            .iter()
            .find(|m| m.role == MessageRole::User)
            .map(|m| generate_title(&m.content))
            .unwrap_or_else(|| "New consultation".to_string())
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

fn greeting() -> Message {
    Message::assistant(config::GREETING)
}

/// Generate a consultation title from the first user message.
/// Truncates past 50 characters with "...", handling UTF-8 correctly.
pub fn generate_title(first_message: &str) -> String {
    let trimmed = first_message.trim();
    if trimmed.is_empty() {
        return "New consultation".to_string();
    }

    match trimmed.char_indices().nth(50) {
        Some((byte_pos, _)) => format!("{}...", &trimmed[..byte_pos]),
        None => trimmed.to_string(),
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::condition::ConditionAssessment;
use super::enums::MessageRole;
use super::remedy::{NaturalRemedy, RemedySuggestion};

/// One entry in the consultation transcript.
///
/// The structured fields are either entirely derived from one successful
/// analysis response or entirely absent: user messages and fallback
/// replies carry `content` only. Nothing here is mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analysis: Vec<ConditionAssessment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remedies: Vec<RemedySuggestion>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_causes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub natural_remedies: Vec<NaturalRemedy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healing_protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevention_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub science_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub understanding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_source: Option<String>,
}

impl Message {
    /// A user message: verbatim content, no annotations.
    pub fn user(content: impl Into<String>) -> Self {
        Self::bare(MessageRole::User, content)
    }

    /// An assistant message with no annotations (greeting, fallback reply).
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::bare(MessageRole::Assistant, content)
    }

    fn bare(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            analysis: Vec::new(),
            remedies: Vec::new(),
            root_causes: Vec::new(),
            natural_remedies: Vec::new(),
            healing_protocol: None,
            prevention_strategy: None,
            science_explanation: None,
            understanding: None,
            ai_source: None,
        }
    }

    /// Whether this message carries any structured annotations.
    pub fn has_annotations(&self) -> bool {
        !self.analysis.is_empty()
            || !self.remedies.is_empty()
            || !self.root_causes.is_empty()
            || !self.natural_remedies.is_empty()
            || self.healing_protocol.is_some()
            || self.prevention_strategy.is_some()
            || self.science_explanation.is_some()
            || self.understanding.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_messages_have_no_annotations() {
        assert!(!Message::user("I have a headache").has_annotations());
        assert!(!Message::assistant("Try resting.").has_annotations());
    }

    #[test]
    fn user_message_keeps_content_verbatim() {
        let message = Message::user("  exactly as passed  ");
        assert_eq!(message.content, "  exactly as passed  ");
        assert_eq!(message.role, MessageRole::User);
    }

    #[test]
    fn serialization_omits_empty_annotations() {
        let json = serde_json::to_string(&Message::assistant("plain reply")).unwrap();
        assert!(!json.contains("analysis"));
        assert!(!json.contains("remedies"));
        assert!(!json.contains("healing_protocol"));
    }

    #[test]
    fn deserialization_fills_missing_fields() {
        let message: Message =
            serde_json::from_str(r#"{"role": "assistant", "content": "hello"}"#).unwrap();
        assert_eq!(message.content, "hello");
        assert!(message.analysis.is_empty());
        assert!(message.understanding.is_none());
    }
}

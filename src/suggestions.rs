//! Starter prompts for an empty consultation.

use serde::{Deserialize, Serialize};

/// Prompt suggestion shown before the first user message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSuggestion {
    pub text: String,
    pub category: String,
}

/// Default starter prompts for a fresh consultation.
pub fn default_prompt_suggestions() -> Vec<PromptSuggestion> {
    vec![
        PromptSuggestion {
            text: "I have a headache and feel nauseous".into(),
            category: "pain".into(),
        },
        PromptSuggestion {
            text: "I've been tired all week no matter how much I sleep".into(),
            category: "energy".into(),
        },
        PromptSuggestion {
            text: "My stomach hurts after every meal".into(),
            category: "digestion".into(),
        },
        PromptSuggestion {
            text: "I have a sore throat and a runny nose".into(),
            category: "cold-flu".into(),
        },
        PromptSuggestion {
            text: "I can't fall asleep at night".into(),
            category: "sleep".into(),
        },
        PromptSuggestion {
            text: "My skin has been itchy and dry for days".into(),
            category: "skin".into(),
        },
    ]
}

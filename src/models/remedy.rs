use serde::{Deserialize, Serialize};

/// A catalog remedy matched to the consultation, with display fields
/// derived at normalize time (id, slug, confidence, category fallbacks).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemedySuggestion {
    pub id: u64,
    pub name: String,
    /// URL-safe identifier, used to link into the remedy catalog.
    pub slug: String,
    pub confidence: i32,
    pub category: String,
    pub relevant_for: String,
}

/// A natural remedy mentioned in the analysis narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaturalRemedy {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scientific_basis: Option<String>,
}

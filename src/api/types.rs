//! Request and response shapes for the Remy analysis endpoints.
//!
//! The analysis payload is loosely typed upstream: every field is
//! optional and independently present, and two of them have dual
//! spellings. Everything is modeled as `Option`/defaulted fields so a
//! sparse payload deserializes without error; shape validation happens
//! here, at the parse boundary, not in the normalizer.

use serde::{Deserialize, Serialize};

use crate::config;

/// Request body for the structured symptom analysis endpoint.
#[derive(Debug, Serialize)]
pub struct AnalysisRequest<'a> {
    pub symptoms: &'a str,
    pub context: &'a str,
    pub age: &'a str,
    pub duration: &'a str,
}

impl<'a> AnalysisRequest<'a> {
    /// Build a structured-diagnosis request for the given symptom text.
    /// Context, age, and duration are fixed intake constants.
    pub fn for_symptoms(symptoms: &'a str) -> Self {
        Self {
            symptoms,
            context: config::DIAGNOSIS_CONTEXT,
            age: config::DEFAULT_AGE,
            duration: config::DEFAULT_DURATION,
        }
    }
}

/// Request body for the plain-chat fallback endpoint.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub context: &'a str,
}

impl<'a> ChatRequest<'a> {
    pub fn for_message(message: &'a str) -> Self {
        Self {
            message,
            context: config::HEALTH_EXPERT_CONTEXT,
        }
    }
}

/// Success body from the plain-chat fallback endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Success body from the symptom analysis endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisPayload {
    pub understanding: Option<String>,
    pub primary_concern: Option<String>,
    #[serde(default)]
    pub likely_conditions: Vec<String>,
    #[serde(default)]
    pub root_causes: Vec<String>,
    pub science_explanation: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationEntry>,
    #[serde(default)]
    pub natural_remedies: Vec<NaturalRemedyEntry>,
    #[serde(default)]
    pub database_remedies: Vec<DatabaseRemedyEntry>,
    pub prevention_strategy: Option<String>,
    pub warning_signs: Option<String>,
    pub healing_protocol: Option<String>,
    pub ai_source: Option<String>,
    /// Free-text fallbacks used when no structured field is present.
    pub analysis: Option<String>,
    pub response: Option<String>,
}

/// One entry in `recommendations`. The service spells the main text
/// either `suggestion` or `recommendation`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationEntry {
    #[serde(alias = "recommendation")]
    pub suggestion: Option<String>,
    pub how_to: Option<String>,
    pub why_it_works: Option<String>,
}

/// One entry in `natural_remedies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NaturalRemedyEntry {
    pub remedy_name: Option<String>,
    pub dosage: Option<String>,
    pub preparation: Option<String>,
    pub scientific_basis: Option<String>,
}

/// One entry in `database_remedies`. The name is spelled either
/// `remedy_name` or `name`; id and slug may be missing entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseRemedyEntry {
    #[serde(alias = "id")]
    pub remedy_id: Option<u64>,
    #[serde(alias = "name")]
    pub remedy_name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_request_carries_fixed_intake_fields() {
        let request = AnalysisRequest::for_symptoms("headache and nausea");
        assert_eq!(request.symptoms, "headache and nausea");
        assert_eq!(request.context, config::DIAGNOSIS_CONTEXT);
        assert_eq!(request.age, config::DEFAULT_AGE);
        assert_eq!(request.duration, config::DEFAULT_DURATION);
    }

    #[test]
    fn chat_request_uses_health_expert_context() {
        let request = ChatRequest::for_message("headache");
        assert_eq!(request.context, "health_expert");
    }

    #[test]
    fn analysis_request_serializes_all_fields() {
        let json =
            serde_json::to_value(AnalysisRequest::for_symptoms("sore throat")).unwrap();
        assert_eq!(json["symptoms"], "sore throat");
        assert_eq!(json["context"], "remy_professional_health_diagnosis");
        assert!(json["age"].is_string());
        assert!(json["duration"].is_string());
    }

    #[test]
    fn empty_payload_deserializes() {
        let payload: AnalysisPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.understanding.is_none());
        assert!(payload.likely_conditions.is_empty());
        assert!(payload.database_remedies.is_empty());
    }

    #[test]
    fn recommendation_accepts_both_spellings() {
        let a: RecommendationEntry =
            serde_json::from_str(r#"{"suggestion": "rest"}"#).unwrap();
        let b: RecommendationEntry =
            serde_json::from_str(r#"{"recommendation": "hydrate"}"#).unwrap();
        assert_eq!(a.suggestion.as_deref(), Some("rest"));
        assert_eq!(b.suggestion.as_deref(), Some("hydrate"));
    }

    #[test]
    fn database_remedy_accepts_both_name_spellings() {
        let a: DatabaseRemedyEntry =
            serde_json::from_str(r#"{"remedy_name": "Peppermint Tea"}"#).unwrap();
        let b: DatabaseRemedyEntry =
            serde_json::from_str(r#"{"name": "Ginger Root", "id": 42}"#).unwrap();
        assert_eq!(a.remedy_name.as_deref(), Some("Peppermint Tea"));
        assert_eq!(b.remedy_name.as_deref(), Some("Ginger Root"));
        assert_eq!(b.remedy_id, Some(42));
    }

    #[test]
    fn unknown_payload_fields_are_ignored() {
        let payload: AnalysisPayload = serde_json::from_str(
            r#"{"understanding": "Got it", "some_future_field": [1, 2, 3]}"#,
        )
        .unwrap();
        assert_eq!(payload.understanding.as_deref(), Some("Got it"));
    }
}

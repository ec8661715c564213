//! Response Normalizer: maps the loosely-structured analysis payload
//! into the transcript's annotated message shape.
//!
//! Everything in this module is pure and deterministic: the same payload
//! always produces the same narrative and the same derived values.
//! Sparse payloads never panic; each field falls back independently.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::types::{AnalysisPayload, DatabaseRemedyEntry};
use crate::config;
use crate::models::{ConditionAssessment, Message, NaturalRemedy, RemedySuggestion, Severity};

/// Probability assigned to the first likely condition; each later rank
/// drops by one step. Intentionally unclamped: a very long upstream list
/// yields negative values, matching the observed service contract.
const CONDITION_BASE_PROBABILITY: i32 = 85;
const CONDITION_DECAY_STEP: i32 = 7;

/// Confidence assigned to the first matched remedy; same unclamped decay.
const REMEDY_BASE_CONFIDENCE: i32 = 92;
const REMEDY_DECAY_STEP: i32 = 3;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").unwrap());

/// Build the full assistant message for one successful analysis response.
///
/// All structured fields of the result come from this single payload;
/// none are ever merged in from a later response.
pub fn normalize(payload: &AnalysisPayload) -> Message {
    let mut message = Message::assistant(compose_narrative(payload));

    message.analysis = assess_conditions(&payload.likely_conditions);
    message.remedies = suggest_remedies(&payload.database_remedies);
    message.root_causes = payload.root_causes.clone();
    message.natural_remedies = payload
        .natural_remedies
        .iter()
        .filter_map(|entry| {
            entry.remedy_name.clone().map(|name| NaturalRemedy {
                name,
                dosage: entry.dosage.clone(),
                preparation: entry.preparation.clone(),
                scientific_basis: entry.scientific_basis.clone(),
            })
        })
        .collect();
    message.healing_protocol = payload.healing_protocol.clone();
    message.prevention_strategy = payload.prevention_strategy.clone();
    message.science_explanation = payload.science_explanation.clone();
    message.understanding = payload.understanding.clone();
    message.ai_source = payload.ai_source.clone();

    message
}

/// Compose the layered consultation narrative.
///
/// Sections appear in a fixed order, each omitted entirely when its
/// source field is absent or empty, separated by blank lines. When no
/// structured field is present the narrative falls back to the payload's
/// free-text `analysis`, then `response`, then a fixed generic sentence.
pub fn compose_narrative(payload: &AnalysisPayload) -> String {
    let mut sections: Vec<String> = Vec::new();

    // 1. Understanding / acknowledgment
    if let Some(understanding) = non_empty(payload.understanding.as_deref()) {
        sections.push(understanding.to_string());
    } else if let Some(concern) = non_empty(payload.primary_concern.as_deref()) {
        sections.push(format!("I understand you're dealing with {concern}."));
    }

    // 2. Likely conditions
    if !payload.likely_conditions.is_empty() {
        let mut lines = vec!["**What's likely happening:**".to_string()];
        for (rank, condition) in payload.likely_conditions.iter().enumerate() {
            let label = if rank == 0 { "Most likely" } else { "Also possible" };
            lines.push(format!("• {label}: {condition}"));
        }
        sections.push(lines.join("\n"));
    }

    // 3. Root causes
    if !payload.root_causes.is_empty() {
        let mut lines = vec!["**Why this happens:**".to_string()];
        for cause in &payload.root_causes {
            lines.push(format!("• {cause}"));
        }
        sections.push(lines.join("\n"));
    }

    // 4. Science explanation
    if let Some(science) = non_empty(payload.science_explanation.as_deref()) {
        sections.push(format!("**The Science:**\n{science}"));
    }

    // 5. Recommendations
    let recommendations: Vec<_> = payload
        .recommendations
        .iter()
        .filter(|entry| non_empty(entry.suggestion.as_deref()).is_some())
        .collect();
    if !recommendations.is_empty() {
        let mut lines = vec!["**What to do:**".to_string()];
        for (number, entry) in recommendations.iter().enumerate() {
            let suggestion = entry.suggestion.as_deref().unwrap_or_default();
            lines.push(format!("{}. {}", number + 1, suggestion));
            if let Some(how) = non_empty(entry.how_to.as_deref()) {
                lines.push(format!("   How: {how}"));
            }
            if let Some(why) = non_empty(entry.why_it_works.as_deref()) {
                lines.push(format!("   Why it works: {why}"));
            }
        }
        sections.push(lines.join("\n"));
    }

    // 6. Natural remedies
    let natural: Vec<_> = payload
        .natural_remedies
        .iter()
        .filter(|entry| non_empty(entry.remedy_name.as_deref()).is_some())
        .collect();
    if !natural.is_empty() {
        let mut lines = vec!["**Natural Remedies:**".to_string()];
        for (number, entry) in natural.iter().enumerate() {
            let name = entry.remedy_name.as_deref().unwrap_or_default();
            lines.push(format!("{}. {}", number + 1, name));
            if let Some(dosage) = non_empty(entry.dosage.as_deref()) {
                lines.push(format!("   Dosage: {dosage}"));
            }
            if let Some(preparation) = non_empty(entry.preparation.as_deref()) {
                lines.push(format!("   Preparation: {preparation}"));
            }
            if let Some(basis) = non_empty(entry.scientific_basis.as_deref()) {
                lines.push(format!("   Scientific basis: {basis}"));
            }
        }
        sections.push(lines.join("\n"));
    }

    // 7. Prevention
    if let Some(prevention) = non_empty(payload.prevention_strategy.as_deref()) {
        sections.push(format!("**Prevention:** {prevention}"));
    }

    // 8. Warning signs
    if let Some(warnings) = non_empty(payload.warning_signs.as_deref()) {
        sections.push(format!("**Seek medical help if:** {warnings}"));
    }

    if sections.is_empty() {
        return non_empty(payload.analysis.as_deref())
            .or_else(|| non_empty(payload.response.as_deref()))
            .unwrap_or(config::GENERIC_REPLY)
            .to_string();
    }

    sections.join("\n\n")
}

/// Rank the likely conditions: probability decays linearly from the top
/// entry, severity tiers by position, and the description is synthesized
/// from both.
pub fn assess_conditions(conditions: &[String]) -> Vec<ConditionAssessment> {
    conditions
        .iter()
        .enumerate()
        .map(|(rank, condition)| ConditionAssessment {
            condition: condition.clone(),
            probability: CONDITION_BASE_PROBABILITY - CONDITION_DECAY_STEP * rank as i32,
            severity: severity_for_rank(rank),
            description: describe_condition(rank),
        })
        .collect()
}

fn severity_for_rank(rank: usize) -> Severity {
    match rank {
        0 => Severity::High,
        1 => Severity::Moderate,
        _ => Severity::Low,
    }
}

fn describe_condition(rank: usize) -> String {
    let word = severity_for_rank(rank).confidence_word();
    let clause = if rank == 0 {
        "Most likely — focus treatment here."
    } else {
        "Alternative possibility."
    };
    format!("{word} confidence match. {clause}")
}

/// Map catalog remedy entries to suggestions, deriving whatever the
/// payload omitted: id falls back to the zero-based index, slug to the
/// slugged name and then to a synthetic `remedy-<index>`, category to a
/// fixed placeholder.
pub fn suggest_remedies(entries: &[DatabaseRemedyEntry]) -> Vec<RemedySuggestion> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let slug = entry
                .slug
                .clone()
                .filter(|s| !s.is_empty())
                .or_else(|| {
                    entry
                        .remedy_name
                        .as_deref()
                        .map(derive_slug)
                        .filter(|s| !s.is_empty())
                })
                .unwrap_or_else(|| format!("remedy-{index}"));

            RemedySuggestion {
                id: entry.remedy_id.unwrap_or(index as u64),
                name: entry
                    .remedy_name
                    .clone()
                    .unwrap_or_else(|| format!("Remedy {}", index + 1)),
                slug,
                confidence: REMEDY_BASE_CONFIDENCE - REMEDY_DECAY_STEP * index as i32,
                category: entry
                    .category
                    .clone()
                    .unwrap_or_else(|| config::DEFAULT_REMEDY_CATEGORY.to_string()),
                relevant_for: config::REMEDY_RELEVANCE_NOTE.to_string(),
            }
        })
        .collect()
}

/// Derive a URL-safe slug from a display name: lowercase, with every run
/// of non-alphanumeric characters collapsed to a single hyphen and no
/// leading or trailing hyphens. Idempotent.
pub fn derive_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

fn non_empty(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.trim().is_empty())
}

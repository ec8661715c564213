use serde::{Deserialize, Serialize};

use super::enums::Severity;

/// One ranked entry in an assistant message's likely-condition list.
///
/// Probability, severity, and description are all derived from the
/// entry's rank at normalize time; the upstream payload supplies only
/// the condition label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionAssessment {
    pub condition: String,
    pub probability: i32,
    pub severity: Severity,
    pub description: String,
}

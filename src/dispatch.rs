//! Request Dispatcher: the two-tier analysis protocol.
//!
//! One send produces exactly one of three outcomes: a structured
//! assistant message from the primary analysis endpoint, a plain reply
//! from the chat fallback, or a terminal notice. Primary failures of
//! every kind (connection, timeout, non-2xx, unparseable body) take the
//! same fallback path. There is one fallback and no retries or backoff
//! at this layer; timeouts belong to the transport.

use crate::api::types::{AnalysisPayload, AnalysisRequest, ChatReply, ChatRequest};
use crate::api::ApiError;
use crate::config;
use crate::models::Message;
use crate::normalize::normalize;

/// Boundary trait for the two Remy endpoints.
pub trait AnalysisApi {
    /// POST the structured symptom analysis request (primary).
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<AnalysisPayload, ApiError>;

    /// POST the plain conversational request (fallback).
    fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatReply, ApiError>;
}

/// Outcome of one consultation send. Variants are mutually exclusive:
/// any single send yields exactly one of them.
#[derive(Debug)]
pub enum DispatchResult {
    /// Primary endpoint succeeded; the message carries structured
    /// annotations derived from that single response.
    Analyzed(Message),
    /// Primary failed, fallback chat succeeded; content-only message.
    PlainReply(Message),
    /// Both endpoints failed; carries the user-visible notice.
    Unavailable(String),
}

/// Run the two-tier protocol for one symptom description.
pub fn run_consultation<A: AnalysisApi>(api: &A, symptoms: &str) -> DispatchResult {
    let request = AnalysisRequest::for_symptoms(symptoms);
    let primary_error = match api.analyze(&request) {
        Ok(payload) => {
            tracing::debug!(
                conditions = payload.likely_conditions.len(),
                remedies = payload.database_remedies.len(),
                "symptom analysis succeeded"
            );
            return DispatchResult::Analyzed(normalize(&payload));
        }
        Err(e) => e,
    };

    tracing::warn!(error = %primary_error, "symptom analysis failed, falling back to plain chat");

    let fallback = ChatRequest::for_message(symptoms);
    match api.chat(&fallback) {
        Ok(reply) => DispatchResult::PlainReply(Message::assistant(reply.response)),
        Err(secondary_error) => {
            tracing::error!(error = %secondary_error, "fallback chat failed, no reply for this send");
            DispatchResult::Unavailable(config::ANALYSIS_ERROR_NOTICE.to_string())
        }
    }
}

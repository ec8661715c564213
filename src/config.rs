/// Application-level constants
pub const APP_NAME: &str = "Remy";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_ENV: &str = "REMY_API_BASE_URL";

/// Default API base URL when the environment does not override it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Environment variable holding the signed-in session token.
pub const SESSION_TOKEN_ENV: &str = "REMY_SESSION_TOKEN";

/// Structured symptom analysis endpoint (primary).
pub const SYMPTOM_FINDER_PATH: &str = "/api/ai/symptom-finder";

/// Plain conversational endpoint (fallback).
pub const CHAT_PATH: &str = "/api/chat";

/// Context tag identifying a structured-diagnosis request.
pub const DIAGNOSIS_CONTEXT: &str = "remy_professional_health_diagnosis";

/// Context tag for the plain-chat fallback.
pub const HEALTH_EXPERT_CONTEXT: &str = "health_expert";

/// Intake fields sent with every analysis request. The consultation chat
/// does not collect these per user; the values are fixed.
pub const DEFAULT_AGE: &str = "adult";
pub const DEFAULT_DURATION: &str = "recent";

/// Category assigned to a matched remedy when the payload omits one.
pub const DEFAULT_REMEDY_CATEGORY: &str = "targeted-remedy";

/// Relevance note carried by every matched remedy card. One fixed string
/// for all items; remedies are matched per consultation, not per item.
pub const REMEDY_RELEVANCE_NOTE: &str = "Matched to the symptoms you described";

/// Greeting opening every consultation.
pub const GREETING: &str = "Hi, I'm Remy. Describe your symptoms in your own words \
    and I'll walk you through what might be going on and what could help.";

/// User-visible notice when both analysis endpoints fail.
pub const ANALYSIS_ERROR_NOTICE: &str =
    "Analysis Error: I couldn't analyze your symptoms right now. Please try again.";

/// Reply used when a successful analysis carries no usable content at all.
pub const GENERIC_REPLY: &str = "I've looked at what you described. Could you tell me \
    a little more about your symptoms so I can help?";

/// Maximum consultation input length in characters.
pub const MAX_INPUT_LENGTH: usize = 2_000;

/// Resolve the API base URL from the environment, falling back to local.
pub fn api_base_url() -> String {
    std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info".to_string()
}

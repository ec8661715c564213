use thiserror::Error;

/// Errors from the Remy API boundary.
///
/// Every variant is recoverable at the dispatcher: a primary-endpoint
/// error of any kind triggers the plain-chat fallback, and a fallback
/// error becomes the terminal notice. Nothing here reaches the
/// normalizer or the transcript.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Cannot reach the Remy API at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP transport error: {0}")]
    Transport(String),

    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse API response: {0}")]
    ResponseParsing(String),
}

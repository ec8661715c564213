//! Blocking HTTP client for the Remy analysis endpoints.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::dispatch::AnalysisApi;

use super::error::ApiError;
use super::types::{AnalysisPayload, AnalysisRequest, ChatReply, ChatRequest};

/// HTTP client for the Remy API.
pub struct RemyApiClient {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl RemyApiClient {
    /// Create a client for the given base URL.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default instance pointed at the local API with a 60s timeout.
    pub fn default_local() -> Self {
        Self::new(config::DEFAULT_API_BASE_URL, 60)
    }

    /// Client configured from the environment (REMY_API_BASE_URL),
    /// falling back to the local default.
    pub fn from_env() -> Self {
        Self::new(&config::api_base_url(), 60)
    }

    /// The base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.post(&url).json(body).send().map_err(|e| {
            if e.is_connect() {
                ApiError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ApiError::Timeout(self.timeout_secs)
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }
}

impl AnalysisApi for RemyApiClient {
    fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<AnalysisPayload, ApiError> {
        self.post_json(config::SYMPTOM_FINDER_PATH, request)
    }

    fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatReply, ApiError> {
        self.post_json(config::CHAT_PATH, request)
    }
}

//! HTTP client for the YouTube Data API
//!
//! Sends single-attempt GET requests authenticated with a static API key
//! and maps failed responses onto [`YoutubeError`].

use std::fmt;
use std::time::Duration;

use crate::error::{Result, YoutubeError};
use crate::parser::describe_error_body;
use crate::url::DEFAULT_BASE_URL;

/// Environment variable read by [`ClientConfig::from_env`]
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

const USER_AGENT: &str = concat!("ytscope/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Clone)]
pub struct ClientConfig {
    /// Developer API key, sent as the `key` query parameter
    pub api_key: String,
    /// API root without trailing slash (default: [`DEFAULT_BASE_URL`])
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with default endpoint and timeout
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Read the API key from `YOUTUBE_API_KEY`
    ///
    /// # Errors
    /// - `Configuration` if the variable is unset, not unicode or blank
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|e| {
            YoutubeError::Configuration(format!("{} is not available: {}", API_KEY_ENV, e))
        })?;
        if api_key.trim().is_empty() {
            return Err(YoutubeError::Configuration(format!(
                "{} is set but empty",
                API_KEY_ENV
            )));
        }
        Ok(Self::new(api_key))
    }

    /// Point the client at another API root, e.g. a mock server
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// HTTP client wrapper for the YouTube Data API
///
/// Holds one `reqwest::Client` and the API key. Immutable after
/// construction; share it by reference for any number of sequential calls.
pub struct YoutubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YoutubeClient {
    /// Create a new client for the public API endpoint
    ///
    /// # Errors
    /// - `Configuration` if `api_key` is empty or whitespace only
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with custom configuration
    ///
    /// No request is sent here; the first network call happens on the
    /// first [`YoutubeClient::fetch`].
    ///
    /// # Errors
    /// - `Configuration` if the API key is empty or whitespace only
    /// - `HttpError` if the underlying HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(YoutubeError::Configuration(
                "API key cannot be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(YoutubeError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Fetch a JSON body from a path below the API root
    ///
    /// # Arguments
    /// * `path` - Path with query string (e.g., "/channels?part=snippet&id=UC…")
    ///
    /// # Returns
    /// The raw response body of a 2xx response
    ///
    /// # Errors
    /// - `AccessDenied` - HTTP 403 (quota exceeded, key restricted or disabled)
    /// - `NotFound` - HTTP 404
    /// - `ApiError` - any other non-success status
    /// - `HttpError` - network errors and timeouts
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%path, "sending YouTube API request");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| YoutubeError::HttpError(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .text()
                .await
                .map_err(|e| YoutubeError::HttpError(e.without_url()));
        }

        // The body only feeds the message; a broken body must not hide the status.
        let body = response.text().await.unwrap_or_default();
        let detail = describe_error_body(&body);
        tracing::debug!(%path, status = status.as_u16(), %detail, "YouTube API request failed");

        Err(match status {
            reqwest::StatusCode::FORBIDDEN => YoutubeError::AccessDenied(detail),
            reqwest::StatusCode::NOT_FOUND => YoutubeError::NotFound(detail),
            _ => YoutubeError::ApiError {
                status: status.as_u16(),
                message: detail,
            },
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl fmt::Debug for YoutubeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YoutubeClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

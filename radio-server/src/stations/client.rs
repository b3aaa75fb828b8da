//! Radio station list HTTP client.

use serde::de::IgnoredAny;

use super::error::StationError;

/// Default upstream URL for the station list document.
const DEFAULT_BASE_URL: &str = "https://de1.api.radio-browser.info/json/stations";

/// Configuration for the station list client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Upstream URL for the station list document
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl StationClientConfig {
    /// Create a new config pointing at the default upstream.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom upstream URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the upstream station list.
///
/// The upstream is a single read-only document; there is no auth and no
/// pagination. One request fetches the whole list.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    base_url: String,
}

impl StationClient {
    /// Create a new station list client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Fetch the station list document as raw text.
    ///
    /// The body is checked to be syntactically valid JSON but returned
    /// untouched, preserving upstream formatting byte-for-byte. No retry
    /// is attempted on failure.
    pub async fn fetch_raw(&self) -> Result<String, StationError> {
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        validate_json(&body)?;

        Ok(body)
    }
}

/// Check that `body` is one complete, syntactically valid JSON document.
///
/// The parsed structure is discarded; callers keep the raw text.
fn validate_json(body: &str) -> Result<(), StationError> {
    serde_json::from_str::<IgnoredAny>(body)
        .map(|_| ())
        .map_err(|e| StationError::InvalidData {
            message: e.to_string(),
        })
}

//! Data transfer objects for web responses.

use serde::Serialize;

/// Error envelope returned for failed API requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Generic failure message; upstream details stay server-side
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the process is serving
    pub status: &'static str,

    /// Current server time, RFC 3339
    pub timestamp: String,
}

//! Station upstream error types.

/// Errors that can occur when fetching the station list.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Transport-level failure reaching the upstream: DNS, connection
    /// refused, TLS, timeout, or a non-success status code.
    #[error("upstream unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// Body received in full but not syntactically valid JSON
    #[error("invalid upstream data: {message}")]
    InvalidData { message: String },
}

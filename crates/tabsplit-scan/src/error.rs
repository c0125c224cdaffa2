//! # Scan Error Types
//!
//! Failure classes for the collaborator call. Per the system's error
//! design this is the only error class that ever reaches the user; the
//! caller surfaces it, leaves the bill state untouched, and may retry by
//! re-invoking the scan.

use thiserror::Error;

/// Errors from the receipt-scanning collaborator call.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No API key configured; the scanner is disabled.
    #[error("receipt scanner is not configured (no API key)")]
    MissingApiKey,

    /// Transport-level failure (DNS, TLS, timeout, connection).
    #[error("request to scanner service failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("scanner service returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// The service answered successfully but with no extractable text.
    #[error("scanner service returned an empty response")]
    EmptyResponse,

    /// The returned text was not the JSON the response schema promised.
    #[error("scanner response was malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScanError::MissingApiKey.to_string(),
            "receipt scanner is not configured (no API key)"
        );

        let err = ScanError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "scanner service returned status 429: quota exceeded"
        );
    }
}

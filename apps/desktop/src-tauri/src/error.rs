//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in TabSplit                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('scan_receipt')                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Scan failed? ──── ScanError::Api { .. } ──────┐                │  │
//! │  │         │                                      ▼                │  │
//! │  │  Scan in flight? ── ScanBusy ───────────── ApiError ───────────►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Bill update commands never fail: parse failures recover to zero       │
//! │  inside the engine, so those commands return plain responses.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use tabsplit_scan::ScanError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "SCAN_FAILED",
///   "message": "scanner service returned status 429: quota exceeded"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('scan_receipt', { imageBase64, mimeType });
/// } catch (e) {
///   switch (e.code) {
///     case 'SCAN_BUSY':
///       // upload control should already be disabled
///       break;
///     case 'SCANNER_UNAVAILABLE':
///       hideScannerPanel();
///       break;
///     default:
///       showError(e.message);
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// The collaborator call failed; the bill state is unchanged and the
    /// user may retry.
    ScanFailed,

    /// A scan is already in flight; one at a time.
    ScanBusy,

    /// No API key is configured, so scanning is disabled.
    ScannerUnavailable,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates the busy-flag rejection.
    pub fn scan_busy() -> Self {
        ApiError::new(ErrorCode::ScanBusy, "a receipt scan is already in progress")
    }

    /// Creates the scanner-disabled rejection.
    pub fn scanner_unavailable() -> Self {
        ApiError::new(
            ErrorCode::ScannerUnavailable,
            "receipt scanning is not configured",
        )
    }
}

/// Converts scanner errors to API errors.
///
/// This is the only error class that reaches the user; everything the
/// core engine tolerates is recovered long before this point.
impl From<ScanError> for ApiError {
    fn from(err: ScanError) -> Self {
        match err {
            ScanError::MissingApiKey => ApiError::scanner_unavailable(),
            ScanError::Http(e) => {
                tracing::error!("scanner transport failure: {}", e);
                ApiError::new(
                    ErrorCode::ScanFailed,
                    "could not reach the receipt scanner service",
                )
            }
            ScanError::Api { status, message } => {
                tracing::error!(status, "scanner service error: {}", message);
                ApiError::new(
                    ErrorCode::ScanFailed,
                    format!("receipt scanner rejected the request (status {})", status),
                )
            }
            ScanError::EmptyResponse => ApiError::new(
                ErrorCode::ScanFailed,
                "the scanner returned no data for this image",
            ),
            ScanError::Malformed(e) => {
                tracing::error!("scanner response malformed: {}", e);
                ApiError::new(
                    ErrorCode::ScanFailed,
                    "the scanner response could not be understood",
                )
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_mapping() {
        let api: ApiError = ScanError::EmptyResponse.into();
        assert!(matches!(api.code, ErrorCode::ScanFailed));

        let api: ApiError = ScanError::MissingApiKey.into();
        assert!(matches!(api.code, ErrorCode::ScannerUnavailable));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&ApiError::scan_busy()).unwrap();
        assert!(json.contains("\"code\":\"SCAN_BUSY\""));
        assert!(json.contains("\"message\""));
    }
}

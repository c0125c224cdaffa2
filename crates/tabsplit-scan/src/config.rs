//! # Scanner Configuration
//!
//! Configuration for the receipt-scanning collaborator.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TABSPLIT_*`, then `GEMINI_API_KEY`)
//! 2. Defaults (this file)
//!
//! A missing API key is not a startup failure: the shell constructs the
//! scanner lazily and surfaces "scanner unavailable" only when the user
//! actually tries to scan.

use std::time::Duration;

/// Default public endpoint of the image-understanding service.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default extraction model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default end-to-end request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connect timeout, separate from the full-request timeout so a dead
/// endpoint fails fast.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Scanner configuration.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// API key for the collaborator. `None` disables scanning.
    pub api_key: Option<String>,

    /// Base URL of the service (no trailing slash).
    pub base_url: String,

    /// Model identifier used for extraction.
    pub model: String,

    /// End-to-end request timeout.
    pub timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ScanConfig {
    /// Builds a configuration from environment variables, falling back to
    /// defaults.
    ///
    /// ## Variables
    /// - `TABSPLIT_API_KEY` (preferred) or `GEMINI_API_KEY` - API key
    /// - `TABSPLIT_SCAN_BASE_URL` - endpoint override (testing, proxies)
    /// - `TABSPLIT_SCAN_MODEL` - model override
    pub fn from_env() -> Self {
        let api_key = std::env::var("TABSPLIT_API_KEY")
            .or_else(|_| std::env::var("GEMINI_API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());

        let base_url = std::env::var("TABSPLIT_SCAN_BASE_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let model = std::env::var("TABSPLIT_SCAN_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        ScanConfig {
            api_key,
            base_url,
            model,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Whether an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert!(!config.has_api_key());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}

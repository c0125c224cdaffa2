//! # Scanner State
//!
//! Holds the receipt-scanner client and the busy flag that keeps scans
//! one-at-a-time.
//!
//! ## Busy Flag Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scan Concurrency Model                               │
//! │                                                                         │
//! │  scan_receipt ──► try_begin() ──── true ──► HTTP call ──► finish()     │
//! │                        │                                                │
//! │                      false                                              │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                  SCAN_BUSY error (upload control is disabled anyway)   │
//! │                                                                         │
//! │  There is no cancellation and no interaction with an in-flight scan:   │
//! │  a second request after finish() simply starts fresh.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tabsplit_scan::{ReceiptScanner, ScanConfig, ScanError};

/// Tauri-managed scanner state.
///
/// The client is built once at startup; `None` means no API key was
/// configured and scanning is disabled (the rest of the app still works).
#[derive(Debug)]
pub struct ScannerState {
    scanner: Option<ReceiptScanner>,
    busy: AtomicBool,
}

impl ScannerState {
    /// Builds the scanner from configuration. A missing API key disables
    /// scanning rather than failing startup; any other construction error
    /// does the same but is logged.
    pub fn new(config: ScanConfig) -> Self {
        let scanner = match ReceiptScanner::new(config) {
            Ok(scanner) => Some(scanner),
            Err(ScanError::MissingApiKey) => None,
            Err(e) => {
                tracing::error!("failed to build receipt scanner: {}", e);
                None
            }
        };

        ScannerState {
            scanner,
            busy: AtomicBool::new(false),
        }
    }

    /// The scanner client, if scanning is configured.
    pub fn scanner(&self) -> Option<&ReceiptScanner> {
        self.scanner.as_ref()
    }

    /// Attempts to claim the busy flag. Returns false if a scan is
    /// already in flight.
    pub fn try_begin(&self) -> bool {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Releases the busy flag. Must be called on success AND failure
    /// paths of the scan command.
    pub fn finish(&self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> ScannerState {
        ScannerState::new(ScanConfig::default())
    }

    #[test]
    fn test_missing_key_means_no_scanner() {
        let state = unconfigured();
        assert!(state.scanner().is_none());
    }

    #[test]
    fn test_busy_flag_is_exclusive() {
        let state = unconfigured();

        assert!(state.try_begin());
        // Second claim while in flight is rejected
        assert!(!state.try_begin());

        state.finish();
        // A fresh request after finish starts clean
        assert!(state.try_begin());
    }
}

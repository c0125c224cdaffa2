//! # Scan Command
//!
//! The one asynchronous command in the system: hand the uploaded image to
//! the external image-understanding collaborator and fold the result into
//! the bill session.
//!
//! ## Scan Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Scan Lifecycle                               │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Idle    │────►│  Busy    │────►│ Ingest   │────►│  Idle    │       │
//! │  │          │     │ (HTTP)   │     │ summary  │     │          │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       │                │                                                │
//! │       │                └── failure ──► Idle, session UNCHANGED,        │
//! │       │                               ApiError surfaced to user        │
//! │       │                                                                 │
//! │       └── second scan while busy ──► SCAN_BUSY (no interaction with    │
//! │                                      the in-flight request)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the only error class that reaches the user. Everything the
//! engine itself tolerates (bad text, odd amounts) is recovered silently
//! upstream.

use tauri::State;
use tracing::{debug, info};

use crate::commands::bill::BillResponse;
use crate::error::ApiError;
use crate::state::{ScannerState, SessionState};
use tabsplit_scan::EncodedImage;

/// Scans a receipt image and ingests the extracted totals.
///
/// ## Arguments
/// * `image_base64` - Base64 image bytes (no data-URL prefix)
/// * `mime_type` - Image mime type; defaults to `image/jpeg`, which is
///   what the canvas/file input produces
///
/// ## Returns
/// The updated bill snapshot: bill and tax overwritten from the scan,
/// line items stored for display, totals recomputed.
///
/// ## Failure Semantics
/// On any failure the session is left untouched; the caller may retry by
/// simply invoking the command again. A scan already in flight is
/// rejected with `SCAN_BUSY` (the upload control is disabled while busy,
/// so this is belt-and-braces for double-submits).
#[tauri::command]
pub async fn scan_receipt(
    session: State<'_, SessionState>,
    scanner: State<'_, ScannerState>,
    image_base64: String,
    mime_type: Option<String>,
) -> Result<BillResponse, ApiError> {
    debug!(
        bytes = image_base64.len(),
        mime = mime_type.as_deref().unwrap_or("image/jpeg"),
        "scan_receipt command"
    );

    let client = scanner.scanner().ok_or_else(ApiError::scanner_unavailable)?;

    if !scanner.try_begin() {
        return Err(ApiError::scan_busy());
    }

    let image = match mime_type {
        Some(mime_type) => EncodedImage {
            mime_type,
            data: image_base64,
        },
        None => EncodedImage::jpeg(image_base64),
    };

    // The busy flag must drop on every path out of this await.
    let result = client.parse_receipt(&image).await;
    scanner.finish();

    let summary = result?;
    info!(
        total_cents = summary.total_cents,
        tax_cents = ?summary.tax_cents,
        "receipt scanned; ingesting"
    );

    Ok(session.with_session_mut(|s| {
        s.ingest(&summary);
        BillResponse::from(&*s)
    }))
}

//! # tabsplit-scan: Receipt-Scanning Collaborator Client
//!
//! Thin client for the external image-understanding service. The engine
//! treats the service as opaque: an encoded image goes in, a
//! [`tabsplit_core::ReceiptSummary`] or a failure comes out. No retries,
//! no streaming, no cancellation.
//!
//! ## Call Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Scan Flow                                   │
//! │                                                                         │
//! │  EncodedImage (base64 + mime)                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  POST {base_url}/models/{model}:generateContent                         │
//! │    parts: [ inlineData(image), extraction prompt ]                      │
//! │    generationConfig: responseMimeType=application/json                  │
//! │                      responseSchema (total+tax required)                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  candidates[0].content.parts[0].text  ──► JSON ──► ReceiptSummary       │
//! │                                                                         │
//! │  Any failure (transport, status, empty, malformed) is a single          │
//! │  ScanError; the caller leaves the bill state untouched and may          │
//! │  simply retry with a fresh invocation.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{EncodedImage, ReceiptScanner};
pub use config::ScanConfig;
pub use error::ScanError;

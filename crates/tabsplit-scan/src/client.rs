//! # Receipt Scanner Client
//!
//! Wraps the single HTTP call to the image-understanding service. The
//! request pins the reply to JSON with a response schema so the answer is
//! machine-parseable; the reply's text part is then decoded into a
//! [`ReceiptSummary`].
//!
//! ## Wire vs Domain Units
//! The service speaks decimal currency (`118.0`), the domain speaks
//! integer cents (`11800`). The conversion happens exactly once, here, at
//! the boundary; nothing past this module touches a float.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use tabsplit_core::{ReceiptItem, ReceiptSummary};

use crate::config::{ScanConfig, CONNECT_TIMEOUT};
use crate::error::ScanError;

/// Extraction prompt sent alongside the image.
const EXTRACTION_PROMPT: &str = "Analyze this receipt image.\n\
    Extract the following information:\n\
    1. The subtotal amount (before tax).\n\
    2. The tax amount.\n\
    3. The total amount.\n\
    4. A list of items purchased with their prices.\n\n\
    If the subtotal is not explicitly listed, calculate it from the total - tax.\n\
    Return the response in JSON format.";

/// How much of an error body to keep in a surfaced message.
const MAX_ERROR_BODY: usize = 300;

// =============================================================================
// Encoded Image
// =============================================================================

/// An image payload ready for the collaborator: base64 data plus its mime
/// type. The shell hands this through verbatim from the upload control.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// Mime type, e.g. `image/jpeg` or `image/png`.
    pub mime_type: String,

    /// Base64-encoded image bytes (no data-URL prefix).
    pub data: String,
}

impl EncodedImage {
    /// Convenience constructor for the common JPEG case.
    pub fn jpeg(data: impl Into<String>) -> Self {
        EncodedImage {
            mime_type: "image/jpeg".to_string(),
            data: data.into(),
        }
    }
}

// =============================================================================
// Wire Format
// =============================================================================

/// The JSON shape the response schema asks the service for. Only `total`
/// is required; everything else is best-effort.
#[derive(Debug, Deserialize)]
struct WireReceipt {
    total: f64,
    #[serde(default)]
    tax: Option<f64>,
    #[serde(default)]
    subtotal: Option<f64>,
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    items: Option<Vec<WireItem>>,
}

#[derive(Debug, Deserialize)]
struct WireItem {
    name: String,
    price: f64,
}

/// Converts a wire decimal amount to integer cents, rounding to the
/// nearest cent. The one float-to-int crossing in the system.
fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

impl From<WireReceipt> for ReceiptSummary {
    fn from(wire: WireReceipt) -> Self {
        ReceiptSummary {
            total_cents: to_cents(wire.total),
            tax_cents: wire.tax.map(to_cents),
            subtotal_cents: wire.subtotal.map(to_cents),
            currency: wire.currency,
            items: wire.items.map(|items| {
                items
                    .into_iter()
                    .map(|i| ReceiptItem {
                        name: i.name,
                        price_cents: to_cents(i.price),
                    })
                    .collect()
            }),
        }
    }
}

// =============================================================================
// Scanner Client
// =============================================================================

/// Client for the receipt-scanning collaborator.
///
/// One instance lives for the whole session; the underlying `reqwest`
/// client pools connections internally.
#[derive(Debug)]
pub struct ReceiptScanner {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl ReceiptScanner {
    /// Builds a scanner from configuration.
    ///
    /// Fails with [`ScanError::MissingApiKey`] when no key is configured;
    /// the shell treats that as "scanner unavailable" rather than a fatal
    /// startup error.
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        let api_key = config.api_key.ok_or(ScanError::MissingApiKey)?;

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout)
            .build()?;

        Ok(ReceiptScanner {
            client,
            base_url: config.base_url,
            model: config.model,
            api_key,
        })
    }

    /// Sends the image to the collaborator and returns the extracted
    /// receipt summary.
    ///
    /// ## Failure Semantics
    /// Fire-and-forget from the engine's perspective: one response or one
    /// failure, no partial results, no retry policy here. The caller
    /// leaves the bill state untouched on failure.
    pub async fn parse_receipt(&self, image: &EncodedImage) -> Result<ReceiptSummary, ScanError> {
        let url = self.endpoint();
        debug!(model = %self.model, "sending receipt image to scanner service");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(image))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut message = response.text().await.unwrap_or_default();
            message.truncate(MAX_ERROR_BODY);
            warn!(status = status.as_u16(), "scanner service rejected request");
            return Err(ScanError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: Value = response.json().await?;
        let text = Self::extract_text(&body).ok_or(ScanError::EmptyResponse)?;

        let summary = Self::summary_from_text(text)?;
        debug!(
            total_cents = summary.total_cents,
            tax_cents = ?summary.tax_cents,
            items = summary.items.as_ref().map(|i| i.len()).unwrap_or(0),
            "receipt parsed"
        );
        Ok(summary)
    }

    /// `{base}/models/{model}:generateContent`
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Builds the generateContent request: image part, prompt part, and a
    /// generation config that pins the reply to schema-constrained JSON.
    fn request_body(image: &EncodedImage) -> Value {
        json!({
            "contents": {
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": image.mime_type,
                            "data": image.data,
                        }
                    },
                    { "text": EXTRACTION_PROMPT },
                ]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "subtotal": { "type": "NUMBER" },
                        "tax": { "type": "NUMBER" },
                        "total": { "type": "NUMBER" },
                        "currency": { "type": "STRING" },
                        "items": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "price": { "type": "NUMBER" },
                                },
                            },
                        },
                    },
                    "required": ["total", "tax"],
                },
            },
        })
    }

    /// Pulls the text of the first candidate part out of a
    /// generateContent response, if any.
    fn extract_text(body: &Value) -> Option<&str> {
        body.get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()
            .filter(|t| !t.trim().is_empty())
    }

    /// Decodes the schema-constrained JSON text into a domain summary.
    fn summary_from_text(text: &str) -> Result<ReceiptSummary, ScanError> {
        let wire: WireReceipt = serde_json::from_str(text)?;
        Ok(wire.into())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_disables_scanner() {
        let config = ScanConfig::default();
        assert!(matches!(
            ReceiptScanner::new(config),
            Err(ScanError::MissingApiKey)
        ));
    }

    #[test]
    fn test_endpoint_shape() {
        let mut config = ScanConfig::default();
        config.api_key = Some("k".to_string());
        config.base_url = "https://example.test/v1beta/".to_string();
        let scanner = ReceiptScanner::new(config).unwrap();

        assert_eq!(
            scanner.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let image = EncodedImage::jpeg("QUJD");
        let body = ReceiptScanner::request_body(&image);

        let parts = &body["contents"]["parts"];
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[0]["inlineData"]["data"], "QUJD");
        assert!(parts[1]["text"].as_str().unwrap().contains("receipt"));

        let gen = &body["generationConfig"];
        assert_eq!(gen["responseMimeType"], "application/json");
        assert_eq!(gen["responseSchema"]["required"][0], "total");
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(118.0), 11800);
        assert_eq!(to_cents(0.1), 10);
        // Binary float noise rounds away cleanly
        assert_eq!(to_cents(14.49), 1449);
        assert_eq!(to_cents(0.0), 0);
    }

    #[test]
    fn test_summary_from_text_full() {
        let text = r#"{
            "subtotal": 100.0,
            "tax": 18.0,
            "total": 118.0,
            "currency": "USD",
            "items": [
                {"name": "Pad Thai", "price": 14.5},
                {"name": "Green Curry", "price": 16.5}
            ]
        }"#;

        let summary = ReceiptScanner::summary_from_text(text).unwrap();
        assert_eq!(summary.total_cents, 11800);
        assert_eq!(summary.tax_cents, Some(1800));
        assert_eq!(summary.subtotal_cents, Some(10000));
        assert_eq!(summary.currency.as_deref(), Some("USD"));

        let items = summary.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Pad Thai");
        assert_eq!(items[0].price_cents, 1450);
    }

    #[test]
    fn test_summary_from_text_minimal() {
        // Only total is required by the schema
        let summary = ReceiptScanner::summary_from_text(r#"{"total": 42.0}"#).unwrap();
        assert_eq!(summary.total_cents, 4200);
        assert_eq!(summary.tax_cents, None);
        assert!(summary.items.is_none());
    }

    #[test]
    fn test_summary_from_text_malformed() {
        assert!(matches!(
            ReceiptScanner::summary_from_text("not json at all"),
            Err(ScanError::Malformed(_))
        ));
        // Missing the required total
        assert!(matches!(
            ReceiptScanner::summary_from_text(r#"{"tax": 1.0}"#),
            Err(ScanError::Malformed(_))
        ));
    }

    #[test]
    fn test_extract_text() {
        let body = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "{\"total\": 1.0}"}]
                }
            }]
        });
        assert_eq!(
            ReceiptScanner::extract_text(&body),
            Some("{\"total\": 1.0}")
        );

        // No candidates, or blank text, is an empty response
        assert_eq!(ReceiptScanner::extract_text(&json!({})), None);
        let blank = json!({
            "candidates": [{"content": {"parts": [{"text": "   "}]}}]
        });
        assert_eq!(ReceiptScanner::extract_text(&blank), None);
    }
}

//! # Domain Types
//!
//! Core domain types used throughout TabSplit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐   ┌─────────────────┐   │
//! │  │    TipType      │   │   ReceiptSummary    │   │  ReceiptItem    │   │
//! │  │  ─────────────  │   │  ─────────────────  │   │  ─────────────  │   │
//! │  │  Percentage     │   │  total_cents        │   │  name           │   │
//! │  │  Fixed          │   │  tax_cents?         │   │  price_cents    │   │
//! │  └─────────────────┘   │  subtotal_cents?    │   └─────────────────┘   │
//! │                        │  currency?          │                         │
//! │                        │  items?             │                         │
//! │                        └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `BillState` itself lives in [`crate::bill`] next to the engine that
//! computes over it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tip Type
// =============================================================================

/// How the tip value is interpreted.
///
/// ## Unit Reinterpretation
/// Switching the type keeps the raw numeric value as-is, which changes its
/// unit of meaning: "18" flips between 18% and $18.00. The user's input is
/// never silently reset, and the reinterpretation is exact because both
/// units are stored as hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TipType {
    /// Tip is a percentage of the tip base (subtotal or total, per policy).
    Percentage,
    /// Tip is a flat currency amount; the tip base is irrelevant.
    Fixed,
}

impl Default for TipType {
    fn default() -> Self {
        TipType::Percentage
    }
}

// =============================================================================
// Receipt Summary
// =============================================================================

/// A line item extracted from a scanned receipt.
///
/// Display-only: items never feed back into the totals calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// Item name as printed on the receipt.
    pub name: String,

    /// Item price in cents.
    pub price_cents: i64,
}

/// Structured extraction produced by the external image-understanding
/// collaborator.
///
/// The engine treats this as opaque input: whatever numbers come back are
/// fed directly into the bill state. Only `total` is guaranteed by the
/// collaborator's response schema; everything else is best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSummary {
    /// The grand total printed on the receipt, in cents.
    pub total_cents: i64,

    /// Tax portion in cents. Missing is treated as zero at ingestion.
    pub tax_cents: Option<i64>,

    /// Subtotal in cents. Ignored by ingestion: the engine re-derives an
    /// effective subtotal (`bill - tax`) rather than trusting the scanner.
    pub subtotal_cents: Option<i64>,

    /// Currency code, if the scanner could tell.
    pub currency: Option<String>,

    /// Extracted line items, for display only.
    pub items: Option<Vec<ReceiptItem>>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_type_default() {
        assert_eq!(TipType::default(), TipType::Percentage);
    }

    #[test]
    fn test_tip_type_serde_wire_names() {
        assert_eq!(
            serde_json::to_string(&TipType::Percentage).unwrap(),
            "\"percentage\""
        );
        assert_eq!(serde_json::to_string(&TipType::Fixed).unwrap(), "\"fixed\"");
    }

    #[test]
    fn test_receipt_summary_serde_round() {
        let summary = ReceiptSummary {
            total_cents: 11800,
            tax_cents: Some(1800),
            subtotal_cents: Some(10000),
            currency: Some("USD".to_string()),
            items: Some(vec![ReceiptItem {
                name: "Pad Thai".to_string(),
                price_cents: 1450,
            }]),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"totalCents\":11800"));

        let back: ReceiptSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}

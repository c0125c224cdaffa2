//! # Bill Calculation Engine
//!
//! The one component with real design content: a pure mapping from
//! [`BillState`] to derived financial results, plus the typed update rules
//! that keep the input valid.
//!
//! ## Engine Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Calculation Engine                              │
//! │                                                                         │
//! │  User Input              Reducer                   Derived Results      │
//! │  ──────────              ───────                   ───────────────      │
//! │                                                                         │
//! │  "118.00" ─────────────► SetBillAmount ──┐                              │
//! │  "18.00" ──────────────► SetTaxAmount ───┤                              │
//! │  18% / $7 ─────────────► SetTipValue ────┼─► BillState ─► totals()      │
//! │  [-] [+] ──────────────► Inc/DecSplit ───┤       │                      │
//! │  policy toggle ────────► ToggleTaxInTip ─┘       ▼                      │
//! │                                            ┌───────────────┐           │
//! │  Scanned receipt ──────► ingest_receipt ──►│  BillTotals   │           │
//! │                                            │  tip           │           │
//! │                                            │  grand total   │           │
//! │                                            │  per person    │           │
//! │                                            └───────────────┘           │
//! │                                                                         │
//! │  PURE: totals() has no side effects and no hidden state.               │
//! │  TOTAL: no input makes it panic; bad text becomes zero upstream.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reducer Contract
//! State is a single owned value passed through explicit, strongly-typed
//! update operations (`(state, action) -> state`), never ambient shared
//! state. There is one action per semantic operation; no generic
//! field-name-keyed setter exists.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{ReceiptSummary, TipType};
use crate::{DEFAULT_SPLIT_COUNT, DEFAULT_TIP_BPS, MIN_SPLIT_COUNT};

// =============================================================================
// Bill State
// =============================================================================

/// The complete input state of the calculator. One value exists per
/// session; it is mutated in place through [`BillState::apply`] and reset
/// to defaults on explicit reset.
///
/// ## Invariants (intended, not all enforced)
/// - `bill_cents`, `tax_cents` non-negative: hinted by the UI widgets, not
///   re-validated here (the engine is deliberately permissive; the advisory
///   layer in [`crate::validation`] reports violations)
/// - `split_count >= 1`: enforced by the decrement clamp
/// - `0 <= tax_cents <= bill_cents`: intended, NOT clamped (see
///   `validation::check_tax_breakdown`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillState {
    /// The grand total printed on the receipt, in cents. Assumed to
    /// already include tax.
    pub bill_cents: i64,

    /// Portion of `bill_cents` attributable to tax, in cents.
    pub tax_cents: i64,

    /// How `tip_value` is interpreted.
    pub tip_type: TipType,

    /// Raw tip value in hundredths: basis points when `Percentage`
    /// (1800 = 18%), cents when `Fixed` (1800 = $18.00). The shared unit
    /// makes the tip-type toggle an exact reinterpretation.
    pub tip_value: i64,

    /// Number of people sharing the bill. Clamped to a floor of 1 by the
    /// decrement action; incrementing has no ceiling.
    pub split_count: i64,

    /// Policy switch: whether the tax portion is included in the base used
    /// to compute a percentage tip.
    pub include_tax_in_tip: bool,
}

impl Default for BillState {
    /// Session defaults: empty bill, 18% tip, two people, tip on subtotal.
    fn default() -> Self {
        BillState {
            bill_cents: 0,
            tax_cents: 0,
            tip_type: TipType::Percentage,
            tip_value: DEFAULT_TIP_BPS,
            split_count: DEFAULT_SPLIT_COUNT,
            include_tax_in_tip: false,
        }
    }
}

// =============================================================================
// Bill Actions (Reducer Input)
// =============================================================================

/// The closed set of update operations on [`BillState`].
///
/// Numeric actions carry the raw text the user typed; the parse-or-zero
/// recovery rule lives inside the engine so every caller gets identical
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum BillAction {
    /// Set the bill total from raw decimal text. Unparseable input becomes 0.
    SetBillAmount(String),
    /// Set the tax amount from raw decimal text. Unparseable input becomes 0.
    SetTaxAmount(String),
    /// Switch how the tip value is interpreted. The raw value is kept as-is.
    SetTipType(TipType),
    /// Set the tip value (percent or dollars, per the current tip type)
    /// from raw decimal text. Unparseable input becomes 0.
    SetTipValue(String),
    /// One more person shares the bill. No ceiling.
    IncrementSplit,
    /// One fewer person shares the bill. Clamps at 1.
    DecrementSplit,
    /// Flip whether tax joins the percentage tip base.
    ToggleTaxInTip,
    /// Replace the whole state with the documented defaults.
    Reset,
}

// =============================================================================
// Derived Results
// =============================================================================

/// The derived financial results for a [`BillState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    /// The computed tip, in cents.
    pub tip_cents: i64,

    /// Bill plus tip, in cents. The bill already includes tax; tax is
    /// never added a second time.
    pub grand_total_cents: i64,

    /// Each person's truncated share of the grand total, in cents.
    pub per_person_cents: i64,

    /// Cents left over after the truncating split
    /// (`per_person × split + remainder = grand_total`).
    pub remainder_cents: i64,
}

// =============================================================================
// Engine
// =============================================================================

impl BillState {
    /// Returns the bill amount as Money.
    #[inline]
    pub fn bill(&self) -> Money {
        Money::from_cents(self.bill_cents)
    }

    /// Returns the tax amount as Money.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_cents(self.tax_cents)
    }

    /// The monetary amount a percentage tip is calculated against.
    ///
    /// If tax is excluded from the tip base and a tax amount is known,
    /// the base is the effective subtotal `max(0, bill - tax)`; otherwise
    /// it is the full bill. Fixed tips never consult the base.
    pub fn tip_base(&self) -> Money {
        if !self.include_tax_in_tip && self.tax_cents > 0 {
            self.bill().sub_floor_zero(self.tax())
        } else {
            self.bill()
        }
    }

    /// Computes the derived results. Pure and total: same state always
    /// yields the same totals, and no state makes it fail.
    ///
    /// ## Algorithm
    /// 1. Tip base per [`BillState::tip_base`]
    /// 2. Tip: percentage of the base, or the fixed amount verbatim
    /// 3. Grand total: bill + tip
    /// 4. Per person: grand total split evenly; the `split_count = 0`
    ///    guard is unreachable given the decrement clamp but kept as a
    ///    defensive invariant
    pub fn totals(&self) -> BillTotals {
        let tip = match self.tip_type {
            TipType::Percentage => self.tip_base().percent_bps(self.tip_value),
            TipType::Fixed => Money::from_cents(self.tip_value),
        };

        let grand_total = self.bill() + tip;
        let per_person = grand_total.split_evenly(self.split_count);
        let remainder = grand_total.split_remainder(self.split_count);

        BillTotals {
            tip_cents: tip.cents(),
            grand_total_cents: grand_total.cents(),
            per_person_cents: per_person.cents(),
            remainder_cents: remainder.cents(),
        }
    }

    /// Applies one update action (the reducer).
    ///
    /// Numeric text that fails to parse is substituted with zero, never
    /// rejected and never surfaced; see the parse rules on
    /// [`Money::parse_decimal`].
    pub fn apply(&mut self, action: BillAction) {
        match action {
            BillAction::SetBillAmount(raw) => {
                self.bill_cents = Money::parse_decimal(&raw).unwrap_or_default().cents();
            }
            BillAction::SetTaxAmount(raw) => {
                self.tax_cents = Money::parse_decimal(&raw).unwrap_or_default().cents();
            }
            BillAction::SetTipType(tip_type) => {
                // Deliberately no side effect on tip_value: "18" flips
                // between 18% and $18.00.
                self.tip_type = tip_type;
            }
            BillAction::SetTipValue(raw) => {
                self.tip_value = Money::parse_decimal(&raw).unwrap_or_default().cents();
            }
            BillAction::IncrementSplit => {
                self.split_count += 1;
            }
            BillAction::DecrementSplit => {
                self.split_count = (self.split_count - 1).max(MIN_SPLIT_COUNT);
            }
            BillAction::ToggleTaxInTip => {
                self.include_tax_in_tip = !self.include_tax_in_tip;
            }
            BillAction::Reset => {
                *self = BillState::default();
            }
        }
    }

    /// Overwrites the bill and tax amounts from a scanned receipt.
    ///
    /// `subtotal` is ignored: the engine re-derives the effective subtotal
    /// via [`BillState::tip_base`] rather than trusting the scanner. Line
    /// items are display-only and are stored by the session layer, not
    /// here.
    pub fn ingest_receipt(&mut self, summary: &ReceiptSummary) {
        self.bill_cents = summary.total_cents;
        self.tax_cents = summary.tax_cents.unwrap_or(0);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReceiptItem;

    fn state(bill: i64, tax: i64, tip_type: TipType, tip_value: i64, split: i64) -> BillState {
        BillState {
            bill_cents: bill,
            tax_cents: tax,
            tip_type,
            tip_value,
            split_count: split,
            include_tax_in_tip: false,
        }
    }

    #[test]
    fn test_defaults() {
        let s = BillState::default();
        assert_eq!(s.bill_cents, 0);
        assert_eq!(s.tax_cents, 0);
        assert_eq!(s.tip_type, TipType::Percentage);
        assert_eq!(s.tip_value, 1800); // 18%
        assert_eq!(s.split_count, 2);
        assert!(!s.include_tax_in_tip);
    }

    /// The full worked scenario: $118.00 bill, $18.00 tax, 18% tip on the
    /// subtotal, four people.
    #[test]
    fn test_scenario_four_way_split() {
        let s = state(11800, 1800, TipType::Percentage, 1800, 4);

        assert_eq!(s.tip_base().cents(), 10000); // $100.00

        let t = s.totals();
        assert_eq!(t.tip_cents, 1800); // $18.00
        assert_eq!(t.grand_total_cents, 13600); // $136.00
        assert_eq!(t.per_person_cents, 3400); // $34.00
        assert_eq!(t.remainder_cents, 0);
    }

    #[test]
    fn test_tax_inclusion_switch() {
        // bill $100.00, tax $10.00, 20% tip
        let mut s = state(10000, 1000, TipType::Percentage, 2000, 2);

        // Excluded: base is the subtotal
        assert_eq!(s.tip_base().cents(), 9000);
        assert_eq!(s.totals().tip_cents, 1800); // $18.00

        // Included: base is the full total
        s.include_tax_in_tip = true;
        assert_eq!(s.tip_base().cents(), 10000);
        assert_eq!(s.totals().tip_cents, 2000); // $20.00
    }

    #[test]
    fn test_zero_tax_means_full_bill_base() {
        // With no tax entered, the policy switch is irrelevant
        let s = state(10000, 0, TipType::Percentage, 2000, 2);
        assert_eq!(s.tip_base().cents(), 10000);
    }

    #[test]
    fn test_fixed_tip_ignores_tax_policy() {
        // bill $50.00, tax $5.00, fixed $7 tip
        let mut s = state(5000, 500, TipType::Fixed, 700, 1);

        let t = s.totals();
        assert_eq!(t.tip_cents, 700);
        assert_eq!(t.grand_total_cents, 5700); // $57.00

        s.include_tax_in_tip = true;
        let t = s.totals();
        assert_eq!(t.tip_cents, 700);
        assert_eq!(t.grand_total_cents, 5700);
    }

    #[test]
    fn test_zero_bill_boundary() {
        // Percentage tip on nothing is nothing
        let s = state(0, 0, TipType::Percentage, 2500, 3);
        let t = s.totals();
        assert_eq!(t.tip_cents, 0);
        assert_eq!(t.grand_total_cents, 0);
        assert_eq!(t.per_person_cents, 0);

        // A fixed tip still applies on a zero bill; it never consults the base
        let s = state(0, 0, TipType::Fixed, 700, 1);
        let t = s.totals();
        assert_eq!(t.tip_cents, 700);
        assert_eq!(t.grand_total_cents, 700);
    }

    #[test]
    fn test_tax_exceeding_bill_floors_base_at_zero() {
        let s = state(1000, 1500, TipType::Percentage, 2000, 2);
        assert_eq!(s.tip_base(), Money::zero());
        assert_eq!(s.totals().tip_cents, 0);
    }

    /// Pure function: calling totals twice yields identical results.
    #[test]
    fn test_totals_idempotent() {
        let s = state(11800, 1800, TipType::Percentage, 1800, 4);
        assert_eq!(s.totals(), s.totals());
    }

    /// Conservation across the whole declared domain sample:
    /// per_person × split + remainder == grand_total, per_person >= 0.
    #[test]
    fn test_split_conservation() {
        for bill in [0, 1, 999, 10000, 13601] {
            for split in 1..=7 {
                let s = state(bill, 0, TipType::Percentage, 1800, split);
                let t = s.totals();
                assert!(t.per_person_cents >= 0);
                assert_eq!(
                    t.per_person_cents * split + t.remainder_cents,
                    t.grand_total_cents
                );
            }
        }
    }

    #[test]
    fn test_apply_set_amounts() {
        let mut s = BillState::default();
        s.apply(BillAction::SetBillAmount("118.00".to_string()));
        s.apply(BillAction::SetTaxAmount("18".to_string()));
        assert_eq!(s.bill_cents, 11800);
        assert_eq!(s.tax_cents, 1800);
    }

    /// Parse failure recovers to zero, not to the previous value.
    #[test]
    fn test_apply_parse_failure_substitutes_zero() {
        let mut s = BillState::default();
        s.apply(BillAction::SetBillAmount("118.00".to_string()));
        assert_eq!(s.bill_cents, 11800);

        s.apply(BillAction::SetBillAmount("not a number".to_string()));
        assert_eq!(s.bill_cents, 0);
    }

    /// The engine does not block negative input; the UI widget minimum is
    /// a hint, not an invariant. (Open question noted in DESIGN.md: the
    /// engine stays permissive; the advisory validation layer reports it.)
    #[test]
    fn test_apply_negative_input_permitted() {
        let mut s = BillState::default();
        s.apply(BillAction::SetBillAmount("-5.00".to_string()));
        assert_eq!(s.bill_cents, -500);
    }

    #[test]
    fn test_split_clamp() {
        let mut s = BillState::default();
        s.apply(BillAction::DecrementSplit); // 2 -> 1
        assert_eq!(s.split_count, 1);

        // Repeated decrements never go below 1
        for _ in 0..5 {
            s.apply(BillAction::DecrementSplit);
            assert_eq!(s.split_count, 1);
        }

        s.apply(BillAction::IncrementSplit);
        assert_eq!(s.split_count, 2);
    }

    /// Toggling the tip type keeps the raw value: 18% becomes $18.00.
    /// Intentional, not a bug to fix.
    #[test]
    fn test_tip_type_toggle_preserves_raw_value() {
        let mut s = BillState::default();
        assert_eq!(s.tip_value, 1800);

        s.apply(BillAction::SetTipType(TipType::Fixed));
        assert_eq!(s.tip_value, 1800); // now $18.00

        let s2 = state(10000, 0, TipType::Fixed, 1800, 1);
        assert_eq!(s2.totals().tip_cents, 1800);
    }

    #[test]
    fn test_toggle_tax_in_tip() {
        let mut s = BillState::default();
        s.apply(BillAction::ToggleTaxInTip);
        assert!(s.include_tax_in_tip);
        s.apply(BillAction::ToggleTaxInTip);
        assert!(!s.include_tax_in_tip);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut s = state(11800, 1800, TipType::Fixed, 700, 6);
        s.include_tax_in_tip = true;

        s.apply(BillAction::Reset);
        assert_eq!(s, BillState::default());
    }

    #[test]
    fn test_ingest_receipt() {
        let mut s = BillState::default();
        let summary = ReceiptSummary {
            total_cents: 11800,
            tax_cents: Some(1800),
            subtotal_cents: Some(99999), // deliberately wrong: must be ignored
            currency: Some("USD".to_string()),
            items: Some(vec![ReceiptItem {
                name: "Green Curry".to_string(),
                price_cents: 1650,
            }]),
        };

        s.ingest_receipt(&summary);
        assert_eq!(s.bill_cents, 11800);
        assert_eq!(s.tax_cents, 1800);
        // Effective subtotal is re-derived, not taken from the scanner
        assert_eq!(s.tip_base().cents(), 10000);
    }

    #[test]
    fn test_ingest_receipt_missing_tax_is_zero() {
        let mut s = BillState::default();
        s.tax_cents = 555;

        let summary = ReceiptSummary {
            total_cents: 4200,
            tax_cents: None,
            subtotal_cents: None,
            currency: None,
            items: None,
        };

        s.ingest_receipt(&summary);
        assert_eq!(s.bill_cents, 4200);
        assert_eq!(s.tax_cents, 0);
    }
}

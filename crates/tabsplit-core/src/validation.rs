//! # Validation Module
//!
//! Advisory input validation for TabSplit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (widget hints)                                      │
//! │  ├── number inputs with min=0, tip slider capped at 50%                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Engine (tabsplit-core)                                       │
//! │  ├── parse-or-zero recovery, split clamp, division guard               │
//! │  └── deliberately PERMISSIVE beyond that                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE (advisory)                                       │
//! │  └── reports suspicious-but-tolerated input; the command layer logs    │
//! │      the finding and applies the input anyway                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split between layers 2 and 3 is a recorded design decision: the
//! engine never clamps `tax <= bill` nor rejects negative numbers; the
//! user's input always stands. These checks exist so the shell can at
//! least observe the violations.

use crate::bill::BillState;
use crate::error::{ValidationError, ValidationResult};
use crate::types::TipType;
use crate::MAX_TIP_BPS;

/// Checks the intended invariant `0 <= tax <= bill`.
///
/// ## Example
/// ```rust
/// use tabsplit_core::bill::BillState;
/// use tabsplit_core::validation::check_tax_breakdown;
///
/// let mut state = BillState::default();
/// state.bill_cents = 1000;
/// state.tax_cents = 1500;
/// assert!(check_tax_breakdown(&state).is_err());
/// ```
pub fn check_tax_breakdown(state: &BillState) -> ValidationResult {
    if state.bill_cents < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "billAmount".to_string(),
            cents: state.bill_cents,
        });
    }

    if state.tax_cents < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "taxAmount".to_string(),
            cents: state.tax_cents,
        });
    }

    if state.tax_cents > state.bill_cents {
        return Err(ValidationError::TaxExceedsBill {
            tax_cents: state.tax_cents,
            bill_cents: state.bill_cents,
        });
    }

    Ok(())
}

/// Checks the tip value against what the UI offers.
///
/// A negative tip is reported for either type; a percentage above the 50%
/// slider cap is reported too. Fixed tips have no upper bound.
pub fn check_tip_value(state: &BillState) -> ValidationResult {
    if state.tip_value < 0 {
        return Err(ValidationError::NegativeAmount {
            field: "tipValue".to_string(),
            cents: state.tip_value,
        });
    }

    if state.tip_type == TipType::Percentage && state.tip_value > MAX_TIP_BPS {
        return Err(ValidationError::TipAboveSliderRange {
            bps: state.tip_value,
            max_bps: MAX_TIP_BPS,
        });
    }

    Ok(())
}

/// Runs every advisory check, returning the first finding.
pub fn check_state(state: &BillState) -> ValidationResult {
    check_tax_breakdown(state)?;
    check_tip_value(state)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_clean() {
        assert!(check_state(&BillState::default()).is_ok());
    }

    #[test]
    fn test_tax_within_bill_is_ok() {
        let mut s = BillState::default();
        s.bill_cents = 11800;
        s.tax_cents = 1800;
        assert!(check_tax_breakdown(&s).is_ok());

        // Boundary: tax == bill is still within the intended invariant
        s.tax_cents = 11800;
        assert!(check_tax_breakdown(&s).is_ok());
    }

    /// Ambiguity note: the engine deliberately never clamps tax to the
    /// bill; this check merely reports the violation.
    #[test]
    fn test_tax_exceeding_bill_is_reported_not_rejected() {
        let mut s = BillState::default();
        s.bill_cents = 1000;
        s.tax_cents = 1500;

        assert!(matches!(
            check_tax_breakdown(&s),
            Err(ValidationError::TaxExceedsBill { .. })
        ));

        // The engine still computes over the same state without complaint
        let t = s.totals();
        assert_eq!(t.tip_cents, 0); // base floored at zero
    }

    #[test]
    fn test_negative_amounts_reported() {
        let mut s = BillState::default();
        s.bill_cents = -500;
        assert!(matches!(
            check_tax_breakdown(&s),
            Err(ValidationError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_tip_above_slider_reported() {
        let mut s = BillState::default();
        s.tip_value = 7500; // 75%
        assert!(matches!(
            check_tip_value(&s),
            Err(ValidationError::TipAboveSliderRange { .. })
        ));

        // A fixed $75.00 tip is fine
        s.tip_type = TipType::Fixed;
        assert!(check_tip_value(&s).is_ok());
    }
}

//! # Error Types
//!
//! Domain-specific error types for tabsplit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tabsplit-core errors (this file)                                      │
//! │  └── ValidationError  - Advisory input checks                          │
//! │                                                                         │
//! │  tabsplit-scan errors (separate crate)                                 │
//! │  └── ScanError        - Collaborator call failures                     │
//! │                                                                         │
//! │  Tauri API errors (in app)                                             │
//! │  └── ApiError         - What frontend sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError ──► log only                                     │
//! │        ScanError ───────► ApiError ──► Frontend                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The calculation engine itself has NO error type: it is total over its
//! declared domain. Parse failures are recovered by substituting zero, the
//! division guard returns zero, and nothing in the core can throw. The
//! validation errors below are advisory only; the engine stays
//! permissive and these checks report, not reject.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, fields)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Advisory input validation findings.
///
/// These describe input that the engine tolerates but that is almost
/// certainly a data-entry mistake. The command layer logs them; nothing
/// rejects the input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A monetary or numeric field went negative. The UI restricts the
    /// widget minimum to 0, but the engine does not re-validate.
    #[error("{field} is negative: {cents} cents")]
    NegativeAmount { field: String, cents: i64 },

    /// The tax entry exceeds the bill it is supposedly part of, which
    /// breaks the intended invariant `0 <= tax <= bill`.
    #[error("tax ({tax_cents} cents) exceeds bill ({bill_cents} cents)")]
    TaxExceedsBill { tax_cents: i64, bill_cents: i64 },

    /// A percentage tip beyond what the slider offers.
    #[error("tip rate {bps} bps is above the {max_bps} bps slider range")]
    TipAboveSliderRange { bps: i64, max_bps: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation checks.
pub type ValidationResult = Result<(), ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::TaxExceedsBill {
            tax_cents: 1500,
            bill_cents: 1000,
        };
        assert_eq!(
            err.to_string(),
            "tax (1500 cents) exceeds bill (1000 cents)"
        );

        let err = ValidationError::NegativeAmount {
            field: "billAmount".to_string(),
            cents: -500,
        };
        assert_eq!(err.to_string(), "billAmount is negative: -500 cents");
    }
}

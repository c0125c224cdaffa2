//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many bill splitters:                                                │
//! │    $10.00 / 3 = $3.33 (×3 = $9.99)  → Lost $0.01!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents / 3 = 333 cents (×3 = 999 cents)                         │
//! │    We KNOW we lost 1 cent, and expose it explicitly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tabsplit_core::money::Money;
//!
//! // Create from cents (preferred)
//! let bill = Money::from_cents(11800); // $118.00
//!
//! // Or from user-typed decimal text
//! let tax = Money::parse_decimal("18.00").unwrap_or_default();
//!
//! // 18% tip on the subtotal
//! let tip = (bill - tax).percent_bps(1800);
//! assert_eq!(tip.cents(), 1800);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: The engine is deliberately permissive about negative
///   input (the UI widget hints at min=0, the engine does not re-validate),
///   so the representation must carry the sign through faithfully
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  "118.00" typed ──► parse_decimal ──► BillState.bill_cents              │
/// │                                                                         │
/// │  Scanner total ──► ReceiptSummary.total_cents ──► BillState             │
/// │                                                                         │
/// │  tip base ──► percent_bps ──► tip ──► grand total ──► split_evenly      │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let bill = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(bill.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses user-typed decimal text ("118", "118.0", "118.005") into cents.
    ///
    /// ## Parsing Rules
    /// - Leading/trailing whitespace is ignored
    /// - One optional leading `-` or `+` sign
    /// - At most one `.`; both sides must be ASCII digits (either may be
    ///   empty, but not both: `".5"` and `"5."` parse, `"."` does not)
    /// - Fractional digits beyond the second round half-up to the cent
    /// - Anything else returns `None`
    ///
    /// The mutation rules upstream substitute zero for `None`; this function
    /// itself never substitutes, so callers can distinguish "typed 0" from
    /// "typed garbage" when they need to.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("118.00"), Some(Money::from_cents(11800)));
    /// assert_eq!(Money::parse_decimal("7"), Some(Money::from_cents(700)));
    /// assert_eq!(Money::parse_decimal("2.345"), Some(Money::from_cents(235)));
    /// assert_eq!(Money::parse_decimal("twelve"), None);
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }

        let (negative, rest) = if let Some(r) = s.strip_prefix('-') {
            (true, r)
        } else if let Some(r) = s.strip_prefix('+') {
            (false, r)
        } else {
            (false, s)
        };

        let (int_part, frac_part) = match rest.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rest, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let major: i64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().ok()?
        };

        // First two fractional digits are cents; the third rounds half-up.
        let mut frac = frac_part.bytes().map(|b| (b - b'0') as i64);
        let d1 = frac.next().unwrap_or(0);
        let d2 = frac.next().unwrap_or(0);
        let round_up = matches!(frac.next(), Some(d) if d >= 5);

        let cents = major
            .checked_mul(100)?
            .checked_add(d1 * 10 + d2 + i64::from(round_up))?;

        Some(Money(if negative { -cents } else { cents }))
    }

    /// Subtracts, flooring the result at zero.
    ///
    /// Used for the tip base: `max(0, bill - tax)`. A tax entry larger than
    /// the bill is bad input the engine tolerates, and the tip base must not
    /// go negative because of it.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let bill = Money::from_cents(1000);
    /// let tax = Money::from_cents(1500);
    /// assert_eq!(bill.sub_floor_zero(tax), Money::zero());
    /// ```
    #[inline]
    pub fn sub_floor_zero(&self, other: Money) -> Money {
        Money((self.0 - other.0).max(0))
    }

    /// Calculates a percentage of this amount, rate given in basis points.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  PERCENTAGE ROUNDING                                                │
    /// │                                                                     │
    /// │  Formula: amount_cents × bps / 10000, rounded to the nearest cent  │
    /// │  half away from zero.                                               │
    /// │                                                                     │
    /// │  $10.99 × 18%   = 197.82 cents → 198 ($1.98)                       │
    /// │  $10.00 × 8.25% =  82.5  cents →  83 ($0.83)                       │
    /// │                                                                     │
    /// │  i128 intermediate prevents overflow on absurd amounts.            │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The rate is `i64` rather than an unsigned type: the engine tolerates
    /// negative tip input the same way it tolerates negative amounts.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let base = Money::from_cents(10000); // $100.00
    /// assert_eq!(base.percent_bps(2000).cents(), 2000); // 20% = $20.00
    /// ```
    pub fn percent_bps(&self, bps: i64) -> Money {
        let product = self.0 as i128 * bps as i128;
        let rounded = if product >= 0 {
            (product + 5000) / 10000
        } else {
            (product - 5000) / 10000
        };
        Money(rounded as i64)
    }

    /// Divides this amount evenly between `shares` people, truncating
    /// toward zero.
    ///
    /// Returns zero for `shares <= 0`. In practice the split count is
    /// clamped to a minimum of 1 upstream, but the guard is kept as a
    /// defensive invariant.
    ///
    /// The truncated remainder is observable via [`Money::split_remainder`];
    /// `per_share × shares + remainder == total` always holds.
    ///
    /// ## Example
    /// ```rust
    /// use tabsplit_core::money::Money;
    ///
    /// let grand = Money::from_cents(13600); // $136.00
    /// assert_eq!(grand.split_evenly(4).cents(), 3400); // $34.00 each
    ///
    /// let awkward = Money::from_cents(1000); // $10.00 three ways
    /// assert_eq!(awkward.split_evenly(3).cents(), 333);
    /// assert_eq!(awkward.split_remainder(3).cents(), 1);
    /// ```
    #[inline]
    pub const fn split_evenly(&self, shares: i64) -> Money {
        if shares <= 0 {
            Money(0)
        } else {
            Money(self.0 / shares)
        }
    }

    /// Returns the cents left over after an even split (see
    /// [`Money::split_evenly`]).
    #[inline]
    pub const fn split_remainder(&self, shares: i64) -> Money {
        if shares <= 0 {
            Money(0)
        } else {
            Money(self.0 % shares)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The frontend formats currency itself
/// (two decimal places, `$` prefix) to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(Money::parse_decimal("118.00"), Some(Money::from_cents(11800)));
        assert_eq!(Money::parse_decimal("7"), Some(Money::from_cents(700)));
        assert_eq!(Money::parse_decimal("0.5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse_decimal(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse_decimal("5."), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_decimal("  12.34  "), Some(Money::from_cents(1234)));
    }

    #[test]
    fn test_parse_decimal_signs() {
        assert_eq!(Money::parse_decimal("-5.50"), Some(Money::from_cents(-550)));
        assert_eq!(Money::parse_decimal("+5.50"), Some(Money::from_cents(550)));
        assert_eq!(Money::parse_decimal("-+5"), None);
    }

    #[test]
    fn test_parse_decimal_rounds_third_digit() {
        assert_eq!(Money::parse_decimal("2.344"), Some(Money::from_cents(234)));
        assert_eq!(Money::parse_decimal("2.345"), Some(Money::from_cents(235)));
        // Digits past the third are ignored entirely
        assert_eq!(Money::parse_decimal("2.3449"), Some(Money::from_cents(234)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("."), None);
        assert_eq!(Money::parse_decimal("twelve"), None);
        assert_eq!(Money::parse_decimal("12a"), None);
        assert_eq!(Money::parse_decimal("1.2.3"), None);
        assert_eq!(Money::parse_decimal("1,200"), None);
    }

    #[test]
    fn test_sub_floor_zero() {
        let bill = Money::from_cents(10000);
        let tax = Money::from_cents(1000);
        assert_eq!(bill.sub_floor_zero(tax).cents(), 9000);

        // Tax larger than the bill floors at zero rather than going negative
        let over = Money::from_cents(15000);
        assert_eq!(bill.sub_floor_zero(over), Money::zero());
    }

    #[test]
    fn test_percent_bps_basic() {
        // $100.00 at 20% = $20.00
        assert_eq!(Money::from_cents(10000).percent_bps(2000).cents(), 2000);
        // $90.00 at 20% = $18.00
        assert_eq!(Money::from_cents(9000).percent_bps(2000).cents(), 1800);
    }

    #[test]
    fn test_percent_bps_rounding() {
        // $10.99 × 18% = 197.82 cents → $1.98
        assert_eq!(Money::from_cents(1099).percent_bps(1800).cents(), 198);
        // $10.00 × 8.25% = 82.5 cents → $0.83 (half away from zero)
        assert_eq!(Money::from_cents(1000).percent_bps(825).cents(), 83);
        // Negative base mirrors the rounding
        assert_eq!(Money::from_cents(-1000).percent_bps(825).cents(), -83);
    }

    #[test]
    fn test_split_evenly_exact() {
        let grand = Money::from_cents(13600);
        assert_eq!(grand.split_evenly(4).cents(), 3400);
        assert_eq!(grand.split_remainder(4).cents(), 0);
    }

    #[test]
    fn test_split_zero_shares_guard() {
        let grand = Money::from_cents(13600);
        assert_eq!(grand.split_evenly(0), Money::zero());
        assert_eq!(grand.split_remainder(0), Money::zero());
        assert_eq!(grand.split_evenly(-3), Money::zero());
    }

    /// Critical test: Verify that $10.00 / 3 × 3 behaves as expected
    /// This documents the intentional precision loss
    #[test]
    fn test_split_precision_loss_documented() {
        let ten_dollars = Money::from_cents(1000);
        let share = ten_dollars.split_evenly(3); // 333 cents
        let remainder = ten_dollars.split_remainder(3); // 1 cent

        assert_eq!(share.cents(), 333);
        assert_eq!(remainder.cents(), 1);

        // Conservation: shares plus remainder reconstruct the total
        assert_eq!(share.cents() * 3 + remainder.cents(), ten_dollars.cents());
    }
}

//! # tabsplit-core: Pure Business Logic for TabSplit
//!
//! This crate is the **heart** of TabSplit. It contains the bill calculation
//! engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TabSplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Scanner UI ──► Bill Inputs ──► Tip Picker ──► Results        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    set_bill_amount, set_tip_value, scan_receipt, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tabsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   bill    │  │ validation│  │   │
//! │  │   │  TipType  │  │   Money   │  │ BillState │  │   rules   │  │   │
//! │  │   │  Receipt  │  │ TipCalc   │  │ BillTotals│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tabsplit-scan (Scanner Client)                  │   │
//! │  │        the one network call: image -> ReceiptSummary            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TipType, ReceiptSummary, ReceiptItem)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`bill`] - BillState, typed update actions, and the totals engine
//! - [`error`] - Domain error types
//! - [`validation`] - Advisory business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Engine**: the engine never panics and never rejects input;
//!    unparseable input becomes zero, impossible divisions become zero
//!
//! ## Example Usage
//!
//! ```rust
//! use tabsplit_core::bill::BillState;
//!
//! // bill $118.00 with $18.00 tax, default 18% tip on the subtotal
//! let mut state = BillState::default();
//! state.bill_cents = 11800;
//! state.tax_cents = 1800;
//! state.split_count = 4;
//!
//! let totals = state.totals();
//! assert_eq!(totals.tip_cents, 1800);         // 18% of $100.00
//! assert_eq!(totals.grand_total_cents, 13600); // $136.00
//! assert_eq!(totals.per_person_cents, 3400);   // $34.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tabsplit_core::Money` instead of
// `use tabsplit_core::money::Money`

pub use bill::{BillAction, BillState, BillTotals};
pub use error::ValidationError;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default tip rate in basis points (1800 = 18%).
pub const DEFAULT_TIP_BPS: i64 = 1800;

/// Default number of people sharing the bill.
pub const DEFAULT_SPLIT_COUNT: i64 = 2;

/// Minimum number of people sharing the bill.
///
/// ## Business Reason
/// Decrementing the split count clamps here; a bill is always shared by
/// at least one person, which also keeps the per-person division safe.
pub const MIN_SPLIT_COUNT: i64 = 1;

/// Upper bound the tip slider offers (5000 bps = 50%).
///
/// ## Business Reason
/// The engine itself does not reject larger values; this constant backs
/// the advisory validation layer and the UI slider range.
pub const MAX_TIP_BPS: i64 = 5000;

//! # Bill Session State
//!
//! Manages the single bill session the app owns.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the session
//! 2. Only one command should modify it at a time
//! 3. Tauri commands can run concurrently
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Session Change        │
//! │  ───────────────          ─────────────           ──────────────        │
//! │                                                                         │
//! │  Type bill total ────────► set_bill_amount() ───► state.apply(action)  │
//! │                                                                         │
//! │  Pick tip preset ────────► set_tip_value() ─────► state.apply(action)  │
//! │                                                                         │
//! │  Scan completes ─────────► scan_receipt() ──────► ingest + store items │
//! │                                                                         │
//! │  Click Reset ────────────► reset_bill() ────────► defaults, items gone │
//! │                                                                         │
//! │  NOTE: All write operations acquire the Mutex lock exclusively.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tabsplit_core::{BillAction, BillState, BillTotals, ReceiptItem, ReceiptSummary};

/// The one bill session per app run: the engine state plus the
/// display-only artifacts around it.
///
/// ## Design Notes
/// - `state` is the only input the engine ever sees
/// - `receipt_items` are display-only; they never feed the calculation
/// - `started_at` marks session creation / last reset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSession {
    /// The calculator input state.
    pub state: BillState,

    /// Line items from the last successful scan, for display only.
    pub receipt_items: Vec<ReceiptItem>,

    /// When the session was created or last reset.
    pub started_at: DateTime<Utc>,
}

impl BillSession {
    /// Creates a fresh session with the documented defaults.
    pub fn new() -> Self {
        BillSession {
            state: BillState::default(),
            receipt_items: Vec::new(),
            started_at: Utc::now(),
        }
    }

    /// Applies one engine action.
    ///
    /// Reset is the one action with a session-level side effect: it also
    /// clears the scanned line items, matching the reset button behavior.
    pub fn apply(&mut self, action: BillAction) {
        let is_reset = matches!(action, BillAction::Reset);
        self.state.apply(action);
        if is_reset {
            self.receipt_items.clear();
            self.started_at = Utc::now();
        }
    }

    /// Ingests a scanned receipt: amounts into the engine state, items
    /// into the display list. An item-less summary leaves the current
    /// list untouched.
    pub fn ingest(&mut self, summary: &ReceiptSummary) {
        self.state.ingest_receipt(summary);
        if let Some(items) = &summary.items {
            self.receipt_items = items.clone();
        }
    }

    /// Derived totals for the current state.
    pub fn totals(&self) -> BillTotals {
        self.state.totals()
    }
}

impl Default for BillSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Tauri-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<BillSession>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one command mutates the session at a time
///
/// ## Why Not RwLock?
/// Session operations are quick and most of them write.
/// A RwLock would add complexity with minimal benefit.
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<BillSession>>,
}

impl SessionState {
    /// Creates a new default session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(BillSession::new())),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = session_state.with_session(|s| s.totals());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.apply(action));
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabsplit_core::TipType;

    fn summary_with_items() -> ReceiptSummary {
        ReceiptSummary {
            total_cents: 11800,
            tax_cents: Some(1800),
            subtotal_cents: None,
            currency: None,
            items: Some(vec![ReceiptItem {
                name: "Pad Thai".to_string(),
                price_cents: 1450,
            }]),
        }
    }

    #[test]
    fn test_ingest_populates_state_and_items() {
        let mut session = BillSession::new();
        session.ingest(&summary_with_items());

        assert_eq!(session.state.bill_cents, 11800);
        assert_eq!(session.state.tax_cents, 1800);
        assert_eq!(session.receipt_items.len(), 1);
    }

    #[test]
    fn test_ingest_without_items_keeps_previous_list() {
        let mut session = BillSession::new();
        session.ingest(&summary_with_items());

        let rescan = ReceiptSummary {
            total_cents: 5000,
            tax_cents: None,
            subtotal_cents: None,
            currency: None,
            items: None,
        };
        session.ingest(&rescan);

        assert_eq!(session.state.bill_cents, 5000);
        assert_eq!(session.receipt_items.len(), 1);
    }

    #[test]
    fn test_reset_clears_items_and_state() {
        let mut session = BillSession::new();
        session.ingest(&summary_with_items());
        session.apply(BillAction::SetTipType(TipType::Fixed));

        session.apply(BillAction::Reset);

        assert_eq!(session.state, BillState::default());
        assert!(session.receipt_items.is_empty());
    }

    #[test]
    fn test_non_reset_actions_keep_items() {
        let mut session = BillSession::new();
        session.ingest(&summary_with_items());

        session.apply(BillAction::SetBillAmount("99.00".to_string()));

        assert_eq!(session.state.bill_cents, 9900);
        assert_eq!(session.receipt_items.len(), 1);
    }

    #[test]
    fn test_session_state_accessors() {
        let state = SessionState::new();
        state.with_session_mut(|s| s.apply(BillAction::SetBillAmount("10".to_string())));
        let bill = state.with_session(|s| s.state.bill_cents);
        assert_eq!(bill, 1000);
    }
}

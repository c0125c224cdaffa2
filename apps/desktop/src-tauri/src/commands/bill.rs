//! # Bill Commands
//!
//! Tauri commands for reading and updating the bill session. Each command
//! maps to exactly one engine action; there is deliberately no generic
//! "set field by name" command.
//!
//! ## Command Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bill Command Surface                                 │
//! │                                                                         │
//! │  get_bill            read-only snapshot                                 │
//! │  set_bill_amount     SetBillAmount(raw text)                            │
//! │  set_tax_amount      SetTaxAmount(raw text)                             │
//! │  set_tip_type        SetTipType(percentage | fixed)                     │
//! │  set_tip_value       SetTipValue(raw text)                              │
//! │  increment_split     IncrementSplit                                     │
//! │  decrement_split     DecrementSplit (clamps at 1)                       │
//! │  toggle_tax_in_tip   ToggleTaxInTip                                     │
//! │  reset_bill          Reset (also clears scanned items)                  │
//! │                                                                         │
//! │  Every mutation returns the full BillResponse so the frontend          │
//! │  re-renders from a single consistent snapshot.                          │
//! │                                                                         │
//! │  None of these can fail: unparseable text recovers to zero inside      │
//! │  the engine, so the return type is a plain BillResponse.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, warn};

use crate::state::{BillSession, SessionState};
use tabsplit_core::validation::check_state;
use tabsplit_core::{BillAction, BillState, BillTotals, ReceiptItem, TipType};

/// Full bill snapshot: input state, derived totals, and the display-only
/// scanned line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    pub state: BillState,
    pub totals: BillTotals,
    pub receipt_items: Vec<ReceiptItem>,
}

impl From<&BillSession> for BillResponse {
    fn from(session: &BillSession) -> Self {
        BillResponse {
            state: session.state.clone(),
            totals: session.totals(),
            receipt_items: session.receipt_items.clone(),
        }
    }
}

/// Applies one action and returns the fresh snapshot.
///
/// Advisory validation runs after the mutation: findings are logged, the
/// input stands. The engine's permissiveness here is a recorded decision,
/// not an oversight.
fn apply_action(session: &SessionState, action: BillAction) -> BillResponse {
    session.with_session_mut(|s| {
        s.apply(action);
        if let Err(finding) = check_state(&s.state) {
            warn!("suspicious bill input accepted: {}", finding);
        }
        BillResponse::from(&*s)
    })
}

/// Gets the current bill snapshot.
///
/// ## When Used
/// - App startup (initial render)
/// - After window refocus, to resync the frontend
#[tauri::command]
pub fn get_bill(session: State<'_, SessionState>) -> BillResponse {
    debug!("get_bill command");
    session.with_session(|s| BillResponse::from(s))
}

/// Sets the bill total from raw text. Unparseable input becomes $0.00.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User types in the "Bill Total" field                                  │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('set_bill_amount', { value: '118.00' })                        │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  engine parses to 11800 cents, totals recompute                        │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Results panel re-renders: tip, grand total, per person               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[tauri::command]
pub fn set_bill_amount(session: State<'_, SessionState>, value: String) -> BillResponse {
    debug!(value = %value, "set_bill_amount command");
    apply_action(&session, BillAction::SetBillAmount(value))
}

/// Sets the tax portion of the bill from raw text. Unparseable input
/// becomes $0.00.
#[tauri::command]
pub fn set_tax_amount(session: State<'_, SessionState>, value: String) -> BillResponse {
    debug!(value = %value, "set_tax_amount command");
    apply_action(&session, BillAction::SetTaxAmount(value))
}

/// Switches between percentage and fixed tip.
///
/// The raw tip value is preserved across the switch ("18" flips between
/// 18% and $18.00) - intentional UX, see the engine documentation.
#[tauri::command]
pub fn set_tip_type(session: State<'_, SessionState>, tip_type: TipType) -> BillResponse {
    debug!(?tip_type, "set_tip_type command");
    apply_action(&session, BillAction::SetTipType(tip_type))
}

/// Sets the tip value (percent or dollars per the current type) from raw
/// text. Unparseable input becomes 0.
#[tauri::command]
pub fn set_tip_value(session: State<'_, SessionState>, value: String) -> BillResponse {
    debug!(value = %value, "set_tip_value command");
    apply_action(&session, BillAction::SetTipValue(value))
}

/// One more person shares the bill. No upper bound.
#[tauri::command]
pub fn increment_split(session: State<'_, SessionState>) -> BillResponse {
    debug!("increment_split command");
    apply_action(&session, BillAction::IncrementSplit)
}

/// One fewer person shares the bill. Clamps at 1.
#[tauri::command]
pub fn decrement_split(session: State<'_, SessionState>) -> BillResponse {
    debug!("decrement_split command");
    apply_action(&session, BillAction::DecrementSplit)
}

/// Flips whether the tax portion joins the percentage tip base.
#[tauri::command]
pub fn toggle_tax_in_tip(session: State<'_, SessionState>) -> BillResponse {
    debug!("toggle_tax_in_tip command");
    apply_action(&session, BillAction::ToggleTaxInTip)
}

/// Resets the whole session: defaults restored, scanned items cleared.
#[tauri::command]
pub fn reset_bill(session: State<'_, SessionState>) -> BillResponse {
    debug!("reset_bill command");
    apply_action(&session, BillAction::Reset)
}

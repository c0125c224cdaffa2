//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: The scanner's busy flag never blocks a bill edit
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(session_state);                                     │   │
//! │  │  app.manage(scanner_state);                                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │  ┌────────────────────────┐  ┌────────────────────────────┐            │
//! │  │   SessionState         │  │   ScannerState             │            │
//! │  │                        │  │                            │            │
//! │  │  Arc<Mutex<            │  │  Option<ReceiptScanner>    │            │
//! │  │    BillSession         │  │  AtomicBool busy           │            │
//! │  │  >>                    │  │                            │            │
//! │  └────────────────────────┘  └────────────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • SessionState: Protected by Arc<Mutex<T>> for exclusive access       │
//! │  • ScannerState: Client is immutable; busy flag is atomic              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bill;
mod scanner;

pub use bill::{BillSession, SessionState};
pub use scanner::ScannerState;

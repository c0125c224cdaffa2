//! # TabSplit Desktop Library
//!
//! Core library for the TabSplit desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! tabsplit_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── bill.rs     ◄─── Bill session state management
//! │   └── scanner.rs  ◄─── Scanner client + busy flag
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── bill.rs     ◄─── Bill update commands
//! │   └── scan.rs     ◄─── Receipt scan command
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state
//! types:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri State Management                               │
//! │                                                                         │
//! │  ┌──────────────────────────┐  ┌──────────────────────────────────┐    │
//! │  │    SessionState          │  │    ScannerState                  │    │
//! │  │                          │  │                                  │    │
//! │  │  • BillState             │  │  • ReceiptScanner (or None if    │    │
//! │  │  • scanned line items    │  │    no API key is configured)     │    │
//! │  │  • Arc<Mutex<_>>         │  │  • busy flag (AtomicBool)        │    │
//! │  └──────────────────────────┘  └──────────────────────────────────┘    │
//! │                                                                         │
//! │  WHY: Each command only requests the state it needs.                   │
//! │       Better separation of concerns and testability.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tauri::Manager;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{ScannerState, SessionState};
use tabsplit_scan::ScanConfig;

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Read Scanner Configuration ───────────────────────────────────────► │
/// │     • TABSPLIT_API_KEY / GEMINI_API_KEY                                 │
/// │     • Missing key: scanning disabled, everything else works             │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: default BillState, no scanned items                 │
/// │     • ScannerState: HTTP client + busy flag                             │
/// │                                                                         │
/// │  4. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting TabSplit Desktop Application");

    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let scan_config = ScanConfig::from_env();
            if !scan_config.has_api_key() {
                info!("no scanner API key configured; receipt scanning disabled");
            }

            let session_state = SessionState::new();
            let scanner_state = ScannerState::new(scan_config);

            app.manage(session_state);
            app.manage(scanner_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Bill commands
            commands::bill::get_bill,
            commands::bill::set_bill_amount,
            commands::bill::set_tax_amount,
            commands::bill::set_tip_type,
            commands::bill::set_tip_value,
            commands::bill::increment_split,
            commands::bill::decrement_split,
            commands::bill::toggle_tax_in_tip,
            commands::bill::reset_bill,
            // Scan commands
            commands::scan::scan_receipt,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tabsplit=trace` - Show trace for tabsplit crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tabsplit=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

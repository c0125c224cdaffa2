//! # TabSplit Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TabSplit Desktop                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                    Web Frontend                            │  │  │
//! │  │  │  • Receipt Scanner      • Bill / Tax Inputs                │  │  │
//! │  │  │  • Tip Picker           • Per-Person Results               │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                           │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► delegates to lib.rs                              │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► sets up logging, state, commands                 │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► set_bill_amount, scan_receipt, reset_bill        │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► SessionState, ScannerState                       │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │         External image-understanding service (HTTPS)            │  │
//! │  │         the one network call: image -> ReceiptSummary           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    tabsplit_desktop_lib::run();
}

//! # Tauri Commands Module
//!
//! All commands exposed to the web frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── bill.rs     ◄─── Bill state updates + reads
//! └── scan.rs     ◄─── Receipt scan (the one async command)
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Web Frontend                                                           │
//! │  ────────────                                                           │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const bill = await invoke('set_bill_amount', { value: '118.00' });     │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn set_bill_amount(                                                    │
//! │      session: State<'_, SessionState>,  ◄── Injected by Tauri          │
//! │      value: String,                     ◄── From invoke params         │
//! │  ) -> BillResponse                                                      │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { state, totals, receiptItems }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn set_tip_value(session: State<'_, SessionState>, ...)
//!
//! // Needs session and scanner
//! async fn scan_receipt(session: State<'_, SessionState>,
//!                       scanner: State<'_, ScannerState>, ...)
//! ```

pub mod bill;
pub mod scan;

//! # MediPOS Terminal Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        MediPOS Terminal                                 │
//! │                                                                         │
//! │  client ──stdin──►  {"cmd":"add_to_cart","productId":"1"}               │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │  main.rs ────► Starts a current-thread runtime                   │  │
//! │  │  lib.rs ─────► Logging, config, state, command loop              │  │
//! │  │  commands/ ──► add_to_cart, set_discount, checkout, ...          │  │
//! │  │  state/ ─────► CatalogState, BillingState, ConfigState, ...      │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │  client ◄─stdout──  {"ok":true,"data":{...},"notifications":[...]}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for testability
    medipos_terminal_lib::run().await
}

//! # medipos-core: Pure Business Logic for MediPOS
//!
//! This crate is the **heart** of MediPOS, a pharmacy point-of-sale. It
//! holds the billing engine and every calculation behind the pages, as
//! pure functions and plain data with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MediPOS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end / terminal client                  │   │
//! │  │   Dashboard ─ Inventory ─ Billing ─ Reports ─ Settings          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON lines (stdin/stdout)              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    medipos-terminal commands                    │   │
//! │  │    add_to_cart, set_discount, checkout, sales_report, etc.      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ medipos-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  billing  │  │  catalog  │  │ inventory │  │  report   │  │   │
//! │  │   │  Session  │  │ customer  │  │ Dashboard │  │ DateRange │  │   │
//! │  │   │ Discount  │  │   ids     │  │  Expiry   │  │  Summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`billing`] - Cart, discount and checkout engine
//! - [`catalog`] - Product lookup trait + in-memory catalog
//! - [`customer`] - Customer directory trait + in-memory directory
//! - [`inventory`] - Expiry status, inventory filter, dashboard numbers
//! - [`report`] - Date-ranged sales report summaries
//! - [`access`] - Roles, routes and simulated login
//! - [`settings`] - Session-only preference toggles
//! - [`notification`] - Messages for the cashier
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - Domain types (Product, Customer, SalesReport, etc.)
//! - [`ids`] - Identifier generation
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: "today" is always a parameter, never read from a clock
//! 2. **No I/O**: Notifications go to a caller-supplied sink
//! 3. **Integer Money**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: Rejected operations return typed errors and leave state untouched
//!
//! ## Example Usage
//!
//! ```rust
//! use medipos_core::billing::{BillingSession, Discount};
//! use medipos_core::notification::Discard;
//! use medipos_core::types::DiscountRate;
//! use medipos_core::Product;
//! use chrono::NaiveDate;
//!
//! let catalog = vec![Product {
//!     id: "1".to_string(),
//!     name: "Paracetamol 500mg".to_string(),
//!     batch_no: "B001".to_string(),
//!     stock: 150,
//!     expiry: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
//!     price_cents: 599,
//!     category: "Pain Relief".to_string(),
//! }];
//!
//! let mut session = BillingSession::new();
//! session.add("1", &catalog, &mut Discard).unwrap();
//! session.add("1", &catalog, &mut Discard).unwrap();
//! session
//!     .set_discount(Discount::Percentage(DiscountRate::from_percent(10)), &mut Discard)
//!     .unwrap();
//!
//! assert_eq!(session.subtotal().cents(), 1198);
//! assert_eq!(session.discount_amount().cents(), 120);
//! assert_eq!(session.total().cents(), 1078);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod billing;
pub mod catalog;
pub mod customer;
pub mod error;
pub mod ids;
pub mod inventory;
pub mod money;
pub mod notification;
pub mod report;
pub mod settings;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::{Bill, BillingSession, CartLine, Discount};
pub use catalog::{Catalog, InMemoryCatalog};
pub use customer::{CustomerDirectory, InMemoryCustomerDirectory};
pub use error::{CheckoutBlocker, CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use notification::{Notification, NotificationSink};
pub use types::*;

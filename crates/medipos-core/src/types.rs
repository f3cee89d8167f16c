//! # Domain Types
//!
//! Core domain types used throughout MediPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Customer     │   │  SalesReport    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  date           │       │
//! │  │  batch_no       │   │  name, phone    │   │  total_orders   │       │
//! │  │  stock, expiry  │   │  email, address │   │  total_sales    │       │
//! │  │  price          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DiscountRate   │   │   TopSeller     │                             │
//! │  │  bps (u32)      │   │  units sold     │                             │
//! │  │  1000 = 10%     │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart types (`CartLine`, `Discount`, `Bill`) live in [`crate::billing`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10%, 10000 bps = 100%
///
/// Keeps fractional percentages like 12.5% exact without floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// 100%, the largest rate a discount may carry.
    pub const MAX: DiscountRate = DiscountRate(10_000);

    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a rate from a whole percentage.
    #[inline]
    pub const fn from_percent(pct: u32) -> Self {
        DiscountRate(pct * 100)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

/// Shows the shortest exact percentage: `10%`, `12.5%`, `8.25%`.
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{}%", whole)
        } else if frac % 10 == 0 {
            write!(f, "{}.{}%", whole, frac / 10)
        } else {
            write!(f, "{}.{:02}%", whole, frac)
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A medicine stocked by the pharmacy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name, e.g. "Paracetamol 500mg".
    pub name: String,

    /// Manufacturer batch the stock belongs to.
    pub batch_no: String,

    /// Units on hand. Never negative.
    pub stock: i64,

    /// Expiry date of the batch.
    #[ts(as = "String")]
    pub expiry: NaiveDate,

    /// Unit price in cents.
    pub price_cents: i64,

    /// Shelf category, e.g. "Pain Relief".
    pub category: String,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether `quantity` units can be billed from current stock.
    #[inline]
    pub fn has_stock_for(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    /// Value of the units on hand at the current price.
    #[inline]
    pub fn stock_value(&self) -> Money {
        self.price().multiply_quantity(self.stock)
    }
}

/// Fields for a product that doesn't have an id yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub batch_no: String,
    pub stock: i64,
    #[ts(as = "String")]
    pub expiry: NaiveDate,
    pub price_cents: i64,
    pub category: String,
}

impl NewProduct {
    /// Attaches an id, producing a catalog row.
    pub fn with_id(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            batch_no: self.batch_no,
            stock: self.stock,
            expiry: self.expiry,
            price_cents: self.price_cents,
            category: self.category,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer a bill can be issued to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Fields collected by the "New Customer" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

// =============================================================================
// Reporting
// =============================================================================

/// Daily sales totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesReport {
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub total_orders: i64,
    pub total_sales_cents: i64,
}

impl SalesReport {
    #[inline]
    pub fn total_sales(&self) -> Money {
        Money::from_cents(self.total_sales_cents)
    }

    /// Average value of an order on this day; zero when there were none.
    pub fn average_order_value(&self) -> Money {
        self.total_sales().divide_rounded(self.total_orders)
    }
}

/// A product and how many units of it sold today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TopSeller {
    pub product_id: String,
    pub name: String,
    pub units_sold: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

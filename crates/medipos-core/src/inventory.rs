//! # Inventory & Dashboard Calculations
//!
//! Read-only views over the product list: expiry highlighting, the
//! inventory page filter, and the dashboard's headline numbers. None of
//! this feeds the billing engine.
//!
//! ## Expiry Windows
//! ```text
//!             today                     today + 30d
//!   ────────────┼─────────────────────────────┼──────────────────►
//!     Expired   │         NearExpiry          │        Ok
//!   (red)       │         (amber)             │      (green)
//!
//!   Inventory filter "near expiry": everything left of the right edge
//!   Dashboard "near expiry":        today < expiry ≤ today + 30d
//! ```

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::matches_term;
use crate::money::Money;
use crate::types::{Product, TopSeller};

/// Days ahead of today that count as "near expiry".
pub const NEAR_EXPIRY_WINDOW_DAYS: u32 = 30;

fn window_end(today: NaiveDate, window_days: u32) -> NaiveDate {
    today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX)
}

// =============================================================================
// Expiry Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExpiryStatus {
    /// Expiry date is before today.
    Expired,
    /// Expires today or within the window.
    NearExpiry,
    Ok,
}

impl ExpiryStatus {
    /// Classifies an expiry date relative to `today`.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use medipos_core::inventory::ExpiryStatus;
    ///
    /// let today = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    /// let expiry = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();
    /// assert_eq!(ExpiryStatus::classify(expiry, today, 30), ExpiryStatus::NearExpiry);
    /// ```
    pub fn classify(expiry: NaiveDate, today: NaiveDate, window_days: u32) -> Self {
        if expiry < today {
            ExpiryStatus::Expired
        } else if expiry <= window_end(today, window_days) {
            ExpiryStatus::NearExpiry
        } else {
            ExpiryStatus::Ok
        }
    }
}

// =============================================================================
// Inventory Page
// =============================================================================

/// Search box + "near expiry" checkbox on the inventory page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryFilter {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub near_expiry_only: bool,
}

impl InventoryFilter {
    /// Whether a product passes the filter.
    ///
    /// The near-expiry checkbox keeps anything expiring within the window,
    /// already-expired stock included.
    pub fn matches(&self, product: &Product, today: NaiveDate, window_days: u32) -> bool {
        if !matches_term(product, self.search.trim()) {
            return false;
        }
        !self.near_expiry_only || product.expiry <= window_end(today, window_days)
    }

    pub fn apply(&self, products: &[Product], today: NaiveDate, window_days: u32) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p, today, window_days))
            .cloned()
            .collect()
    }
}

/// A product row with its expiry highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryRow {
    #[serde(flatten)]
    pub product: Product,
    pub expiry_status: ExpiryStatus,
}

/// Filters products and tags each with its expiry status.
pub fn inventory_rows(
    products: &[Product],
    filter: &InventoryFilter,
    today: NaiveDate,
    window_days: u32,
) -> Vec<InventoryRow> {
    filter
        .apply(products, today, window_days)
        .into_iter()
        .map(|product| InventoryRow {
            expiry_status: ExpiryStatus::classify(product.expiry, today, window_days),
            product,
        })
        .collect()
}

// =============================================================================
// Dashboard
// =============================================================================

/// Products expiring after today and within the window.
pub fn near_expiry(products: &[Product], today: NaiveDate, window_days: u32) -> Vec<Product> {
    let end = window_end(today, window_days);
    products
        .iter()
        .filter(|p| p.expiry > today && p.expiry <= end)
        .cloned()
        .collect()
}

/// Σ price × stock.
pub fn inventory_value(products: &[Product]) -> Money {
    products.iter().map(Product::stock_value).sum()
}

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DashboardSummary {
    pub total_items: usize,
    pub inventory_value_cents: i64,
    pub near_expiry: Vec<Product>,
    pub todays_revenue_cents: i64,
    pub top_selling: Vec<TopSeller>,
}

impl DashboardSummary {
    pub fn build(
        products: &[Product],
        todays_revenue: Money,
        top_selling: Vec<TopSeller>,
        today: NaiveDate,
        window_days: u32,
    ) -> Self {
        DashboardSummary {
            total_items: products.len(),
            inventory_value_cents: inventory_value(products).cents(),
            near_expiry: near_expiry(products, today, window_days),
            todays_revenue_cents: todays_revenue.cents(),
            top_selling,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

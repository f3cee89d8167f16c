//! # Sales State
//!
//! Historical sales and today's dashboard figures. Read-only after
//! startup, so no lock is needed. Checkout does not feed back into these
//! numbers; bills are not recorded.

use medipos_core::types::{SalesReport, TopSeller};
use medipos_core::Money;

#[derive(Debug, Clone, Default)]
pub struct SalesState {
    pub reports: Vec<SalesReport>,
    pub top_sellers: Vec<TopSeller>,
    pub todays_revenue: Money,
}

//! # Inventory & Dashboard Commands
//!
//! Read-only views: the inventory table with expiry highlighting, and the
//! dashboard's headline numbers. Both are evaluated against the configured
//! business date.

use medipos_core::inventory::{inventory_rows, DashboardSummary, InventoryFilter, InventoryRow};
use tracing::debug;

use crate::state::{CatalogState, ConfigState, SalesState};

/// Inventory table rows after the search box and near-expiry checkbox.
pub fn inventory(
    catalog: &CatalogState,
    config: &ConfigState,
    filter: InventoryFilter,
) -> Vec<InventoryRow> {
    debug!(search = %filter.search, near_expiry_only = filter.near_expiry_only, "inventory command");

    let today = config.today();
    catalog.with_catalog(|c| inventory_rows(c.products(), &filter, today, config.near_expiry_days))
}

/// Dashboard cards: item count, stock value, near-expiry list, today's
/// revenue and top sellers.
pub fn dashboard(catalog: &CatalogState, sales: &SalesState, config: &ConfigState) -> DashboardSummary {
    debug!("dashboard command");

    let today = config.today();
    catalog.with_catalog(|c| {
        DashboardSummary::build(
            c.products(),
            sales.todays_revenue,
            sales.top_sellers.clone(),
            today,
            config.near_expiry_days,
        )
    })
}

//! # Product Commands
//!
//! Product listing, search and maintenance for the inventory page and the
//! billing page's medicine picker.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types "para" or "B00"                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"cmd":"search_products","query":"para"}                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Trim + length check (validate_search_query)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Case-insensitive match on name OR batch number                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> in catalog order                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use medipos_core::types::{NewProduct, Product};
use medipos_core::validation::validate_search_query;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CatalogState;

pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.with_catalog(|c| c.products().to_vec())
}

/// Searches products by name or batch number.
///
/// An empty query returns the whole catalog.
pub fn search_products(catalog: &CatalogState, query: String) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, "search_products command");

    let query = validate_search_query(&query)?;
    Ok(catalog.with_catalog(|c| c.search(&query)))
}

/// Adds a product to the catalog with a fresh id.
pub fn add_product(catalog: &CatalogState, product: NewProduct) -> Result<Product, ApiError> {
    debug!(name = %product.name, "add_product command");

    let product = catalog.with_catalog_mut(|c| c.add_product(product))?;
    info!(product_id = %product.id, name = %product.name, "product added");
    Ok(product)
}

/// Replaces a product's fields.
///
/// Lines already in the cart keep the price they were added at; the new
/// stock applies to the next quantity change.
pub fn update_product(catalog: &CatalogState, product: Product) -> Result<Product, ApiError> {
    debug!(product_id = %product.id, "update_product command");

    let product = catalog.with_catalog_mut(|c| c.update_product(product))?;
    info!(product_id = %product.id, stock = product.stock, "product updated");
    Ok(product)
}

/// Removes a product from the catalog and returns it.
pub fn delete_product(catalog: &CatalogState, id: String) -> Result<Product, ApiError> {
    debug!(product_id = %id, "delete_product command");

    let product = catalog.with_catalog_mut(|c| c.delete_product(&id))?;
    info!(product_id = %product.id, name = %product.name, "product deleted");
    Ok(product)
}

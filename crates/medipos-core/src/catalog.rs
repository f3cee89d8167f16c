//! # Product Catalog
//!
//! The catalog owns products. The billing engine only ever reads it through
//! the [`Catalog`] trait, so it works the same against the in-memory store
//! below, a plain `Vec<Product>` in tests, or anything else that can answer
//! "what is product X".
//!
//! ```text
//! ┌──────────────────┐   find_product / list_products   ┌───────────────────┐
//! │  BillingSession  │ ───────────────────────────────► │   dyn Catalog     │
//! └──────────────────┘                                   └─────────┬─────────┘
//!                                                                  │
//!                              inventory page CRUD                 ▼
//!                              ─────────────────────►  ┌───────────────────┐
//!                                                      │  InMemoryCatalog  │
//!                                                      └───────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::types::{NewProduct, Product};
use crate::validation::{validate_new_product, validate_product};

/// Read access to products.
pub trait Catalog {
    /// All products, in catalog order.
    fn list_products(&self) -> Vec<Product>;

    /// Looks up a single product by id.
    fn find_product(&self, id: &str) -> Option<Product>;
}

impl Catalog for Vec<Product> {
    fn list_products(&self) -> Vec<Product> {
        self.clone()
    }

    fn find_product(&self, id: &str) -> Option<Product> {
        self.iter().find(|p| p.id == id).cloned()
    }
}

/// Case-insensitive match on name or batch number. An empty term matches.
pub fn matches_term(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    product.name.to_lowercase().contains(&term) || product.batch_no.to_lowercase().contains(&term)
}

// =============================================================================
// In-Memory Catalog
// =============================================================================

/// Mutable product list backing the inventory page.
#[derive(Debug)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    ids: Box<dyn IdGenerator>,
}

impl InMemoryCatalog {
    /// Creates a catalog seeded with `products`, assigning UUIDs to new rows.
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_id_generator(products, Box::new(UuidGenerator))
    }

    pub fn with_id_generator(products: Vec<Product>, ids: Box<dyn IdGenerator>) -> Self {
        InMemoryCatalog { products, ids }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products whose name or batch number contains `term`.
    pub fn search(&self, term: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| matches_term(p, term.trim()))
            .cloned()
            .collect()
    }

    /// Adds a product from the "Add Medicine" form and returns it with its
    /// new id.
    pub fn add_product(&mut self, fields: NewProduct) -> CoreResult<Product> {
        validate_new_product(&fields)?;
        let product = fields.with_id(self.ids.next_id());
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replaces the product with the same id.
    ///
    /// Open carts keep the price they were billed at; only stock checks see
    /// the new values.
    pub fn update_product(&mut self, product: Product) -> CoreResult<Product> {
        validate_product(&product)?;
        let slot = self
            .products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| CoreError::ProductNotFound(product.id.clone()))?;
        *slot = product.clone();
        Ok(product)
    }

    /// Removes a product and returns it.
    pub fn delete_product(&mut self, id: &str) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))?;
        Ok(self.products.remove(index))
    }
}

impl Catalog for InMemoryCatalog {
    fn list_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn find_product(&self, id: &str) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

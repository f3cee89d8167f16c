//! # Catalog & Customer State
//!
//! The product catalog and the customer directory for the session. Both
//! are read by almost every command and written rarely (inventory edits,
//! the "New Customer" form), so they sit behind `RwLock`s.

use std::sync::{Arc, PoisonError, RwLock};

use medipos_core::{InMemoryCatalog, InMemoryCustomerDirectory};

/// Thread-safe product catalog wrapper.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<RwLock<InMemoryCatalog>>,
}

impl CatalogState {
    pub fn new(catalog: InMemoryCatalog) -> Self {
        CatalogState {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Executes a function with read access to the catalog.
    pub fn with_catalog<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InMemoryCatalog) -> R,
    {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        f(&catalog)
    }

    /// Executes a function with write access to the catalog.
    pub fn with_catalog_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InMemoryCatalog) -> R,
    {
        let mut catalog = self.catalog.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut catalog)
    }
}

/// Thread-safe customer directory wrapper.
#[derive(Debug, Clone)]
pub struct CustomerState {
    directory: Arc<RwLock<InMemoryCustomerDirectory>>,
}

impl CustomerState {
    pub fn new(directory: InMemoryCustomerDirectory) -> Self {
        CustomerState {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn with_directory<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InMemoryCustomerDirectory) -> R,
    {
        let directory = self.directory.read().unwrap_or_else(PoisonError::into_inner);
        f(&directory)
    }

    pub fn with_directory_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InMemoryCustomerDirectory) -> R,
    {
        let mut directory = self.directory.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut directory)
    }
}

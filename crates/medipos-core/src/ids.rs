//! # Identifier Generation
//!
//! Records created at runtime (customers from the billing form, products
//! from the inventory form) get their ids from an [`IdGenerator`] supplied
//! by whoever owns the store. Production uses UUID v4; tests use a counter
//! so ids are predictable.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh, unique record ids.
pub trait IdGenerator: fmt::Debug + Send + Sync {
    fn next_id(&self) -> String;
}

/// UUID v4 ids. Globally unique without coordination.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Monotonic ids with a fixed prefix: `cus-1`, `cus-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

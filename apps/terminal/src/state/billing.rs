//! # Billing State
//!
//! Holds the open billing session: cart lines, discount and the selected
//! customer.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` so every command sees and
//! mutates it one at a time. A poisoned lock is recovered with the
//! session as it was.

use std::sync::{Arc, Mutex, PoisonError};

use medipos_core::BillingSession;

/// Thread-safe billing session wrapper.
#[derive(Debug, Clone, Default)]
pub struct BillingState {
    session: Arc<Mutex<BillingSession>>,
}

impl BillingState {
    /// Creates a state holding an empty session.
    pub fn new() -> Self {
        BillingState::default()
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let bill = billing.with_session(|s| s.bill());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillingSession) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// billing.with_session_mut(|s| s.add(&product_id, &catalog, &mut sink))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillingSession) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

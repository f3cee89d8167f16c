//! # Error Types
//!
//! Domain-specific error types for medipos-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  medipos-core errors (this file)                                       │
//! │  ├── CoreError        - Business rule violations, lookups              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors (in apps/terminal)                                │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable. A rejected operation leaves state exactly
//! as it was before the call.

use thiserror::Error;

use crate::billing::Discount;
use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product id is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer id is not in the directory.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Product is in the catalog but has no line in the cart.
    #[error("Product {0} is not in the cart")]
    LineNotFound(String),

    /// Requested line quantity is larger than the product's stock.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity field: 200
    ///      │
    ///      ▼
    /// Check stock: available=150
    ///      │
    ///      ▼
    /// InsufficientStock { product: "Paracetamol 500mg", available: 150, requested: 200 }
    ///      │
    ///      ▼
    /// UI shows: "Only 150 items available in stock"
    /// ```
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// The bill would no longer fit in a money amount.
    #[error("Bill total is too large after adding {requested} of {product}")]
    AmountTooLarge { product: String, requested: i64 },

    /// Discount is above 100% or above the subtotal.
    #[error("Discount {discount} exceeds the allowed maximum of {limit}")]
    DiscountOutOfBounds { discount: Discount, limit: String },

    /// Checkout was attempted before the sale was ready.
    #[error("Cannot checkout: {0}")]
    CheckoutPrecondition(CheckoutBlocker),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Builds the percentage variant of [`CoreError::DiscountOutOfBounds`].
    pub(crate) fn percentage_too_large(discount: Discount) -> Self {
        CoreError::DiscountOutOfBounds {
            discount,
            limit: "100%".to_string(),
        }
    }

    /// Builds the amount variant of [`CoreError::DiscountOutOfBounds`].
    pub(crate) fn amount_too_large(discount: Discount, subtotal: Money) -> Self {
        CoreError::DiscountOutOfBounds {
            discount,
            limit: subtotal.to_string(),
        }
    }
}

/// Why a checkout was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutBlocker {
    #[error("the cart is empty")]
    EmptyCart,

    #[error("no customer is selected")]
    NoCustomer,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g., bad date range, bad path).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

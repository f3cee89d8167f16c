//! # Validation Module
//!
//! Input validation utilities for MediPOS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── Required form fields                                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command handler                                              │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Billing engine                                               │
//! │  └── Stock and discount bounds                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{NewCustomer, NewProduct, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;
const MAX_BATCH_LEN: usize = 50;
const MAX_PHONE_LEN: usize = 30;
const MAX_QUERY_LEN: usize = 100;

/// Maximum units of one product on hand (and so in one cart line).
pub const MAX_STOCK: i64 = 1_000_000;

/// Maximum unit price: $1,000,000.00.
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

// =============================================================================
// String Validators
// =============================================================================

fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use medipos_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Amoxicillin 250mg").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, MAX_NAME_LEN)
}

/// Validates a batch number.
///
/// ## Rules
/// - Must not be empty, at most 50 characters
/// - Letters, digits, hyphens and slashes only
pub fn validate_batch_no(batch_no: &str) -> ValidationResult<()> {
    validate_required("batch number", batch_no, MAX_BATCH_LEN)?;

    if !batch_no
        .trim()
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '/')
    {
        return Err(ValidationError::InvalidFormat {
            field: "batch number".to_string(),
            reason: "must contain only letters, numbers, hyphens, and slashes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required("category", category, MAX_NAME_LEN)
}

pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name, MAX_NAME_LEN)
}

/// Validates a phone number. Only presence and length are checked; the
/// directory does not normalise numbers.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    validate_required("phone", phone, MAX_PHONE_LEN)
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock level. Zero is allowed (sold out).
///
/// ## Rules
/// - Not negative
/// - At most [`MAX_STOCK`]
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock".to_string(),
        });
    }

    if stock > MAX_STOCK {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: MAX_STOCK,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free samples).
///
/// ## Example
/// ```rust
/// use medipos_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(599).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// assert!(validate_price_cents(100_000_001).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    if cents > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product form.
pub fn validate_new_product(product: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_batch_no(&product.batch_no)?;
    validate_category(&product.category)?;
    validate_stock(product.stock)?;
    validate_price_cents(product.price_cents)
}

/// Validates an edited product. The id must be present.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_required("id", &product.id, MAX_BATCH_LEN)?;
    validate_product_name(&product.name)?;
    validate_batch_no(&product.batch_no)?;
    validate_category(&product.category)?;
    validate_stock(product.stock)?;
    validate_price_cents(product.price_cents)
}

/// Validates a new customer form. Email and address are optional.
pub fn validate_new_customer(customer: &NewCustomer) -> ValidationResult<()> {
    validate_customer_name(&customer.name)?;
    validate_phone(&customer.phone)
}

// =============================================================================
// Unit Tests
// =============================================================================

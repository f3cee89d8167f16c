//! # API Error Type
//!
//! Unified error type for terminal commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MediPOS                                │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  {"cmd":"update_cart_item", ...}                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON / no session? ── ApiError (BAD_REQUEST, UNAUTHORIZED) ►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Business rule broken? ── CoreError::InsufficientStock ─ ApiError►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Response line:                                                         │
//! │  {"ok":false,"error":{"code":"INSUFFICIENT_STOCK","message":"..."}}     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use medipos_core::{CheckoutBlocker, CoreError, Discount, ValidationError};
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// This is what the client receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product, customer or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Requested quantity is above stock
    InsufficientStock,

    /// Discount above 100% or above the subtotal
    DiscountError,

    /// Checkout attempted with an empty cart or no customer
    CheckoutError,

    /// No one is logged in
    Unauthorized,

    /// Logged in, but the role may not open this page
    Forbidden,

    /// The command line could not be parsed
    BadRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized() -> Self {
        ApiError::new(ErrorCode::Unauthorized, "Please log in first")
    }

    pub fn forbidden(page: &str) -> Self {
        ApiError::new(
            ErrorCode::Forbidden,
            format!("{} is only available to administrators", page),
        )
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CustomerNotFound(id) => ApiError::not_found("Customer", &id),
            CoreError::LineNotFound(id) => ApiError::new(
                ErrorCode::NotFound,
                format!("Product {} is not in the cart", id),
            ),
            CoreError::InsufficientStock {
                product,
                available,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Only {} items of {} available in stock, {} requested",
                    available, product, requested
                ),
            ),
            e @ CoreError::AmountTooLarge { .. } => ApiError::validation(e.to_string()),
            CoreError::DiscountOutOfBounds { discount, limit } => {
                let message = match discount {
                    Discount::Percentage(_) => {
                        format!("Discount percentage cannot exceed {}", limit)
                    }
                    Discount::Amount(_) => {
                        format!("Discount amount cannot exceed subtotal ({})", limit)
                    }
                };
                ApiError::new(ErrorCode::DiscountError, message)
            }
            CoreError::CheckoutPrecondition(blocker) => {
                let message = match blocker {
                    CheckoutBlocker::EmptyCart => "Cannot generate a bill: the cart is empty",
                    CheckoutBlocker::NoCustomer => "Cannot generate a bill: no customer is selected",
                };
                ApiError::new(ErrorCode::CheckoutError, message)
            }
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use medipos_core::types::DiscountRate;

    #[test]
    fn test_stock_error_maps_to_code() {
        let err = ApiError::from(CoreError::InsufficientStock {
            product: "Paracetamol 500mg".to_string(),
            available: 150,
            requested: 151,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert!(err.message.contains("150"));
    }

    #[test]
    fn test_discount_error_message() {
        let err = ApiError::from(CoreError::DiscountOutOfBounds {
            discount: Discount::Percentage(DiscountRate::from_percent(101)),
            limit: "100%".to_string(),
        });
        assert_eq!(err.code, ErrorCode::DiscountError);
        assert_eq!(err.message, "Discount percentage cannot exceed 100%");
    }

    #[test]
    fn test_validation_error_maps_to_code() {
        let err = ApiError::from(CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_amount_too_large_is_a_validation_error() {
        let err = ApiError::from(CoreError::AmountTooLarge {
            product: "Bulk Vials".to_string(),
            requested: 2,
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Bill total is too large after adding 2 of Bulk Vials");
    }

    #[test]
    fn test_serializes_screaming_snake_case() {
        let json = serde_json::to_value(ApiError::forbidden("Reports & Analytics")).unwrap();
        assert_eq!(json["code"], "FORBIDDEN");
        assert_eq!(
            json["message"],
            "Reports & Analytics is only available to administrators"
        );
    }
}

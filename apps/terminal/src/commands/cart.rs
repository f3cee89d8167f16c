//! # Cart Commands
//!
//! Commands for the billing page: cart lines, discount and checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Customer │────►│   Bill   │       │
//! │  │  Cart    │     │          │     │ Selected │     │ Generated│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └────┬─────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                        checkout           │
//! │       │           update_cart_item                        │             │
//! │       │           remove_from_cart                        │             │
//! │       │           set_discount                            │             │
//! │       │                │                                  │             │
//! │       │                ▼                                  │             │
//! │       └────────── clear_cart ◄────────────────────────────┘             │
//! │                                        (back to empty)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use medipos_core::{Bill, Discount, NotificationSink};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{BillingState, CatalogState, ConfigState};

/// Cart response: the computed bill plus display strings for its totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    #[serde(flatten)]
    pub bill: Bill,
    pub display: CartDisplay,
}

/// Totals formatted in the store currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDisplay {
    pub subtotal: String,
    pub discount: String,
    pub total: String,
}

impl CartResponse {
    pub fn new(bill: Bill, config: &ConfigState) -> Self {
        let display = CartDisplay {
            subtotal: config.format_currency(bill.subtotal_cents),
            discount: config.format_currency(bill.discount_cents),
            total: config.format_currency(bill.total_cents),
        };
        CartResponse { bill, display }
    }
}

fn current(billing: &BillingState, config: &ConfigState) -> CartResponse {
    CartResponse::new(billing.with_session(|s| s.bill()), config)
}

/// Gets the current cart, discount and customer with computed totals.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Bill Summary (always visible on the billing page)                     │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Customer: John Doe                               2 items      │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Paracetamol 500mg    B001     x2              $11.98          │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal                                      $11.98          │    │
/// │  │  Discount (10%)                                -$1.20          │    │
/// │  │  ──────────────────────────────────────────────────────        │    │
/// │  │  TOTAL                                         $10.78          │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(billing: &BillingState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    current(billing, config)
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity + 1
/// - Product not in cart: new line, price frozen now
/// - Either way the new quantity must fit in stock
pub fn add_to_cart(
    catalog: &CatalogState,
    billing: &BillingState,
    config: &ConfigState,
    sink: &mut dyn NotificationSink,
    product_id: String,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    catalog.with_catalog(|c| {
        billing.with_session_mut(|s| s.add(&product_id, c, sink).map(|_| ()))
    })?;

    Ok(current(billing, config))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity > stock: rejected, cart unchanged
pub fn update_cart_item(
    catalog: &CatalogState,
    billing: &BillingState,
    config: &ConfigState,
    sink: &mut dyn NotificationSink,
    product_id: String,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    catalog.with_catalog(|c| {
        billing.with_session_mut(|s| s.set_quantity(&product_id, quantity, c, sink))
    })?;

    Ok(current(billing, config))
}

/// Removes a line from the cart. Removing a product that is not in the
/// cart is a no-op.
pub fn remove_from_cart(
    billing: &BillingState,
    config: &ConfigState,
    product_id: String,
) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");

    billing.with_session_mut(|s| s.remove(&product_id));
    current(billing, config)
}

/// Abandons the sale: lines, discount and customer are all cleared.
pub fn clear_cart(billing: &BillingState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    billing.with_session_mut(|s| s.clear());
    current(billing, config)
}

/// Applies a discount to the current subtotal.
///
/// ## Arguments
/// * `discount` - `{"mode":"amount","value":<cents>}` or
///   `{"mode":"percentage","value":<basis points>}`
pub fn set_discount(
    billing: &BillingState,
    config: &ConfigState,
    sink: &mut dyn NotificationSink,
    discount: Discount,
) -> Result<CartResponse, ApiError> {
    debug!(%discount, "set_discount command");

    billing.with_session_mut(|s| s.set_discount(discount, sink))?;
    Ok(current(billing, config))
}

/// Generates the bill and resets the session.
///
/// ## Returns
/// The final bill. The cart, customer and discount are empty afterwards.
pub fn checkout(
    billing: &BillingState,
    config: &ConfigState,
    sink: &mut dyn NotificationSink,
) -> Result<CartResponse, ApiError> {
    debug!("checkout command");

    let bill = billing.with_session_mut(|s| s.checkout(sink))?;
    info!(
        customer = bill.customer.as_ref().map(|c| c.name.as_str()).unwrap_or_default(),
        items = bill.item_count,
        total = %config.format_currency(bill.total_cents),
        "bill generated"
    );

    Ok(CartResponse::new(bill, config))
}

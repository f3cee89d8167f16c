//! # Billing Engine
//!
//! The cart, its discount and the selected customer for one billing
//! session, plus the arithmetic that turns them into a bill.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   add / set_quantity   ┌────────────┐                     │
//! │  │  Empty   │ ─────────────────────► │ Populated  │ ◄──┐ add / remove / │
//! │  └──────────┘                        └─────┬──────┘ ───┘ set_discount   │
//! │       ▲                                    │                            │
//! │       │       checkout (customer set)      │                            │
//! │       └────────────────────────────────────┘                            │
//! │         clears lines, customer, discount → {amount, 0} in one step      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing
//! A line freezes the product's name, batch and unit price when it is first
//! added. Later catalog edits do not change an open cart's subtotal. Stock,
//! on the other hand, is read live from the catalog on every quantity change.
//!
//! ## Totals
//! ```text
//! subtotal = Σ unit_price × quantity
//! discount = value                         (amount)
//!          = subtotal × bps / 10000         (percentage, half up)
//! applied  = min(discount, subtotal)
//! total    = subtotal − applied            (never negative)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CheckoutBlocker, CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::notification::{Notification, NotificationKind, NotificationSink};
use crate::types::{Customer, DiscountRate, Product};

// =============================================================================
// Cart Line
// =============================================================================

/// One product and the quantity being billed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: String,

    /// Name at time of adding (frozen)
    pub name: String,

    /// Batch at time of adding (frozen)
    pub batch_no: String,

    /// Price in cents at time of adding (frozen)
    pub unit_price_cents: i64,

    /// Always ≥ 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line from the catalog's current view of a product.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            batch_no: product.batch_no.clone(),
            unit_price_cents: product.price_cents,
            quantity,
        }
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }

    /// Unit price × quantity, or `None` if it does not fit.
    #[inline]
    pub fn checked_line_total(&self) -> Option<Money> {
        self.unit_price().checked_mul(self.quantity)
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A bill-level discount.
///
/// Serialized the way the front end sends it:
/// `{"mode":"amount","value":150}` or `{"mode":"percentage","value":1000}`
/// (cents and basis points respectively).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum Discount {
    /// Fixed amount off; may not exceed the subtotal.
    Amount(Money),

    /// Percentage of the subtotal; may not exceed 100%.
    Percentage(DiscountRate),
}

impl Discount {
    /// No discount: `{amount, 0}`.
    pub const NONE: Discount = Discount::Amount(Money::zero());

    pub fn is_none(&self) -> bool {
        match self {
            Discount::Amount(amount) => amount.is_zero(),
            Discount::Percentage(rate) => rate.is_zero(),
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Discount::NONE
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discount::Amount(amount) => write!(f, "{}", amount),
            Discount::Percentage(rate) => write!(f, "{}", rate),
        }
    }
}

// =============================================================================
// Pure Calculations
// =============================================================================

/// Sum of `unit_price × quantity` over the lines.
pub fn compute_subtotal(lines: &[CartLine]) -> Money {
    lines.iter().map(CartLine::line_total).sum()
}

/// Checks a discount against the bounds for `subtotal`.
///
/// ## Rules
/// - Percentage: at most 100%
/// - Amount: not negative, at most the subtotal
pub fn validate_discount(discount: Discount, subtotal: Money) -> CoreResult<()> {
    match discount {
        Discount::Percentage(rate) if rate > DiscountRate::MAX => {
            Err(CoreError::percentage_too_large(discount))
        }
        Discount::Amount(amount) if amount.is_negative() => {
            Err(ValidationError::MustNotBeNegative {
                field: "discount".to_string(),
            }
            .into())
        }
        Discount::Amount(amount) if amount > subtotal => {
            Err(CoreError::amount_too_large(discount, subtotal))
        }
        _ => Ok(()),
    }
}

/// The amount a discount takes off `subtotal`, capped at the subtotal.
///
/// ## Example
/// ```rust
/// use medipos_core::billing::{discount_amount, Discount};
/// use medipos_core::money::Money;
/// use medipos_core::types::DiscountRate;
///
/// let subtotal = Money::from_cents(1198);
/// let ten_percent = Discount::Percentage(DiscountRate::from_percent(10));
/// assert_eq!(discount_amount(subtotal, ten_percent).cents(), 120);
/// ```
pub fn discount_amount(subtotal: Money, discount: Discount) -> Money {
    let raw = match discount {
        Discount::Amount(amount) => amount,
        Discount::Percentage(rate) => subtotal.portion(rate),
    };
    raw.min(subtotal).max(Money::zero())
}

/// `subtotal − discount_amount(subtotal, discount)`.
pub fn compute_total(subtotal: Money, discount: Discount) -> Money {
    subtotal - discount_amount(subtotal, discount)
}

// =============================================================================
// Bill
// =============================================================================

/// A bill computed from the session on demand. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Bill {
    pub lines: Vec<CartLine>,
    pub customer: Option<Customer>,
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal_cents: i64,
    pub discount: Discount,
    pub discount_cents: i64,
    pub total_cents: i64,
}

// =============================================================================
// Billing Session
// =============================================================================

/// Cart, discount and selected customer for one billing session.
///
/// ## Invariants
/// - Lines are unique by `product_id` (re-adding increments the quantity)
/// - Every line has quantity ≥ 1; setting ≤ 0 removes the line
/// - A quantity is only accepted if it is ≤ the catalog stock at that moment
/// - The stored discount was within bounds for the subtotal when it was set
/// - Rejected operations leave the session untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingSession {
    lines: Vec<CartLine>,
    discount: Discount,
    customer: Option<Customer>,
}

impl BillingSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        BillingSession::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn discount(&self) -> Discount {
        self.discount
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).fold(0, i64::saturating_add)
    }

    pub fn subtotal(&self) -> Money {
        compute_subtotal(&self.lines)
    }

    pub fn discount_amount(&self) -> Money {
        discount_amount(self.subtotal(), self.discount)
    }

    pub fn total(&self) -> Money {
        compute_total(self.subtotal(), self.discount)
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, through the same stock
    ///   check as [`BillingSession::set_quantity`]
    /// - Product not in cart: new line with quantity 1, priced now
    ///
    /// ## Errors
    /// - `ProductNotFound` if the catalog doesn't know the id
    /// - `InsufficientStock` if one more unit would exceed stock
    /// - `AmountTooLarge` if the subtotal would overflow
    pub fn add(
        &mut self,
        product_id: &str,
        catalog: &dyn Catalog,
        sink: &mut dyn NotificationSink,
    ) -> CoreResult<&CartLine> {
        let product = catalog
            .find_product(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        let index = match self.lines.iter().position(|l| l.product_id == product_id) {
            Some(index) => {
                let requested = self.lines[index].quantity.saturating_add(1);
                check_stock(&product, requested, sink)?;
                let line = CartLine {
                    quantity: requested,
                    ..self.lines[index].clone()
                };
                self.check_subtotal(&line, &product, sink)?;
                self.lines[index].quantity = requested;
                index
            }
            None => {
                check_stock(&product, 1, sink)?;
                self.check_subtotal(&CartLine::from_product(&product, 1), &product, sink)?;
                self.lines.push(CartLine::from_product(&product, 1));
                self.lines.len() - 1
            }
        };

        sink.notify(Notification::success(
            NotificationKind::AddedToCart,
            format!("Added {} to cart", product.name),
        ));
        Ok(&self.lines[index])
    }

    /// Sets a line's quantity exactly.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line (no catalog lookup needed, so a
    ///   delisted product can still be taken out)
    /// - `quantity > stock`: rejected, cart unchanged
    /// - otherwise: the line's quantity becomes `quantity`
    ///
    /// ## Errors
    /// - `ProductNotFound` if the catalog doesn't know the id
    /// - `InsufficientStock` if `quantity` exceeds stock
    /// - `LineNotFound` if the product has no line to update
    /// - `AmountTooLarge` if the subtotal would overflow
    pub fn set_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        catalog: &dyn Catalog,
        sink: &mut dyn NotificationSink,
    ) -> CoreResult<()> {
        if quantity <= 0 {
            self.remove(product_id);
            return Ok(());
        }

        let product = catalog
            .find_product(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;
        check_stock(&product, quantity, sink)?;

        let index = self
            .lines
            .iter()
            .position(|l| l.product_id == product_id)
            .ok_or_else(|| CoreError::LineNotFound(product_id.to_string()))?;
        let line = CartLine {
            quantity,
            ..self.lines[index].clone()
        };
        self.check_subtotal(&line, &product, sink)?;
        self.lines[index].quantity = quantity;
        Ok(())
    }

    /// Rejects `candidate` if the subtotal with it in place of its current
    /// line would not fit in a `Money`.
    fn check_subtotal(
        &self,
        candidate: &CartLine,
        product: &Product,
        sink: &mut dyn NotificationSink,
    ) -> CoreResult<()> {
        let subtotal = self
            .lines
            .iter()
            .filter(|l| l.product_id != candidate.product_id)
            .chain(std::iter::once(candidate))
            .try_fold(Money::zero(), |acc, l| acc.checked_add(l.checked_line_total()?));

        if subtotal.is_some() {
            return Ok(());
        }

        sink.notify(Notification::error(
            NotificationKind::AmountTooLarge,
            "Bill total is too large",
        ));
        Err(CoreError::AmountTooLarge {
            product: product.name.clone(),
            requested: candidate.quantity,
        })
    }

    /// Removes a line. Returns whether anything was removed; calling it
    /// again is a no-op.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    /// Stores a discount if it is within bounds for the current subtotal.
    /// A rejected discount leaves the previous one in place.
    pub fn set_discount(
        &mut self,
        discount: Discount,
        sink: &mut dyn NotificationSink,
    ) -> CoreResult<()> {
        if let Err(err) = validate_discount(discount, self.subtotal()) {
            let message = match discount {
                Discount::Percentage(_) => "Discount percentage cannot exceed 100%",
                Discount::Amount(amount) if amount.is_negative() => {
                    "Discount amount cannot be negative"
                }
                Discount::Amount(_) => "Discount amount cannot exceed subtotal",
            };
            sink.notify(Notification::error(NotificationKind::DiscountRejected, message));
            return Err(err);
        }

        self.discount = discount;
        Ok(())
    }

    pub fn select_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    pub fn clear_customer(&mut self) {
        self.customer = None;
    }

    /// Abandons the sale: no lines, no customer, no discount.
    pub fn clear(&mut self) {
        *self = BillingSession::new();
    }

    /// Computes the bill for the current state.
    pub fn bill(&self) -> Bill {
        let subtotal = self.subtotal();
        let discount_cents = discount_amount(subtotal, self.discount);
        Bill {
            lines: self.lines.clone(),
            customer: self.customer.clone(),
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            subtotal_cents: subtotal.cents(),
            discount: self.discount,
            discount_cents: discount_cents.cents(),
            total_cents: (subtotal - discount_cents).cents(),
        }
    }

    /// Finishes the sale.
    ///
    /// Requires at least one line and a selected customer. On success the
    /// final bill is handed back and the session is reset in one step:
    /// no lines, no customer, discount `{amount, 0}`. Nothing is kept.
    pub fn checkout(&mut self, sink: &mut dyn NotificationSink) -> CoreResult<Bill> {
        let blocker = if self.lines.is_empty() {
            Some(CheckoutBlocker::EmptyCart)
        } else if self.customer.is_none() {
            Some(CheckoutBlocker::NoCustomer)
        } else {
            None
        };

        if let Some(blocker) = blocker {
            let message = match blocker {
                CheckoutBlocker::EmptyCart => "Add at least one item before generating a bill",
                CheckoutBlocker::NoCustomer => "Select a customer before generating a bill",
            };
            sink.notify(Notification::error(NotificationKind::CheckoutRejected, message));
            return Err(CoreError::CheckoutPrecondition(blocker));
        }

        let bill = self.bill();
        *self = BillingSession::new();

        sink.notify(Notification::success(
            NotificationKind::CheckoutComplete,
            "Bill generated successfully",
        ));
        Ok(bill)
    }
}

/// Rejects `requested` if it is more than the product has in stock.
fn check_stock(
    product: &Product,
    requested: i64,
    sink: &mut dyn NotificationSink,
) -> CoreResult<()> {
    if product.has_stock_for(requested) {
        return Ok(());
    }

    sink.notify(Notification::error(
        NotificationKind::StockExceeded,
        format!("Only {} items available in stock", product.stock),
    ));
    Err(CoreError::InsufficientStock {
        product: product.name.clone(),
        available: product.stock,
        requested,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Discard, NotificationLevel};
    use chrono::NaiveDate;

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Medicine {}", id),
            batch_no: format!("B{:03}", id.len()),
            stock,
            expiry: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            price_cents,
            category: "General".to_string(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("P", 599, 150),
            product("Q", 1250, 80),
            product("LOW", 2250, 2),
            product("NONE", 100, 0),
        ]
    }

    fn customer() -> Customer {
        Customer {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            phone: "555-123-4567".to_string(),
            email: None,
            address: None,
        }
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        let mut sink: Vec<Notification> = Vec::new();

        let line = session.add("P", &catalog, &mut sink).unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price_cents, 599);
        assert_eq!(sink[0].kind, NotificationKind::AddedToCart);
        assert_eq!(sink[0].message, "Added Medicine P to cart");
    }

    #[test]
    fn test_repeated_add_counts_only_successful_adds() {
        let catalog = catalog();
        let mut session = BillingSession::new();

        let mut successes = 0;
        for _ in 0..5 {
            if session.add("LOW", &catalog, &mut Discard).is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 2);
        assert_eq!(session.item_count(), 1);
        assert_eq!(session.line("LOW").unwrap().quantity, successes);
    }

    #[test]
    fn test_add_out_of_stock_product_is_rejected() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        let mut sink: Vec<Notification> = Vec::new();

        let err = session.add("NONE", &catalog, &mut sink).unwrap_err();
        assert!(matches!(err, CoreError::InsufficientStock { available: 0, requested: 1, .. }));
        assert!(session.is_empty());
        assert_eq!(sink[0].kind, NotificationKind::StockExceeded);
        assert_eq!(sink[0].level, NotificationLevel::Error);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = BillingSession::new();
        assert_eq!(
            session.add("X", &catalog(), &mut Discard).unwrap_err(),
            CoreError::ProductNotFound("X".to_string())
        );
    }

    #[test]
    fn test_set_quantity_above_stock_never_mutates() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        let before = session.clone();
        let mut sink: Vec<Notification> = Vec::new();

        let err = session.set_quantity("P", 151, &catalog, &mut sink).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientStock {
                product: "Medicine P".to_string(),
                available: 150,
                requested: 151,
            }
        );
        assert_eq!(session, before);
        assert_eq!(sink[0].message, "Only 150 items available in stock");
    }

    #[test]
    fn test_set_quantity_exact() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();

        session.set_quantity("P", 150, &catalog, &mut Discard).unwrap();
        assert_eq!(session.line("P").unwrap().quantity, 150);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes_line() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        session.add("Q", &catalog, &mut Discard).unwrap();

        session.set_quantity("P", 0, &catalog, &mut Discard).unwrap();
        session.set_quantity("Q", -3, &catalog, &mut Discard).unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes_delisted_product() {
        let mut catalog = catalog();
        let mut session = BillingSession::new();
        session.add("Q", &catalog, &mut Discard).unwrap();
        catalog.retain(|p| p.id != "Q");

        session.set_quantity("Q", 0, &catalog, &mut Discard).unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_set_quantity_without_line() {
        let catalog = catalog();
        let mut session = BillingSession::new();

        assert_eq!(
            session.set_quantity("P", 2, &catalog, &mut Discard),
            Err(CoreError::LineNotFound("P".to_string()))
        );
        assert!(session.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();

        assert!(session.remove("P"));
        assert!(!session.remove("P"));
        assert!(!session.remove("never-added"));
        assert!(session.is_empty());
    }

    #[test]
    fn test_subtotal_changes_by_line_contribution() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        session.set_quantity("P", 3, &catalog, &mut Discard).unwrap();
        let before = session.subtotal();

        session.add("Q", &catalog, &mut Discard).unwrap();
        let q_line = session.line("Q").unwrap().line_total();
        assert_eq!(session.subtotal(), before + q_line);

        session.remove("Q");
        assert_eq!(session.subtotal(), before);
        assert_eq!(session.subtotal(), compute_subtotal(session.lines()));
        assert_eq!(before.cents(), 599 * 3);
    }

    #[test]
    fn test_price_is_frozen_when_line_is_created() {
        let mut catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();

        catalog[0].price_cents = 9999;
        session.add("P", &catalog, &mut Discard).unwrap();

        assert_eq!(session.subtotal().cents(), 599 * 2);
    }

    #[test]
    fn test_stock_is_checked_live() {
        let mut catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();

        catalog[0].stock = 1;
        assert!(session.add("P", &catalog, &mut Discard).is_err());
        assert_eq!(session.line("P").unwrap().quantity, 1);
    }

    #[test]
    fn test_percentage_discount_bounds() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        let mut sink: Vec<Notification> = Vec::new();

        let too_much = Discount::Percentage(DiscountRate::from_percent(101));
        assert!(matches!(
            session.set_discount(too_much, &mut sink),
            Err(CoreError::DiscountOutOfBounds { .. })
        ));
        assert_eq!(session.discount(), Discount::NONE);
        assert_eq!(sink[0].kind, NotificationKind::DiscountRejected);

        let everything = Discount::Percentage(DiscountRate::from_percent(100));
        session.set_discount(everything, &mut Discard).unwrap();
        assert_eq!(session.discount_amount(), session.subtotal());
        assert!(session.total().is_zero());
    }

    #[test]
    fn test_amount_discount_bounds() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();

        let exact = Discount::Amount(Money::from_cents(599));
        session.set_discount(exact, &mut Discard).unwrap();

        let over = Discount::Amount(Money::from_cents(600));
        assert!(session.set_discount(over, &mut Discard).is_err());
        assert_eq!(session.discount(), exact);

        let negative = Discount::Amount(Money::from_cents(-1));
        assert!(matches!(
            session.set_discount(negative, &mut Discard),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(session.discount(), exact);
    }

    #[test]
    fn test_total_is_clamped_when_subtotal_shrinks() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        session.add("Q", &catalog, &mut Discard).unwrap();
        session
            .set_discount(Discount::Amount(Money::from_cents(1500)), &mut Discard)
            .unwrap();

        session.remove("Q");
        assert_eq!(session.discount_amount().cents(), 599);
        assert!(session.total().is_zero());
        assert_eq!(session.discount(), Discount::Amount(Money::from_cents(1500)));
    }

    #[test]
    fn test_checkout_requires_items_and_customer() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        let mut sink: Vec<Notification> = Vec::new();

        session.select_customer(customer());
        let before = session.clone();
        assert_eq!(
            session.checkout(&mut sink),
            Err(CoreError::CheckoutPrecondition(CheckoutBlocker::EmptyCart))
        );
        assert_eq!(session, before);

        session.clear_customer();
        session.add("P", &catalog, &mut Discard).unwrap();
        let before = session.clone();
        assert_eq!(
            session.checkout(&mut sink),
            Err(CoreError::CheckoutPrecondition(CheckoutBlocker::NoCustomer))
        );
        assert_eq!(session, before);
        assert!(sink.iter().all(|n| n.kind == NotificationKind::CheckoutRejected));
    }

    #[test]
    fn test_checkout_resets_everything() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        session.select_customer(customer());
        session
            .set_discount(Discount::Percentage(DiscountRate::from_percent(5)), &mut Discard)
            .unwrap();
        let mut sink: Vec<Notification> = Vec::new();

        let bill = session.checkout(&mut sink).unwrap();
        assert_eq!(bill.item_count, 1);
        assert_eq!(bill.customer.as_ref().map(|c| c.id.as_str()), Some("1"));

        assert!(session.is_empty());
        assert!(session.customer().is_none());
        assert_eq!(session.discount(), Discount::Amount(Money::zero()));
        assert_eq!(sink.last().unwrap().kind, NotificationKind::CheckoutComplete);
    }

    #[test]
    fn test_worked_example() {
        let catalog = catalog();
        let mut session = BillingSession::new();

        session.add("P", &catalog, &mut Discard).unwrap();
        session.add("P", &catalog, &mut Discard).unwrap();
        assert_eq!(session.line("P").unwrap().quantity, 2);
        assert_eq!(session.subtotal().cents(), 1198);

        session
            .set_discount(Discount::Percentage(DiscountRate::from_percent(10)), &mut Discard)
            .unwrap();
        // 1.198 → 1.20, 10.782 → 10.78
        assert_eq!(session.discount_amount().cents(), 120);
        assert_eq!(session.total().cents(), 1078);

        session.select_customer(customer());
        let bill = session.checkout(&mut Discard).unwrap();
        assert_eq!(bill.subtotal_cents, 1198);
        assert_eq!(bill.discount_cents, 120);
        assert_eq!(bill.total_cents, 1078);
        assert!(session.is_empty());
        assert_eq!(session.discount(), Discount::NONE);
    }

    #[test]
    fn test_clear_abandons_sale() {
        let catalog = catalog();
        let mut session = BillingSession::new();
        session.add("P", &catalog, &mut Discard).unwrap();
        session.select_customer(customer());

        session.clear();
        assert_eq!(session, BillingSession::new());
    }

    #[test]
    fn test_discount_json_shape() {
        let json = serde_json::to_value(Discount::Percentage(DiscountRate::from_percent(10))).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "percentage", "value": 1000}));

        let parsed: Discount = serde_json::from_str(r#"{"mode":"amount","value":150}"#).unwrap();
        assert_eq!(parsed, Discount::Amount(Money::from_cents(150)));
    }

    #[test]
    fn test_pure_helpers() {
        let subtotal = Money::from_cents(1000);
        assert!(validate_discount(Discount::Percentage(DiscountRate::MAX), subtotal).is_ok());
        assert!(validate_discount(Discount::Amount(Money::from_cents(1001)), subtotal).is_err());
        assert_eq!(compute_total(subtotal, Discount::NONE), subtotal);
        assert_eq!(
            compute_total(subtotal, Discount::Amount(Money::from_cents(250))).cents(),
            750
        );
    }

    #[test]
    fn test_quantity_that_overflows_the_subtotal_is_rejected() {
        let catalog = vec![product("BIG", 4_611_686_018_427_387_904, 3)];
        let mut session = BillingSession::new();
        let mut sink: Vec<Notification> = Vec::new();

        session.add("BIG", &catalog, &mut sink).unwrap();

        let err = session.add("BIG", &catalog, &mut sink).unwrap_err();
        assert!(matches!(err, CoreError::AmountTooLarge { requested: 2, .. }));

        let err = session.set_quantity("BIG", 2, &catalog, &mut sink).unwrap_err();
        assert!(matches!(err, CoreError::AmountTooLarge { requested: 2, .. }));

        assert_eq!(session.line("BIG").unwrap().quantity, 1);
        assert_eq!(session.bill().subtotal_cents, 4_611_686_018_427_387_904);
        assert_eq!(sink.last().unwrap().kind, NotificationKind::AmountTooLarge);
    }

    #[test]
    fn test_new_line_that_overflows_the_subtotal_is_rejected() {
        let catalog = vec![
            product("A", i64::MAX - 10, 1),
            product("B", 11, 1),
        ];
        let mut session = BillingSession::new();

        session.add("A", &catalog, &mut Discard).unwrap();
        let err = session.add("B", &catalog, &mut Discard).unwrap_err();

        assert!(matches!(err, CoreError::AmountTooLarge { requested: 1, .. }));
        assert_eq!(session.item_count(), 1);
        assert!(session.bill().total_cents > 0);
    }
}

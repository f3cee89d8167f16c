//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    5.99 * 2 = 11.98  (sometimes 11.979999999999999)                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    599 cents * 2 = 1198 cents, always                                   │
//! │    Percentages round once, half up, to the cent                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use medipos_core::money::Money;
//!
//! let price = Money::from_cents(599); // $5.99
//! let line = price * 2;               // $11.98
//! assert_eq!(line.cents(), 1198);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps, negative results are visible
/// - **Saturating operators**: `+`, `-`, `*` and `sum` clamp at the i64
///   bounds instead of panicking or wrapping; use the `checked_*` methods
///   where an overflow must be rejected
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: serializes as a bare number of cents
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLine.unit_price ──► CartLine.line_total
///                                                  │
///                         Bill.subtotal ◄──────────┘
///                              │
///                              ├──► discount amount
///                              ▼
///                         Bill.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // Represents $12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let price = Money::from_major_minor(24, 99);
    /// assert_eq!(price.cents(), 2499);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(599);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 1198);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies by a quantity, or `None` if the result does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(599).checked_mul(2), Some(Money::from_cents(1198)));
    /// assert_eq!(Money::from_cents(i64::MAX / 2 + 1).checked_mul(2), None);
    /// ```
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the result does not fit.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `rate` of this amount, rounded half up to the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// i128 keeps large amounts from overflowing before the division.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::money::Money;
    /// use medipos_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(1198);     // $11.98
    /// let rate = DiscountRate::from_percent(10);  // 10%
    ///
    /// // $11.98 × 10% = $1.198 → $1.20
    /// assert_eq!(subtotal.portion(rate).cents(), 120);
    /// ```
    pub fn portion(&self, rate: DiscountRate) -> Money {
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Divides by a count, rounding half up. Returns zero for a zero count.
    ///
    /// Used for average order values.
    pub fn divide_rounded(&self, count: i64) -> Money {
        if count == 0 {
            return Money::zero();
        }
        let cents = (2 * self.0 as i128 + count as i128) / (2 * count as i128);
        Money::from_cents(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// Currency symbol is fixed here; the terminal's `ConfigState` formats with
/// the configured symbol for anything user facing.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (for quantity calculations), saturating.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(5, 99).cents(), 599);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1198)), "$11.98");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(599), Money::from_cents(1250), Money::from_cents(1)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 1850);

        let empty: Vec<Money> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_portion_rounds_half_up() {
        let subtotal = Money::from_cents(1198);
        assert_eq!(subtotal.portion(DiscountRate::from_percent(10)).cents(), 120);
        assert_eq!(subtotal.portion(DiscountRate::from_percent(100)).cents(), 1198);
        assert_eq!(subtotal.portion(DiscountRate::zero()).cents(), 0);

        // $0.05 × 50% = 2.5 cents → 3 cents
        assert_eq!(Money::from_cents(5).portion(DiscountRate::from_percent(50)).cents(), 3);
    }

    #[test]
    fn test_divide_rounded() {
        // $8953.00 over 230 orders = $38.926... → $38.93
        assert_eq!(Money::from_cents(895300).divide_rounded(230).cents(), 3893);
        assert_eq!(Money::from_cents(125075).divide_rounded(32).cents(), 3909);
        assert_eq!(Money::from_cents(1000).divide_rounded(0), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(599);
        assert_eq!(unit_price.multiply_quantity(2).cents(), 1198);
    }

    #[test]
    fn test_overflow_saturates_instead_of_wrapping() {
        let huge = Money::from_cents(4_611_686_018_427_387_904);

        assert_eq!(huge.multiply_quantity(3).cents(), i64::MAX);
        assert_eq!((huge * 2).cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!(
            [huge, huge, Money::from_cents(1)].iter().sum::<Money>().cents(),
            i64::MAX
        );
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
    }

    #[test]
    fn test_checked_arithmetic() {
        let huge = Money::from_cents(4_611_686_018_427_387_904);

        assert_eq!(huge.checked_mul(2), None);
        assert_eq!(huge.checked_mul(1), Some(huge));
        assert_eq!(huge.checked_add(huge), None);
        assert_eq!(
            Money::from_cents(599).checked_add(Money::from_cents(1)),
            Some(Money::from_cents(600))
        );
    }
}

//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    7.50 × 3 × 0.25 = 5.624999999...  ❌ and totals drift               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    750 × 3 × 25 / 100 = 562.5 → 563 cents (explicit half-up rounding)   │
//! │    Same basket, same cents, every time                                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lana_core::money::Money;
//!
//! let price = Money::from_cents(2000); // €20.00
//!
//! let line = price * 3;                        // €60.00
//! let discount = line.percentage(25);          // €15.00
//! assert_eq!((line - discount).cents(), 4500); // €45.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (euro cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: A total can dip below zero if promotions are
///   misconfigured; we keep the sign instead of clamping silently
/// - **Single field tuple struct**: Zero-cost abstraction over i64,
///   serializes as a bare integer
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► LineItem.line_total ──► raw basket total
///                                               │
/// Promotion::evaluate ──► Discount.amount ──────┤ (subtracted)
///                                               ▼
///                                         payable total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use lana_core::money::Money;
    ///
    /// let price = Money::from_cents(750); // €7.50
    /// assert_eq!(price.cents(), 750);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (euros and cents).
    ///
    /// ```rust
    /// use lana_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(7, 50).cents(), 750);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// For negative amounts only the major unit should be negative.
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

    /// Returns the major unit (euros) portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ```rust
    /// use lana_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(500); // €5.00
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 1500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Returns `percent`% of this amount, rounded half-up to the cent.
    ///
    /// ## Implementation
    /// Integer math on `i128`: `(cents * percent + 50) / 100`.
    /// The +50 provides rounding (50/100 = 0.5).
    ///
    /// ```rust
    /// use lana_core::money::Money;
    ///
    /// // 25% of €60.00 = €15.00
    /// assert_eq!(Money::from_cents(6000).percentage(25).cents(), 1500);
    /// // 25% of €22.50 = €5.625 → €5.63
    /// assert_eq!(Money::from_cents(2250).percentage(25).cents(), 563);
    /// ```
    pub fn percentage(&self, percent: u32) -> Money {
        let part = (self.0 as i128 * percent as i128 + 50) / 100;
        Money::from_cents(part as i64)
    }

    /// Returns the amount in major units as a float.
    ///
    /// For display and wire encoding only. Never feed the result back into
    /// arithmetic.
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Human-readable euro formatting, e.g. `€32.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
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
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(7, 50).cents(), 750);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(3250)), "€32.50");
        assert_eq!(format!("{}", Money::from_cents(500)), "€5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-€5.50");
        assert_eq!(format!("{}", Money::zero()), "€0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_cents(250);
        assert_eq!(c.cents(), 1250);
    }

    #[test]
    fn test_sum() {
        let lines = [Money::from_cents(1000), Money::from_cents(2000), Money::from_cents(750)];
        let total: Money = lines.iter().sum();
        assert_eq!(total.cents(), 3750);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(Money::from_cents(6000).percentage(25).cents(), 1500);
        assert_eq!(Money::from_cents(16000).percentage(25).cents(), 4000);
        assert_eq!(Money::from_cents(2250).percentage(25).cents(), 563);
        assert_eq!(Money::from_cents(999).percentage(100).cents(), 999);
        assert!(Money::from_cents(999).percentage(0).is_zero());
    }

    #[test]
    fn test_checked_operations() {
        let max = Money::from_cents(i64::MAX);
        assert!(max.checked_multiply_quantity(2).is_none());
        assert!(max.checked_add(Money::from_cents(1)).is_none());
        assert_eq!(
            Money::from_cents(500).checked_multiply_quantity(4),
            Some(Money::from_cents(2000))
        );
    }

    #[test]
    fn test_to_major_units() {
        assert_eq!(Money::from_cents(2500).to_major_units(), 25.0);
        assert_eq!(Money::from_cents(3250).to_major_units(), 32.5);
        assert_eq!(Money::zero().to_major_units(), 0.0);
    }

    #[test]
    fn test_serializes_as_integer_cents() {
        let json = serde_json::to_string(&Money::from_cents(750)).unwrap();
        assert_eq!(json, "750");
    }
}

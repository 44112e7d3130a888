//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                       │
//! │                                                                   │
//! │  In binary floating point:                                        │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                     │
//! │                                                                   │
//! │  An order with many nested choices repeats that rounding error    │
//! │  until the client total drifts from the server total by a         │
//! │  fraction of a cent - and the server rejects the order.           │
//! │                                                                   │
//! │  OUR SOLUTION: Integer Minor Units                                │
//! │    Every price is an i64 number of minor units (e.g. cents).      │
//! │    All aggregation is exact. Conversion to a decimal happens      │
//! │    once, at the display edge, never inside a calculation.         │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vesta_core::money::Money;
//!
//! // Create from minor units (the only way in)
//! let price = Money::from_minor(1099); // 10.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_minor(500);
//! assert_eq!(total.minor_units(), 1599);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

/// A monetary amount in the smallest currency unit (e.g. cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for refunds and corrections
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a plain integer, matching the wire
///   format where every price field is a minor-unit number
///
/// The currency itself is NOT part of this type. Orders carry an ISO currency
/// code alongside their prices; mixing currencies is a server-side concern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents, agorot, pence, ...).
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is strictly negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales by an item count.
    ///
    /// ## Example
    /// ```rust
    /// use vesta_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(299);
    /// assert_eq!(unit_price.scale(3).minor_units(), 897);
    /// ```
    #[inline]
    pub const fn scale(&self, count: u32) -> Self {
        Money(self.0 * count as i64)
    }

    /// Converts to major units as a float, for display ONLY.
    ///
    /// This is the single sanctioned exit from exact arithmetic. The result
    /// must never feed back into a price calculation.
    #[inline]
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

/// Display implementation shows the amount in major units ("10.99").
///
/// For debugging and example programs. Real UI formatting (symbols,
/// localization) is the embedding application's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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

/// Multiplication by an integer count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        Money(self.0 * count)
    }
}

/// Exact summation, used by the price calculator.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

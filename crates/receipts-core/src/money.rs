//! # Money Module
//!
//! Provides the `Money` type for handling monetary amounts on receipts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As binary floats:                                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    "X.25" may not be an exact multiple of 0.25                          │
//! │                                                                         │
//! │  OUR SOLUTION: Parse decimal strings straight into integer cents        │
//! │    "9.25"  → 925 cents → 925 % 25 == 0  ✅ exact                       │
//! │    "9.00"  → 900 cents → 900 % 100 == 0 ✅ exact                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use receipts_core::money::Money;
//!
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_round_dollar());
//!
//! // NEVER do this:
//! // let bad = Money::from_float(35.35); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of fractional digits accepted in an amount string.
pub const MAX_FRACTION_DIGITS: usize = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A non-negative monetary amount in cents.
///
/// ## Design Decisions
/// - **i64**: Shares arithmetic with the rest of the integer point math
/// - **Constructed by parsing**: amounts arrive as decimal strings, and the
///   parser rejects anything that cannot be held exactly in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount has no cents (`X.00`).
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// assert!(Money::from_cents(900).is_round_dollar());
    /// assert!(!Money::from_cents(925).is_round_dollar());
    /// ```
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.cents_part() == 0
    }

    /// True when the amount is an exact multiple of `step_cents`.
    ///
    /// A zero step never matches.
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// assert!(Money::from_cents(925).is_multiple_of(25));
    /// assert!(!Money::from_cents(926).is_multiple_of(25));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step_cents: i64) -> bool {
        step_cents != 0 && self.0 % step_cents == 0
    }

    /// Multiplies by `numerator / denominator` and rounds the result UP to
    /// the next whole dollar.
    ///
    /// Used for "N% of the price, rounded up" rules without touching floats:
    /// `ceil(12.25 * 0.2)` becomes `ceil_dollars_scaled(1, 5)` = 3.
    ///
    /// ## Example
    /// ```rust
    /// use receipts_core::money::Money;
    ///
    /// let price = Money::from_cents(1225); // $12.25
    /// assert_eq!(price.ceil_dollars_scaled(1, 5), 3); // ceil(2.45)
    ///
    /// let exact = Money::from_cents(1000); // $10.00
    /// assert_eq!(exact.ceil_dollars_scaled(1, 5), 2);
    /// ```
    pub fn ceil_dollars_scaled(&self, numerator: u32, denominator: u32) -> u64 {
        if self.0 <= 0 || numerator == 0 || denominator == 0 {
            return 0;
        }

        // Use i128 to prevent overflow on large amounts
        let scaled = self.0 as i128 * numerator as i128;
        let divisor = 100 * denominator as i128;
        ((scaled + divisor - 1) / divisor) as u64
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Why an amount string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// Empty input.
    Empty,
    /// Something other than `digits[.digits]`.
    Malformed,
    /// More than [`MAX_FRACTION_DIGITS`] digits after the point.
    TooPrecise,
    /// Does not fit in an i64 number of cents.
    Overflow,
}

impl fmt::Display for ParseMoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMoneyError::Empty => write!(f, "amount is empty"),
            ParseMoneyError::Malformed => {
                write!(f, "must be a non-negative decimal such as 12.34")
            }
            ParseMoneyError::TooPrecise => write!(
                f,
                "at most {} digits are allowed after the decimal point",
                MAX_FRACTION_DIGITS
            ),
            ParseMoneyError::Overflow => write!(f, "amount is too large"),
        }
    }
}

impl std::error::Error for ParseMoneyError {}

/// Parses a non-negative decimal string (`"12"`, `"12.3"`, `"12.34"`).
///
/// Signs, exponents, whitespace and a bare `"."` are rejected.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::Malformed);
        }

        let fraction_cents = match fraction {
            None => 0,
            Some(f) if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(ParseMoneyError::Malformed);
            }
            Some(f) if f.len() > MAX_FRACTION_DIGITS => {
                return Err(ParseMoneyError::TooPrecise);
            }
            Some(f) => {
                let digits: i64 = f.parse().map_err(|_| ParseMoneyError::Malformed)?;
                // "5" after the point means 50 cents
                digits * 10i64.pow((MAX_FRACTION_DIGITS - f.len()) as u32)
            }
        };

        let dollars: i64 = whole.parse().map_err(|_| ParseMoneyError::Overflow)?;
        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .map(Money)
            .ok_or(ParseMoneyError::Overflow)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the amount the way receipts write it: `12.34`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

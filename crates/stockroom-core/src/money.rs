//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A running sales total built from floats drifts a little on every      │
//! │  sale, and the drift only shows up once it crosses a display cent.     │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    Prices keep every digit the operator typed (0.005 stays 0.005).     │
//! │    price × quantity and total + amount are exact and checked.          │
//! │    Rounding to two decimals happens only when printing.                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! let price = Money::parse("999.99").unwrap();
//! assert_eq!(price, Money::from_cents(99_999));
//!
//! let line = price.checked_multiply_quantity(2).unwrap();
//! assert_eq!(line.to_string(), "$1999.98");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in major units (dollars), stored as a base-10 decimal.
///
/// ## Design Decisions
/// - **Decimal, not cents**: sub-cent prices are kept exactly
/// - **Signed**: parsing keeps the sign so validation can reject it
/// - **Checked arithmetic only**: no `Add`/`Mul` operators, every sum and
///   product goes through `checked_*` and reports overflow as `None`
///
/// ## Where Money is Used
/// ```text
/// ProductRecord.price ──► record_sale: price × qty ──► SaleReceipt.amount
///                                                  │
///                                                  └──► ledger total_sales
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest display unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an existing decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Parses operator input such as `"1000"`, `"999.9"` or `"0.005"`.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - An optional leading sign is accepted (negative values are rejected
    ///   later by [`crate::validation::validate_price`], not here)
    /// - Any number of fractional digits, kept exactly
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::parse("1000").unwrap(), Money::from_cents(100_000));
    /// assert_eq!(Money::parse("12.5").unwrap(), Money::from_cents(1250));
    /// assert_eq!(Money::parse(".99").unwrap(), Money::from_cents(99));
    /// assert_eq!(Money::parse("12.345").unwrap().to_string(), "$12.35");
    /// assert!(Money::parse("twelve").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Money, ValidationError> {
        let text = input.trim();
        let (sign, unsigned) = match text.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", text.strip_prefix('+').unwrap_or(text)),
        };

        let (major, minor) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        // Decimal's own parser also takes underscores and exponents; operators
        // only get plain digits.
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (major.is_empty() && minor.is_empty()) || !all_digits(major) || !all_digits(minor) {
            return Err(ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: "expected a number such as 999.99".to_string(),
            });
        }

        let major = if major.is_empty() { "0" } else { major };
        let normalized = if minor.is_empty() {
            format!("{sign}{major}")
        } else {
            format!("{sign}{major}.{minor}")
        };

        Decimal::from_str_exact(&normalized)
            .map(Money)
            .map_err(|_| ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            })
    }

    /// Returns the exact stored amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the amount rounded half away from zero to two decimals, with
    /// exactly two fractional digits and no negative zero.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::parse("0.015").unwrap().round_to_cents().to_string(), "0.02");
    /// assert_eq!(Money::parse("7").unwrap().round_to_cents().to_string(), "7.00");
    /// ```
    pub fn round_to_cents(&self) -> Decimal {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }
        rounded
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies money by a quantity, or `None` if the product does not fit.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(100_000); // $1000.00
    /// let sale = unit_price.checked_multiply_quantity(2).unwrap();
    /// assert_eq!(sale, Money::from_cents(200_000)); // $2000.00
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, or `None` if the sum does not fit.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Dollar-sign rendering with two decimals.
///
/// ## Note
/// The menu uses `Config::format_currency` so the symbol is configurable;
/// this impl is for logs and debugging.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.round_to_cents();
        if rounded.is_sign_negative() {
            write!(f, "-${}", rounded.abs())
        } else {
            write!(f, "${}", rounded)
        }
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

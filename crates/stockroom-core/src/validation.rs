//! # Validation Module
//!
//! Input validation for operator-entered values.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Menu (stockroom-cli)                                         │
//! │  ├── Text → number parsing (parse_quantity, Money::parse)              │
//! │  └── THIS MODULE: range and emptiness rules                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Ledger (stockroom-core::ledger)                              │
//! │  ├── Product exists?                                                   │
//! │  └── Enough stock? (atomic check before any write)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The ledger itself accepts any restock quantity; negative restocks are
//! stopped here, before the call.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, validate_sale_quantity};
//!
//! let qty = parse_quantity("3", "quantity").unwrap();
//! validate_sale_quantity(qty).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_NAME_LEN, MAX_PRICE_CENTS, MAX_STOCK_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Lenovo ThinkPad T14").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a whole-number quantity typed by the operator.
///
/// Accepts an optional sign so that `-3` reaches the range check and gets a
/// precise message instead of a format error.
pub fn parse_quantity(input: &str, field: &str) -> ValidationResult<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a whole number".to_string(),
        })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for giveaways)
/// - Must not exceed `MAX_PRICE_CENTS`
/// - Sub-cent digits are fine; they are kept as typed
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() || price > Money::from_cents(MAX_PRICE_CENTS) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_PRICE_CENTS / 100,
        });
    }

    Ok(())
}

/// Validates a restock quantity.
///
/// ## Rules
/// - Zero is allowed (registers a product with no stock yet)
/// - Negative values are rejected
/// - Must not exceed `MAX_STOCK_QUANTITY`
pub fn validate_restock_quantity(qty: i64) -> ValidationResult<()> {
    if !(0..=MAX_STOCK_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_STOCK_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a sale quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `MAX_STOCK_QUANTITY`
///
/// ## User Workflow
/// ```text
/// Operator enters quantity sold: 0
///      │
///      ▼
/// validate_sale_quantity(0) ← THIS FUNCTION
///      │
///      ├── qty <= 0? → "quantity must be positive"
///      │
///      └── OK → ledger.record_sale(name, qty)
/// ```
pub fn validate_sale_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_STOCK_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_STOCK_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("MacBook Air M3").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("5", "quantity").unwrap(), 5);
        assert_eq!(parse_quantity(" 12 ", "quantity").unwrap(), 12);
        assert_eq!(parse_quantity("-3", "quantity").unwrap(), -3);
        assert!(matches!(
            parse_quantity("2.5", "quantity"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(parse_quantity("five", "quantity").is_err());
        assert!(parse_quantity("", "quantity").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(0)).is_ok());
        assert!(validate_price(Money::from_cents(99_999)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
        assert!(validate_price(Money::from_cents(MAX_PRICE_CENTS + 1)).is_err());
        assert!(validate_price(Money::parse("0.005").unwrap()).is_ok());
        assert!(validate_price(Money::parse("10000000.001").unwrap()).is_err());
    }

    #[test]
    fn test_validate_restock_quantity() {
        assert!(validate_restock_quantity(0).is_ok());
        assert!(validate_restock_quantity(10).is_ok());
        assert!(validate_restock_quantity(MAX_STOCK_QUANTITY).is_ok());
        assert!(validate_restock_quantity(-1).is_err());
        assert!(validate_restock_quantity(MAX_STOCK_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_sale_quantity() {
        assert!(validate_sale_quantity(1).is_ok());
        assert!(matches!(
            validate_sale_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_sale_quantity(-2).is_err());
        assert!(matches!(
            validate_sale_quantity(MAX_STOCK_QUANTITY + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}

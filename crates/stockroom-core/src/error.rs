//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stockroom-core errors (this file)                                     │
//! │  ├── CoreError        - Ledger rule violations (NotFound, stock,       │
//! │  │                      arithmetic overflow)                           │
//! │  └── ValidationError  - Input validation failures (InvalidInput)       │
//! │                                                                         │
//! │  stockroom-cli errors (app)                                            │
//! │  └── CliError         - Terminal I/O and configuration failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → menu message → operator           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `CoreError` is recoverable: the menu reports it and keeps looping.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Ledger errors.
///
/// Returned as values from ledger operations; a failed operation never
/// leaves a partial mutation behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// No product with this name has ever been added.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to complete sale.
    ///
    /// ## User Workflow
    /// ```text
    /// Record Sale (qty: 5)
    ///      │
    ///      ▼
    /// Check stock: available=3
    ///      │
    ///      ▼
    /// InsufficientStock { name: "ThinkPad", available: 3, requested: 5 }
    ///      │
    ///      ▼
    /// Menu shows: "Error: Not enough stock for 'ThinkPad'!"
    /// ```
    #[error("Insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A sale amount or the running total no longer fits in `Money`.
    ///
    /// Raised before any write, so the ledger is unchanged.
    #[error("Sale amount for {name} exceeds the supported range")]
    AmountOverflow { name: String },

    /// A stock or cumulative-sales count no longer fits in `i64`.
    #[error("Stock count for {name} exceeds the supported range")]
    QuantityOverflow { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Text could not be read as the expected kind of value.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "ThinkPad X1".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for ThinkPad X1: available 3, requested 5"
        );

        let err = CoreError::ProductNotFound("MacBook".to_string());
        assert_eq!(err.to_string(), "Product not found: MacBook");

        let err = CoreError::AmountOverflow {
            name: "MacBook".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sale amount for MacBook exceeds the supported range"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: 10,
        };
        assert_eq!(err.to_string(), "quantity must be between 0 and 10");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}

//! # CLI Error Types
//!
//! Two kinds of failure reach this crate:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Ledger / validation failure                                           │
//! │  CoreError / ValidationError ──► OperatorError ──► printed, loop on    │
//! │                                                                         │
//! │  Terminal or startup failure                                           │
//! │  io::Error / ConfigError ──────► CliError ───────► process exits       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing the operator types can end the session with an error.

use std::fmt;

use stockroom_core::{CoreError, ValidationError};

use crate::config::ConfigError;

// =============================================================================
// Fatal errors
// =============================================================================

/// Errors that stop the program.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading stdin or writing stdout failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Startup configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias for Results with CliError.
pub type CliResult<T> = Result<T, CliError>;

// =============================================================================
// Operator-facing errors
// =============================================================================

/// A recoverable failure shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorError {
    /// Machine-readable kind, used in log fields
    pub code: ErrorCode,

    /// Line printed to the operator (without the "Error: " prefix)
    pub message: String,
}

/// Error codes for operator-facing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Product name not in the ledger
    NotFound,

    /// Sale larger than available stock
    InsufficientStock,

    /// Input could not be parsed or is out of range
    InvalidInput,

    /// A stock count or money total would leave the supported range
    Overflow,
}

impl OperatorError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        OperatorError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(name: &str) -> Self {
        OperatorError::new(ErrorCode::NotFound, format!("Product '{}' not found!", name))
    }

    /// Creates an invalid-input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        OperatorError::new(ErrorCode::InvalidInput, message)
    }
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.message)
    }
}

/// Converts validation errors to operator errors.
impl From<ValidationError> for OperatorError {
    fn from(err: ValidationError) -> Self {
        OperatorError::invalid(err.to_string())
    }
}

/// Converts core errors to operator errors.
impl From<CoreError> for OperatorError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(name) => OperatorError::not_found(&name),
            CoreError::InsufficientStock { name, .. } => OperatorError::new(
                ErrorCode::InsufficientStock,
                format!("Not enough stock for '{}'!", name),
            ),
            CoreError::AmountOverflow { name } => OperatorError::new(
                ErrorCode::Overflow,
                format!("Sale amount for '{}' is too large to record!", name),
            ),
            CoreError::QuantityOverflow { name } => OperatorError::new(
                ErrorCode::Overflow,
                format!("Stock count for '{}' is too large to record!", name),
            ),
            CoreError::Validation(err) => err.into(),
        }
    }
}

//! # stockroom-core: Inventory Ledger for Stockroom
//!
//! This crate is the **heart** of Stockroom. It holds the product catalog,
//! stock levels and sales revenue for one operator session, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  stockroom-cli (text menu)                      │   │
//! │  │   prompt ──► parse ──► validate ──► ledger call ──► print       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &mut InventoryLedger                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  ledger   │  │   money   │  │   types   │  │ validation│  │   │
//! │  │   │ Inventory │  │   Money   │  │ Product   │  │   rules   │  │   │
//! │  │   │  Ledger   │  │ (decimal) │  │ Receipt   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE OWNER • SYNCHRONOUS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`ledger`] - The `InventoryLedger` state container
//! - [`types`] - Product records, receipts, listings
//! - [`money`] - Money type with checked decimal arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input rules applied by callers before touching the ledger
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::{InventoryLedger, Money};
//!
//! let mut ledger = InventoryLedger::new();
//! ledger.add_product("ThinkPad X1", Money::from_cents(100_000), 5).unwrap();
//!
//! let receipt = ledger.record_sale("ThinkPad X1", 2).unwrap();
//! assert_eq!(receipt.amount, Money::from_cents(200_000));
//! assert_eq!(ledger.available_stock("ThinkPad X1"), Some(3));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use ledger::InventoryLedger;
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum units accepted in a single restock or sale entered at the menu.
///
/// Keeps stock arithmetic far away from `i64` overflow.
pub const MAX_STOCK_QUANTITY: i64 = 1_000_000;

/// Maximum unit price accepted at the menu, in cents ($10,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 1_000_000_000;

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 200;

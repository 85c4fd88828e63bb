//! # Inventory Ledger
//!
//! The single state container for an operator session.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Menu Action            Ledger Call              State Change           │
//! │  ───────────            ───────────              ────────────           │
//! │                                                                         │
//! │  Add Product ─────────► add_product() ─────────► insert or qty += n    │
//! │                                                  (checked)              │
//! │                                                                         │
//! │  Record Sale ─────────► record_sale() ─────────► qty -= n              │
//! │                                                  sales += n             │
//! │                                                  total += price × n     │
//! │                                                  (checked, all or none) │
//! │                                                                         │
//! │  Check Stock ─────────► available_stock() ─────► (read only)           │
//! │                                                                         │
//! │  List Products ───────► list_products() ───────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The ledger is owned by whoever created it and mutated through `&mut self`.
//! There is no interior mutability and no global instance.

use chrono::Utc;
use indexmap::IndexMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{LedgerListing, ProductRecord, SaleReceipt, StockChange};

/// Product catalog, stock levels and sales revenue for one session.
///
/// ## Invariants
/// - Product names are unique (map keys)
/// - Listing order is first-seen order
/// - `record_sale` never leaves `quantity` below zero and never applies a
///   partial update
/// - `total_sales` only grows, and equals the sum of every receipt amount
#[derive(Debug, Clone, Default)]
pub struct InventoryLedger {
    products: IndexMap<String, ProductRecord>,
    total_sales: Money,
}

impl InventoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        InventoryLedger::default()
    }

    /// Adds a new product or restocks an existing one.
    ///
    /// ## Behavior
    /// - Name not seen before: creates a record with `price`, `quantity` and
    ///   zero cumulative sales
    /// - Name already present: adds `quantity` to its stock. `price` is
    ///   ignored; the first price sticks
    ///
    /// The quantity sign is not checked here. Callers that take operator
    /// input run [`crate::validation::validate_restock_quantity`] first.
    ///
    /// ## Errors
    /// - `QuantityOverflow` when the new stock level does not fit in `i64`;
    ///   the record keeps its old quantity
    pub fn add_product(
        &mut self,
        name: &str,
        price: Money,
        quantity: i64,
    ) -> CoreResult<StockChange> {
        if let Some(record) = self.products.get_mut(name) {
            let previous = record.quantity;
            let current = previous
                .checked_add(quantity)
                .ok_or_else(|| CoreError::QuantityOverflow {
                    name: name.to_string(),
                })?;
            record.quantity = current;

            if price != record.price {
                debug!(
                    product = name,
                    kept = %record.price,
                    ignored = %price,
                    "Restock price differs from stocked price; keeping original"
                );
            }

            info!(product = name, previous, current, "Product restocked");
            return Ok(StockChange::Restocked {
                name: name.to_string(),
                previous,
                current,
            });
        }

        self.products
            .insert(name.to_string(), ProductRecord::new(name, price, quantity));

        info!(product = name, %price, quantity, "Product added");
        Ok(StockChange::Created {
            name: name.to_string(),
            quantity,
        })
    }

    /// Records a sale of `quantity` units.
    ///
    /// ## Errors
    /// - `Validation(MustBePositive)` when `quantity <= 0`
    /// - `ProductNotFound` when `name` was never added
    /// - `InsufficientStock` when `quantity` exceeds available stock
    /// - `AmountOverflow` when `price × quantity` or the new running total
    ///   does not fit in `Money`
    /// - `QuantityOverflow` when the cumulative sales count does not fit
    ///
    /// All checks and all arithmetic run before the first write, so a failed
    /// sale changes nothing.
    pub fn record_sale(&mut self, name: &str, quantity: i64) -> CoreResult<SaleReceipt> {
        if quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            }
            .into());
        }

        let record = self
            .products
            .get_mut(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        if !record.can_sell(quantity) {
            debug!(
                product = name,
                available = record.quantity,
                requested = quantity,
                "Sale rejected: insufficient stock"
            );
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available: record.quantity,
                requested: quantity,
            });
        }

        let amount_overflow = || CoreError::AmountOverflow {
            name: name.to_string(),
        };
        let amount = record
            .price
            .checked_multiply_quantity(quantity)
            .ok_or_else(amount_overflow)?;
        let total_sales = self
            .total_sales
            .checked_add(amount)
            .ok_or_else(amount_overflow)?;
        let cumulative_sales = record
            .cumulative_sales
            .checked_add(quantity)
            .ok_or_else(|| CoreError::QuantityOverflow {
                name: name.to_string(),
            })?;

        // can_sell guarantees quantity <= record.quantity, so this cannot wrap
        record.quantity -= quantity;
        record.cumulative_sales = cumulative_sales;
        self.total_sales = total_sales;

        info!(
            product = name,
            quantity,
            %amount,
            remaining = record.quantity,
            "Sale recorded"
        );

        Ok(SaleReceipt {
            id: Uuid::new_v4().to_string(),
            product_name: name.to_string(),
            quantity,
            unit_price: record.price,
            amount,
            sold_at: Utc::now(),
        })
    }

    /// Returns the available quantity, or `None` if the product is unknown.
    pub fn available_stock(&self, name: &str) -> Option<i64> {
        self.products.get(name).map(|record| record.quantity)
    }

    /// Returns a snapshot of every product plus the revenue total.
    ///
    /// `None` means the ledger has no products at all, so the caller can
    /// print a dedicated message instead of an empty table.
    pub fn list_products(&self) -> Option<LedgerListing> {
        if self.products.is_empty() {
            return None;
        }

        Some(LedgerListing {
            products: self.products.values().cloned().collect(),
            total_sales: self.total_sales,
        })
    }

    /// Looks up a single product record.
    pub fn product(&self, name: &str) -> Option<&ProductRecord> {
        self.products.get(name)
    }

    /// Revenue from every accepted sale so far.
    #[inline]
    pub fn total_sales(&self) -> Money {
        self.total_sales
    }

    /// Number of distinct products.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

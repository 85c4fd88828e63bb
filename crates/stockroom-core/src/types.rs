//! # Domain Types
//!
//! Records and result values exchanged with the ledger.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductRecord  │   │   SaleReceipt   │   │  LedgerListing  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  id (UUID)      │   │  products (Vec) │       │
//! │  │  price          │   │  product_name   │   │  total_sales    │       │
//! │  │  quantity       │   │  quantity       │   └─────────────────┘       │
//! │  │  cumulative_    │   │  unit_price     │                              │
//! │  │    sales        │   │  amount         │   ┌─────────────────┐       │
//! │  └─────────────────┘   │  sold_at        │   │   StockChange   │       │
//! │                        └─────────────────┘   │  Created        │       │
//! │                                              │  Restocked      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product Record
// =============================================================================

/// One stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique identifier and map key. Never changes after creation.
    pub name: String,

    /// Unit price fixed at first stocking.
    pub price: Money,

    /// Units currently available.
    pub quantity: i64,

    /// Units ever sold. Only grows.
    pub cumulative_sales: i64,
}

impl ProductRecord {
    /// Creates a fresh record with no sales.
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> Self {
        ProductRecord {
            name: name.into(),
            price,
            quantity,
            cumulative_sales: 0,
        }
    }

    /// Checks whether `quantity` units can be sold right now.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        self.quantity >= quantity
    }
}

// =============================================================================
// Stock Change
// =============================================================================

/// Confirmation returned by `add_product`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StockChange {
    /// A new product record was created.
    Created { name: String, quantity: i64 },

    /// An existing record's quantity was adjusted. The supplied price was
    /// ignored.
    Restocked {
        name: String,
        previous: i64,
        current: i64,
    },
}

impl StockChange {
    /// Name of the product that was touched.
    pub fn name(&self) -> &str {
        match self {
            StockChange::Created { name, .. } | StockChange::Restocked { name, .. } => name,
        }
    }
}

// =============================================================================
// Sale Receipt
// =============================================================================

/// An accepted sale.
///
/// Uses the snapshot pattern: the unit price is frozen at the time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleReceipt {
    /// Unique identifier (UUID v4).
    pub id: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: Money,
    /// `unit_price × quantity`, exact and unrounded.
    pub amount: Money,
    pub sold_at: DateTime<Utc>,
}

// =============================================================================
// Ledger Listing
// =============================================================================

/// Snapshot of every product in first-seen order plus the revenue total.
///
/// Never empty: an empty ledger has no listing at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerListing {
    pub products: Vec<ProductRecord>,
    pub total_sales: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_starts_without_sales() {
        let record = ProductRecord::new("Dell XPS 13", Money::from_cents(120_000), 4);
        assert_eq!(record.cumulative_sales, 0);
        assert_eq!(record.quantity, 4);
        assert!(record.can_sell(4));
        assert!(!record.can_sell(5));
    }

    #[test]
    fn test_stock_change_name() {
        let created = StockChange::Created {
            name: "A".to_string(),
            quantity: 1,
        };
        let restocked = StockChange::Restocked {
            name: "B".to_string(),
            previous: 1,
            current: 3,
        };
        assert_eq!(created.name(), "A");
        assert_eq!(restocked.name(), "B");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ProductRecord::new("HP Spectre", Money::from_cents(99_900), 2);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "HP Spectre",
                "price": "999.00",
                "quantity": 2,
                "cumulativeSales": 0
            })
        );
    }

    #[test]
    fn test_stock_change_serializes_tagged() {
        let change = StockChange::Restocked {
            name: "HP Spectre".to_string(),
            previous: 2,
            current: 5,
        };
        let json = serde_json::to_value(&change).unwrap();
        assert_eq!(json["kind"], "restocked");
        assert_eq!(json["current"], 5);
    }
}

//! # Listing Report
//!
//! Renders a [`LedgerListing`] as the fixed-width product table.
//!
//! ```text
//! Product List:
//! ------------------------------------------------------------
//! Name                 Price      Available  Total Sales
//! ------------------------------------------------------------
//! ThinkPad X1          $1000.00   3          2
//! ------------------------------------------------------------
//! Total Sales Amount: $2000.00
//! ```

use stockroom_core::LedgerListing;

use crate::config::Config;

const RULE_WIDTH: usize = 60;

/// Message printed instead of a table when the ledger has no products.
pub const EMPTY_LEDGER: &str = "No products in stock!";

/// Builds the product table. Every line ends with `\n`; product rows keep
/// the trailing padding of their last column.
pub fn render_listing(listing: &LedgerListing, config: &Config) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("\nProduct List:\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<20} {:<10} {:<10} {}\n",
        "Name", "Price", "Available", "Total Sales"
    ));
    out.push_str(&rule);
    out.push('\n');

    for product in &listing.products {
        out.push_str(&format!(
            "{:<20} {}{:<9} {:<10} {:<10}\n",
            product.name,
            config.currency_symbol,
            config.format_amount(product.price),
            product.quantity,
            product.cumulative_sales
        ));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "Total Sales Amount: {}\n",
        config.format_currency(listing.total_sales)
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{InventoryLedger, Money};

    #[test]
    fn test_render_listing() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("X", Money::from_cents(100_000), 5).unwrap();
        ledger
            .add_product("Chromebook", Money::from_cents(24_950), 10)
            .unwrap();
        ledger.record_sale("X", 2).unwrap();

        let rendered = render_listing(&ledger.list_products().unwrap(), &Config::default());
        let rule = "-".repeat(60);
        let expected = [
            "",
            "Product List:",
            rule.as_str(),
            "Name                 Price      Available  Total Sales",
            rule.as_str(),
            "X                    $1000.00   3          2         ",
            "Chromebook           $249.50    10         0         ",
            rule.as_str(),
            "Total Sales Amount: $2000.00",
        ];
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_render_uses_configured_symbol() {
        let mut ledger = InventoryLedger::new();
        ledger.add_product("X", Money::parse("0.049").unwrap(), 1).unwrap();
        let config = Config {
            currency_symbol: "£".to_string(),
            ..Config::default()
        };

        let rendered = render_listing(&ledger.list_products().unwrap(), &config);
        assert!(rendered.contains("£0.05    "));
        assert!(rendered.ends_with("Total Sales Amount: £0.00\n"));
    }
}

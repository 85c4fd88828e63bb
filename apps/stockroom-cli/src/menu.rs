//! # Interactive Menu
//!
//! Prompt/response loop over any `BufRead` + `Write` pair.
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Menu Round                                       │
//! │                                                                         │
//! │  print choices ──► read choice                                         │
//! │                        │                                                │
//! │      ┌──────────┬──────┴─────┬─────────────┬──────────┐                │
//! │      ▼          ▼            ▼             ▼          ▼                │
//! │  1 Add      2 Sale      3 Stock       4 List      5 Exit               │
//! │  name       name        name          table       farewell             │
//! │  price      qty sold    │             or empty    return               │
//! │  quantity   │           ▼             message                          │
//! │  │          ▼           available_stock                                │
//! │  ▼          record_sale                                                │
//! │  add_product                                                           │
//! │                                                                         │
//! │  Parse/validation failures print a message and start the next round.   │
//! │  End of input ends the session quietly.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use stockroom_core::validation::{
    parse_quantity, validate_price, validate_product_name, validate_restock_quantity,
    validate_sale_quantity,
};
use stockroom_core::{InventoryLedger, Money};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{CliResult, OperatorError};
use crate::report::{render_listing, EMPTY_LEDGER};

/// Whether the loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The text menu driving an [`InventoryLedger`].
pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    config: &'a Config,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a Config) -> Self {
        Menu {
            input,
            output,
            config,
        }
    }

    /// Runs until the operator chooses Exit or input ends.
    ///
    /// ## Errors
    /// Only terminal I/O failures are returned. Every ledger or input error
    /// is printed and the loop continues.
    pub fn run(&mut self, ledger: &mut InventoryLedger) -> CliResult<()> {
        loop {
            self.print_choices()?;

            let Some(choice) = self.prompt("\nEnter your choice (1-5): ")? else {
                debug!("Input closed at menu prompt");
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.add_product(ledger)?,
                "2" => self.record_sale(ledger)?,
                "3" => self.check_stock(ledger)?,
                "4" => self.list_products(ledger)?,
                "5" => {
                    writeln!(self.output, "Thank you for using the {}!", self.config.title)?;
                    Flow::Quit
                }
                other => {
                    debug!(choice = other, "Unknown menu choice");
                    writeln!(self.output, "Invalid choice! Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn print_choices(&mut self) -> CliResult<()> {
        writeln!(self.output, "\n{}", self.config.title)?;
        writeln!(self.output, "1. Add Product")?;
        writeln!(self.output, "2. Record Sale")?;
        writeln!(self.output, "3. Check Stock")?;
        writeln!(self.output, "4. List Products")?;
        writeln!(self.output, "5. Exit")?;
        Ok(())
    }

    /// Writes `label`, then reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for a product name; names are compared after trimming.
    fn prompt_name(&mut self) -> CliResult<Option<String>> {
        Ok(self
            .prompt("Enter product name: ")?
            .map(|name| name.trim().to_string()))
    }

    fn report(&mut self, err: OperatorError) -> CliResult<Flow> {
        debug!(code = ?err.code, message = %err.message, "Operation rejected");
        writeln!(self.output, "{}", err)?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_product(&mut self, ledger: &mut InventoryLedger) -> CliResult<Flow> {
        let Some(name) = self.prompt_name()? else {
            return Ok(Flow::Quit);
        };
        if let Err(err) = validate_product_name(&name) {
            return self.report(err.into());
        }

        let price_label = format!("Enter price: {}", self.config.currency_symbol);
        let Some(price_text) = self.prompt(&price_label)? else {
            return Ok(Flow::Quit);
        };
        let Ok(price) = Money::parse(&price_text) else {
            return self.report(OperatorError::invalid(
                "Please enter valid numbers for price and quantity!",
            ));
        };

        let Some(quantity_text) = self.prompt("Enter quantity: ")? else {
            return Ok(Flow::Quit);
        };
        let Ok(quantity) = parse_quantity(&quantity_text, "quantity") else {
            return self.report(OperatorError::invalid(
                "Please enter valid numbers for price and quantity!",
            ));
        };

        if let Err(err) = validate_price(price).and_then(|_| validate_restock_quantity(quantity)) {
            return self.report(err.into());
        }

        let change = match ledger.add_product(&name, price, quantity) {
            Ok(change) => change,
            Err(err) => return self.report(err.into()),
        };
        info!(?change, "Stock updated from menu");
        writeln!(
            self.output,
            "Product '{}' added/updated successfully!",
            change.name()
        )?;
        Ok(Flow::Continue)
    }

    fn record_sale(&mut self, ledger: &mut InventoryLedger) -> CliResult<Flow> {
        let Some(name) = self.prompt_name()? else {
            return Ok(Flow::Quit);
        };

        let Some(quantity_text) = self.prompt("Enter quantity sold: ")? else {
            return Ok(Flow::Quit);
        };
        let Ok(quantity) = parse_quantity(&quantity_text, "quantity") else {
            return self.report(OperatorError::invalid(
                "Please enter a valid number for quantity!",
            ));
        };
        if let Err(err) = validate_sale_quantity(quantity) {
            return self.report(err.into());
        }

        match ledger.record_sale(&name, quantity) {
            Ok(receipt) => {
                info!(receipt = %receipt.id, "Sale recorded from menu");
                writeln!(
                    self.output,
                    "Sale recorded successfully! Amount: {}",
                    self.config.format_currency(receipt.amount)
                )?;
                Ok(Flow::Continue)
            }
            Err(err) => self.report(err.into()),
        }
    }

    fn check_stock(&mut self, ledger: &InventoryLedger) -> CliResult<Flow> {
        let Some(name) = self.prompt_name()? else {
            return Ok(Flow::Quit);
        };

        match ledger.available_stock(&name) {
            Some(stock) => {
                writeln!(self.output, "Available stock for '{}': {}", name, stock)?;
                Ok(Flow::Continue)
            }
            None => self.report(OperatorError::not_found(&name)),
        }
    }

    fn list_products(&mut self, ledger: &InventoryLedger) -> CliResult<Flow> {
        match ledger.list_products() {
            Some(listing) => write!(self.output, "{}", render_listing(&listing, self.config))?,
            None => writeln!(self.output, "{}", EMPTY_LEDGER)?,
        }
        Ok(Flow::Continue)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

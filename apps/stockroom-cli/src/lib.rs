//! # Stockroom CLI Library
//!
//! Terminal front-end for the stockroom ledger.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── menu.rs         ◄─── Prompt/response loop
//! ├── report.rs       ◄─── Product table rendering
//! └── error.rs        ◄─── Fatal and operator-facing errors
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod report;

use std::io;

use stockroom_core::InventoryLedger;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::CliResult;
use menu::Menu;

/// Runs one interactive session on stdin/stdout.
///
/// ## Startup Sequence
/// 1. Load configuration from `STOCKROOM_*` variables
/// 2. Initialize tracing (stderr)
/// 3. Create an empty ledger
/// 4. Run the menu until Exit or end of input
pub fn run() -> CliResult<()> {
    let config = Config::from_env()?;
    init_tracing(&config);

    info!(title = %config.title, "Starting stockroom session");

    let mut ledger = InventoryLedger::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(stdin.lock(), stdout.lock(), &config).run(&mut ledger)?;

    info!(
        products = ledger.len(),
        total_sales = %ledger.total_sales(),
        "Session ended"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_core=trace` - Show trace for the ledger only
/// - Default: `STOCKROOM_LOG`, or warnings only
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

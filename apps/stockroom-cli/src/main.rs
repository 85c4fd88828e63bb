//! # Stockroom Entry Point
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

fn main() -> ExitCode {
    match stockroom_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stockroom: {}", err);
            ExitCode::FAILURE
        }
    }
}

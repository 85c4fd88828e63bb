//! # Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use stockroom_core::Money;
use tracing_subscriber::EnvFilter;

/// Default menu title, also used in the farewell line.
pub const DEFAULT_TITLE: &str = "Laptop Stock Management System";

/// Longest currency symbol accepted (e.g. "CHF ").
const MAX_SYMBOL_LEN: usize = 4;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Menu title shown above the choices
    pub title: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    /// ## Default Values
    /// - Title: "Laptop Stock Management System"
    /// - Currency: `$`
    /// - Logs: warnings only
    fn default() -> Self {
        Config {
            title: DEFAULT_TITLE.to_string(),
            currency_symbol: "$".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Creates a Config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_TITLE`: Override menu title
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOCKROOM_LOG`: Default log filter (e.g. "stockroom_core=debug")
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a Config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(title) = lookup("STOCKROOM_TITLE") {
            let title = title.trim();
            if title.is_empty() {
                return Err(ConfigError::InvalidValue("STOCKROOM_TITLE".to_string()));
            }
            config.title = title.to_string();
        }

        if let Some(symbol) = lookup("STOCKROOM_CURRENCY_SYMBOL") {
            if symbol.chars().count() > MAX_SYMBOL_LEN {
                return Err(ConfigError::InvalidValue(
                    "STOCKROOM_CURRENCY_SYMBOL".to_string(),
                ));
            }
            config.currency_symbol = symbol;
        }

        if let Some(filter) = lookup("STOCKROOM_LOG") {
            EnvFilter::try_new(&filter)
                .map_err(|_| ConfigError::InvalidValue("STOCKROOM_LOG".to_string()))?;
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Formats an amount with two decimals and no symbol: `1000.00`.
    ///
    /// This is the only place sub-cent digits are rounded away (half away
    /// from zero); the ledger keeps them.
    pub fn format_amount(&self, amount: Money) -> String {
        amount.round_to_cents().to_string()
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_cli::config::Config;
    /// use stockroom_core::Money;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let rounded = amount.round_to_cents();
        if rounded.is_sign_negative() {
            format!("-{}{}", self.currency_symbol, rounded.abs())
        } else {
            format!("{}{}", self.currency_symbol, rounded)
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("STOCKROOM_TITLE", "Shop Floor"),
            ("STOCKROOM_CURRENCY_SYMBOL", "€"),
            ("STOCKROOM_LOG", "stockroom_core=debug"),
        ]))
        .unwrap();
        assert_eq!(config.title, "Shop Floor");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.log_filter, "stockroom_core=debug");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup_from(&[("STOCKROOM_TITLE", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCKROOM_TITLE");

        assert!(Config::from_lookup(lookup_from(&[(
            "STOCKROOM_CURRENCY_SYMBOL",
            "DOLLARS"
        )]))
        .is_err());

        assert!(
            Config::from_lookup(lookup_from(&[("STOCKROOM_LOG", "stockroom=loud")])).is_err()
        );
    }

    #[test]
    fn test_format_currency_positive() {
        let config = Config::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = Config::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config.format_amount(Money::from_cents(-5)), "-0.05");
    }

    #[test]
    fn test_format_rounds_sub_cent_amounts() {
        let config = Config::default();
        let total = Money::parse("0.005")
            .unwrap()
            .checked_multiply_quantity(3)
            .unwrap();
        assert_eq!(config.format_amount(total), "0.02");
        assert_eq!(config.format_currency(total), "$0.02");
        assert_eq!(
            config.format_currency(Money::parse("999.994").unwrap()),
            "$999.99"
        );
        assert_eq!(
            config.format_currency(Money::parse("-0.004").unwrap()),
            "$0.00"
        );
    }

    #[test]
    fn test_format_currency_large() {
        let config = Config::default();
        assert_eq!(
            config.format_currency(Money::from_cents(123456789)),
            "$1234567.89"
        );
    }
}

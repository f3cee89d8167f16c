//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MEDIPOS_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use chrono::{Local, NaiveDate};
use medipos_core::inventory::NEAR_EXPIRY_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// How many days ahead count as "near expiry"
    pub near_expiry_days: u32,

    /// Pinned business date. `None` means the local calendar date.
    pub business_date: Option<NaiveDate>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "MediPOS Pharmacy"
    /// - Currency: USD ($)
    /// - Near expiry: 30 days
    /// - Business date: today
    fn default() -> Self {
        ConfigState {
            store_name: "MediPOS Pharmacy".to_string(),
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            near_expiry_days: NEAR_EXPIRY_WINDOW_DAYS,
            business_date: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MEDIPOS_STORE_NAME`: Override store name
    /// - `MEDIPOS_CURRENCY_SYMBOL`: Override currency symbol
    /// - `MEDIPOS_NEAR_EXPIRY_DAYS`: Override the near-expiry window (e.g., "45")
    /// - `MEDIPOS_TODAY`: Pin the business date (e.g., "2025-09-01")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading variables through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("MEDIPOS_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = lookup("MEDIPOS_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(days) = lookup("MEDIPOS_NEAR_EXPIRY_DAYS") {
            match days.trim().parse::<u32>() {
                Ok(days) => config.near_expiry_days = days,
                Err(_) => warn!(value = %days, "ignoring invalid MEDIPOS_NEAR_EXPIRY_DAYS"),
            }
        }

        if let Some(today) = lookup("MEDIPOS_TODAY") {
            match NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d") {
                Ok(date) => config.business_date = Some(date),
                Err(_) => warn!(value = %today, "ignoring invalid MEDIPOS_TODAY"),
            }
        }

        config
    }

    /// The date expiry checks are made against.
    pub fn today(&self) -> NaiveDate {
        self.business_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1078), "$10.78");
        assert_eq!(config.format_currency(5), "$0.05");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("MEDIPOS_STORE_NAME", "Corner Chemist"),
            ("MEDIPOS_CURRENCY_SYMBOL", "Rs "),
            ("MEDIPOS_NEAR_EXPIRY_DAYS", "45"),
            ("MEDIPOS_TODAY", "2025-09-01"),
        ]));

        assert_eq!(config.store_name, "Corner Chemist");
        assert_eq!(config.format_currency(1250), "Rs 12.50");
        assert_eq!(config.near_expiry_days, 45);
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = ConfigState::from_lookup(lookup(&[
            ("MEDIPOS_NEAR_EXPIRY_DAYS", "soon"),
            ("MEDIPOS_TODAY", "yesterday"),
        ]));

        assert_eq!(config.near_expiry_days, NEAR_EXPIRY_WINDOW_DAYS);
        assert_eq!(config.business_date, None);
    }
}

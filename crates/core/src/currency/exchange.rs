//! Exchange rate table.
//!
//! Rates are expressed as units of a currency per one US dollar. The table is
//! built once at startup and is read-only afterwards.

use std::collections::BTreeMap;

use financial_shared::{AppConfig, AppError, AppResult};

/// Rates shipped with the service, used when no table is configured.
pub const BUILTIN_RATES: [(&str, f64); 5] = [
    ("USD", 1.0),
    ("EUR", 0.83),
    ("JPY", 108.92),
    ("GBP", 0.72),
    ("ILS", 3.25),
];

/// Immutable mapping from currency code to exchange rate.
///
/// Every stored rate is finite and strictly positive, so dividing by a rate
/// obtained from [`RateTable::rate`] is always defined.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
}

impl RateTable {
    /// Creates the built-in table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rates: BUILTIN_RATES
                .iter()
                .map(|(code, rate)| ((*code).to_string(), *rate))
                .collect(),
        }
    }

    /// Creates a table from `(code, rate)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the table is empty, a code repeats,
    /// or a rate is not a finite positive number.
    pub fn from_entries<I, S>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut rates = BTreeMap::new();

        for (code, rate) in entries {
            let code = code.into();
            if !(rate.is_finite() && rate > 0.0) {
                return Err(AppError::Configuration(format!(
                    "exchange rate for {code} must be a positive number, got {rate}"
                )));
            }
            if rates.insert(code.clone(), rate).is_some() {
                return Err(AppError::Configuration(format!(
                    "duplicate exchange rate for {code}"
                )));
            }
        }

        let table = Self { rates };
        if table.is_empty() {
            return Err(AppError::Configuration(
                "exchange rate table is empty".to_string(),
            ));
        }

        Ok(table)
    }

    /// Creates the table described by the configuration, falling back to the
    /// built-in rates when none are configured.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        match &config.rates {
            Some(entries) => {
                Self::from_entries(entries.iter().map(|entry| (entry.code.as_str(), entry.rate)))
            }
            None => Ok(Self::builtin()),
        }
    }

    /// Looks up the rate for a currency code. Matching is case-sensitive.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Returns the supported currency codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Returns the number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

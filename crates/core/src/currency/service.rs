//! Currency service answering USD conversion requests.

use financial_shared::{AppResult, ValidationError};

use super::conversion::{parse_amount, to_usd};
use super::exchange::RateTable;

/// Result of converting an amount into US dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Table rate for the requested currency.
    pub exchange_rate: f64,
    /// The amount expressed in US dollars.
    pub usd_amount: f64,
}

/// Currency service for conversion operations.
pub struct CurrencyService;

impl CurrencyService {
    /// Converts `amount` units of `currency` into US dollars.
    ///
    /// Inputs are the raw request parameters. They are checked in this order:
    /// 1. `currency` must be present
    /// 2. `currency` must be in the table
    /// 3. `amount` must be present and parse as a finite number
    /// 4. the converted amount must be finite
    ///
    /// # Errors
    ///
    /// Returns a validation error for the first check that fails.
    pub fn convert(
        table: &RateTable,
        currency: Option<&str>,
        amount: Option<&str>,
    ) -> AppResult<Conversion> {
        let currency = currency.ok_or(ValidationError::MissingParameter("currency"))?;

        let exchange_rate = table
            .rate(currency)
            .ok_or_else(|| ValidationError::InvalidCurrency(currency.to_string()))?;

        let raw_amount = amount.ok_or(ValidationError::MissingParameter("amount"))?;
        let amount = parse_amount(raw_amount)?;

        // Rates below one can push a finite amount past f64::MAX.
        let usd_amount = to_usd(amount, exchange_rate);
        if !usd_amount.is_finite() {
            return Err(ValidationError::InvalidAmount(raw_amount.to_string()).into());
        }

        Ok(Conversion {
            exchange_rate,
            usd_amount,
        })
    }
}

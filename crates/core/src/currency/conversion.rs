//! Currency conversion logic.
//!
//! Conversion is plain IEEE-754 division. No rounding is applied; callers
//! receive the full `f64` result.

use financial_shared::ValidationError;

/// Converts an amount of a currency into US dollars.
///
/// `rate` is the number of currency units per one US dollar.
#[must_use]
pub fn to_usd(amount: f64, rate: f64) -> f64 {
    amount / rate
}

/// Parses a raw amount string.
///
/// Accepts any literal Rust's `f64` parser accepts after trimming surrounding
/// whitespace, including negative values and scientific notation. Non-finite
/// results (`NaN`, `inf`) are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ValidationError::InvalidAmount(raw.to_string())),
    }
}

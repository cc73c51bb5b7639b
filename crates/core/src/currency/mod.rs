//! Exchange rates and conversion to US dollars.

pub mod conversion;
pub mod exchange;
pub mod service;

#[cfg(test)]
mod props;

pub use conversion::{parse_amount, to_usd};
pub use exchange::RateTable;
pub use service::{Conversion, CurrencyService};

//! Exchange rate conversion route.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use financial_core::currency::{Conversion, CurrencyService};
use serde::Serialize;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the exchange rate routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/exchange_rate", get(get_exchange_rate))
}

/// Raw query parameters in request order. Repeated keys resolve to their
/// first occurrence.
#[derive(Debug)]
pub struct ExchangeRateQuery(Vec<(String, String)>);

impl ExchangeRateQuery {
    /// Returns the first value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Response for a successful conversion.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    /// Units of the requested currency per one US dollar.
    pub exchange_rate: f64,
    /// The requested amount in US dollars.
    pub usd_amount: f64,
}

impl From<Conversion> for ExchangeRateResponse {
    fn from(conversion: Conversion) -> Self {
        Self {
            exchange_rate: conversion.exchange_rate,
            usd_amount: conversion.usd_amount,
        }
    }
}

/// GET `/exchange_rate?currency=..&amount=..` - Convert an amount to US dollars.
async fn get_exchange_rate(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ExchangeRateResponse>, ApiError> {
    let query = ExchangeRateQuery(params);
    info!(params = ?query.0, "Received currency exchange request");

    let conversion =
        CurrencyService::convert(&state.rates, query.get("currency"), query.get("amount"))?;

    Ok(Json(conversion.into()))
}

//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Error to response mapping
//! - Response types

pub mod error;
pub mod routes;

use axum::Router;
use financial_core::currency::RateTable;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Exchange rate table, read-only for the life of the process.
    pub rates: Arc<RateTable>,
}

impl AppState {
    /// Creates state around a rate table.
    #[must_use]
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

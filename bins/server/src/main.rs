//! Financial service
//!
//! Main entry point: converts amounts to US dollars over HTTP.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use financial_api::{AppState, create_router};
use financial_core::currency::RateTable;
use financial_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "financial=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    // Built once, read-only afterwards
    let rates = RateTable::from_config(&config)?;
    info!(
        count = rates.len(),
        currencies = ?rates.codes().collect::<Vec<_>>(),
        "Exchange rate table loaded"
    );

    let app = create_router(AppState::new(rates));

    let addr = config.server.address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

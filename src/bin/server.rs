//! Coastrisk HTTP Server Binary
//!
//! This is the main entry point for the coastal risk REST API server. It
//! loads the model artifacts, sets up the HTTP router, and starts serving
//! requests. With one artifact missing the server runs degraded; with both
//! missing it still binds but every interaction endpoint returns the
//! blocking models-unavailable response.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin coastrisk-server
//!
//! # Point at a different model store
//! MODELS_DIR=/srv/coastrisk/models cargo run --bin coastrisk-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `MODELS_DIR`: Directory holding the model artifacts (default: models)
//! - `COASTRISK_CONFIG`: Optional TOML config file overriding the store setup
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use coastrisk::http::{create_router, AppState};
use coastrisk::services::RiskAssessor;
use coastrisk::store::{ModelSet, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting coastrisk HTTP server");

    // Load model artifacts once at startup
    let config = StoreConfig::resolve()?;
    let models = ModelSet::load(&config);
    let availability = models.availability();
    if !availability.tide {
        warn!("tide_prediction artifact not loaded; tide signal disabled");
    }
    if !availability.coastal {
        warn!("coastal_risk_model artifact not loaded; coastal signal disabled");
    }

    let assessor = match RiskAssessor::new(models) {
        Ok(assessor) => Some(Arc::new(assessor)),
        Err(err) => {
            error!("{}; serving blocked state", err);
            None
        }
    };

    // Create application state and router
    let state = AppState::new(assessor);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

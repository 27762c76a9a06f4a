mod config;
mod errors;
mod planner;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::planner::osnr::{OsnrModel, PenaltyOsnrModel};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting DWDM feasibility API v{}", env!("CARGO_PKG_VERSION"));

    let osnr_model: Arc<dyn OsnrModel> = Arc::new(PenaltyOsnrModel);
    info!("OSNR model: {}", osnr_model.name());

    match &config.cors_allow_origin {
        Some(origin) => info!("CORS restricted to {:?}", origin),
        None => info!("CORS permissive (CORS_ALLOW_ORIGIN not set)"),
    }
    info!("Request timeout: {}s", config.request_timeout_secs);

    let state = AppState {
        config: config.clone(),
        osnr_model,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

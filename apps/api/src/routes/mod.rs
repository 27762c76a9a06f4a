pub mod health;

use std::time::Duration;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
};

use crate::config::Config;
use crate::errors::AppError;
use crate::planner::handlers;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("No such endpoint".to_string())
}

fn cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allow_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.clone())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
        None => CorsLayer::permissive(),
    }
}

pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.request_timeout_secs);
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(health::health_handler))
        // Feasibility API
        .route("/api/v1/feasibility", post(handlers::handle_feasibility))
        .fallback(not_found)
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
}

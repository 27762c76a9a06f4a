use std::sync::Arc;

use crate::config::Config;
use crate::planner::osnr::OsnrModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; each request evaluates against its own input.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable OSNR model. Default: PenaltyOsnrModel.
    pub osnr_model: Arc<dyn OsnrModel>,
}

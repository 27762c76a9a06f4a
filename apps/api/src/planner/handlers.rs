//! Axum route handlers for the Feasibility API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::planner::engine::evaluate;
use crate::planner::models::{FeasibilityRequest, FeasibilityResult};
use crate::state::AppState;

/// POST /api/v1/feasibility
///
/// Validates the topology, runs the power budget and OSNR accumulation, and returns the
/// verdict with its margins and per-span breakdown. Malformed JSON or non-numeric fields
/// are rejected with 400 before the engine runs; topology and parameter errors are 422.
pub async fn handle_feasibility(
    State(state): State<AppState>,
    payload: Result<Json<FeasibilityRequest>, JsonRejection>,
) -> Result<Json<FeasibilityResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected feasibility payload: {}", rejection.body_text());
        AppError::Validation(rejection.body_text())
    })?;

    let result = evaluate(&request, state.osnr_model.as_ref()).map_err(|err| {
        warn!("Feasibility request failed validation: {err}");
        AppError::Planner(err)
    })?;

    info!(
        "Evaluated {} span(s) with {} OSNR model: feasible={} limiting={:?} power_margin={:.2} dB osnr_margin={:.2} dB",
        result.per_span_breakdown.len(),
        state.osnr_model.name(),
        result.feasible,
        result.limiting_factor,
        result.power_margin_db,
        result.osnr_margin_db,
    );

    Ok(Json(result))
}

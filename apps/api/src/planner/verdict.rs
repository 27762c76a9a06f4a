//! Verdict Composer: compares received power and OSNR against their thresholds and
//! assembles the response.
//!
//! # Rules
//! - `feasible` iff both margins are ≥ 0 (a zero margin passes)
//! - only power fails → `POWER`; only OSNR fails → `OSNR`
//! - both fail → the more negative margin is primary, the other is secondary;
//!   an exact tie reports `POWER` as primary
//! - both pass → `NONE`

use crate::planner::models::{
    FeasibilityResult, LimitingFactor, ServiceRequest, SpanContribution,
};
use crate::planner::osnr::OsnrEstimate;
use crate::planner::power_budget::PowerBudget;

/// Primary and (when both constraints fail) secondary limiting factor.
pub fn limiting_factors(
    power_margin_db: f64,
    osnr_margin_db: f64,
) -> (LimitingFactor, Option<LimitingFactor>) {
    let power_ok = power_margin_db >= 0.0;
    let osnr_ok = osnr_margin_db >= 0.0;

    match (power_ok, osnr_ok) {
        (true, true) => (LimitingFactor::None, None),
        (false, true) => (LimitingFactor::Power, None),
        (true, false) => (LimitingFactor::Osnr, None),
        (false, false) if osnr_margin_db < power_margin_db => {
            (LimitingFactor::Osnr, Some(LimitingFactor::Power))
        }
        (false, false) => (LimitingFactor::Power, Some(LimitingFactor::Osnr)),
    }
}

pub fn compose(
    service: &ServiceRequest,
    budget: PowerBudget,
    osnr: OsnrEstimate,
) -> FeasibilityResult {
    let power_margin_db = budget.received_power_dbm - service.receiver_sensitivity_dbm;
    let osnr_margin_db = osnr.osnr_db - service.osnr_threshold_db;
    let (limiting_factor, secondary_limiting_factor) =
        limiting_factors(power_margin_db, osnr_margin_db);

    let per_span_breakdown = budget
        .steps
        .into_iter()
        .zip(osnr.noise.per_span_penalty_db.iter().copied())
        .map(|(step, penalty_db)| SpanContribution {
            loss_db: step.loss.total(),
            from: step.from,
            to: step.to,
            gain_db: step.gain_db,
            penalty_db,
            running_power_dbm: step.running_power_dbm,
        })
        .collect();

    FeasibilityResult {
        feasible: limiting_factor == LimitingFactor::None,
        received_power_dbm: budget.received_power_dbm,
        power_margin_db,
        osnr_db: osnr.osnr_db,
        osnr_margin_db,
        limiting_factor,
        secondary_limiting_factor,
        total_loss_db: budget.total_loss_db,
        total_gain_db: budget.total_gain_db,
        total_penalty_db: osnr.noise.total_penalty_db,
        per_span_breakdown,
    }
}

//! OSNR accumulation: pluggable, trait-based model of end-to-end noise.
//!
//! Default: `PenaltyOsnrModel`, a proxy driven purely by accumulated penalties. The request
//! carries no noise-floor measurement, so the model is
//!
//! ```text
//! total_penalty = noise_penalty_db + Σ amp_penalty_db   (amplified spans only)
//! osnr_db       = tx_power_dbm - total_penalty
//! ```
//!
//! This is an assumption pending a measured backend model, not a physical derivation.
//! Any replacement must stay monotonically non-increasing in accumulated penalty.
//!
//! `AppState` holds an `Arc<dyn OsnrModel>`.

use crate::planner::models::{ServiceRequest, ValidatedSpan};

/// Penalty charged along the path, with the per-span share in path order.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseAccumulation {
    pub per_span_penalty_db: Vec<f64>,
    pub total_penalty_db: f64,
}

/// Output of an OSNR model.
#[derive(Debug, Clone, PartialEq)]
pub struct OsnrEstimate {
    pub osnr_db: f64,
    pub noise: NoiseAccumulation,
}

/// The OSNR model trait. Implement this to swap the noise model without touching the
/// pipeline, handler, or verdict code.
pub trait OsnrModel: Send + Sync {
    fn estimate(&self, service: &ServiceRequest, spans: &[ValidatedSpan]) -> OsnrEstimate;

    /// Short identifier for logs.
    fn name(&self) -> &'static str;
}

/// Sums the flat service penalty and the penalty of every amplifier in use.
pub fn accumulate_penalties(
    service: &ServiceRequest,
    spans: &[ValidatedSpan],
) -> NoiseAccumulation {
    let per_span_penalty_db: Vec<f64> = spans
        .iter()
        .map(|s| if s.is_amplified() { s.amp_penalty_db } else { 0.0 })
        .collect();
    let total_penalty_db = service.noise_penalty_db + per_span_penalty_db.iter().sum::<f64>();

    NoiseAccumulation {
        per_span_penalty_db,
        total_penalty_db,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PenaltyOsnrModel;

impl OsnrModel for PenaltyOsnrModel {
    fn estimate(&self, service: &ServiceRequest, spans: &[ValidatedSpan]) -> OsnrEstimate {
        let noise = accumulate_penalties(service, spans);
        OsnrEstimate {
            osnr_db: service.tx_power_dbm - noise.total_penalty_db,
            noise,
        }
    }

    fn name(&self) -> &'static str {
        "penalty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::fixtures;
    use crate::planner::topology;

    fn estimate(req: &crate::planner::models::FeasibilityRequest) -> OsnrEstimate {
        let path = topology::validate(req).unwrap();
        PenaltyOsnrModel.estimate(&req.service, &path.spans)
    }

    #[test]
    fn test_pass_preset_osnr() {
        let est = estimate(&fixtures::request(&fixtures::PASS));
        // 2 - (3 + 1) = -2
        assert!((est.osnr_db + 2.0).abs() < 1e-9);
        assert!((est.noise.total_penalty_db - 4.0).abs() < 1e-9);
        assert_eq!(est.noise.per_span_penalty_db, vec![1.0]);
    }

    #[test]
    fn test_unamplified_span_charges_no_penalty() {
        let mut req = fixtures::request(&fixtures::PASS);
        req.spans[0].amp_gain_db = 0.0;
        req.spans[0].amp_penalty_db = 7.0;
        let est = estimate(&req);
        assert_eq!(est.noise.per_span_penalty_db, vec![0.0]);
        assert!((est.osnr_db - (2.0 - 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_service_penalty_charged_once() {
        let est = estimate(&fixtures::three_span_request());
        // 3 (service) + 1 + 1 (two amplified spans)
        assert!((est.noise.total_penalty_db - 5.0).abs() < 1e-9);
        assert!((est.osnr_db - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_each_amplifier_lowers_osnr() {
        let mut req = fixtures::three_span_request();
        let before = estimate(&req).osnr_db;
        req.spans[2].amp_gain_db = 6.0;
        let after = estimate(&req).osnr_db;
        assert!(after < before);
    }

    #[test]
    fn test_model_name() {
        assert_eq!(PenaltyOsnrModel.name(), "penalty");
    }
}

use serde::{Deserialize, Serialize};

use crate::planner::coerce;

// ────────────────────────────────────────────────────────────────────────────
// Request (wire) types
// ────────────────────────────────────────────────────────────────────────────

/// A topology vertex. Carries no behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub label: String,
}

/// A directed fiber span as sent by the console. Counts arrive as plain numbers and are
/// checked for integrality by the topology validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Span {
    pub from: String,
    pub to: String,
    #[serde(deserialize_with = "coerce::number")]
    pub length_km: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub connectors: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub splices: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub amp_gain_db: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub amp_penalty_db: f64,
    /// Per-span overrides of the global assumptions.
    #[serde(
        default,
        deserialize_with = "coerce::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub atten_db_per_km: Option<f64>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub conn_loss_db: Option<f64>,
    #[serde(
        default,
        deserialize_with = "coerce::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub splice_loss_db: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServiceRequest {
    #[serde(deserialize_with = "coerce::number")]
    pub tx_power_dbm: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub receiver_sensitivity_dbm: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub osnr_threshold_db: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub noise_penalty_db: f64,
}

/// Physical constants applied to every span unless the span overrides them.
/// Passed per request; never read from process configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Assumptions {
    #[serde(deserialize_with = "coerce::number")]
    pub atten_db_per_km: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub conn_loss_db: f64,
    #[serde(deserialize_with = "coerce::number")]
    pub splice_loss_db: f64,
}

/// Full feasibility request.
///
/// `path` is optional: when absent the spans are taken in input order and must chain
/// end-to-end; when present it lists node ids from source to sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FeasibilityRequest {
    pub nodes: Vec<Node>,
    pub spans: Vec<Span>,
    pub service: ServiceRequest,
    pub assumptions: Assumptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validated domain types
// ────────────────────────────────────────────────────────────────────────────

/// A span that passed validation: endpoints exist, every number is finite, counts are
/// whole and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSpan {
    /// Position of the span in the request's `spans` array.
    pub index: usize,
    pub from: String,
    pub to: String,
    pub length_km: f64,
    pub connectors: u32,
    pub splices: u32,
    pub amp_gain_db: f64,
    pub amp_penalty_db: f64,
    pub atten_db_per_km: Option<f64>,
    pub conn_loss_db: Option<f64>,
    pub splice_loss_db: Option<f64>,
}

impl ValidatedSpan {
    /// An amplifier is in use only when it contributes gain.
    pub fn is_amplified(&self) -> bool {
        self.amp_gain_db > 0.0
    }
}

/// Ordered, validated route from source to sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    pub source: String,
    pub sink: String,
    pub spans: Vec<ValidatedSpan>,
}

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum LimitingFactor {
    Power,
    Osnr,
    None,
}

/// One span's contribution to the budget, in path order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpanContribution {
    pub from: String,
    pub to: String,
    pub loss_db: f64,
    pub gain_db: f64,
    /// Amplifier noise penalty charged on this span (0 when unamplified).
    pub penalty_db: f64,
    /// Power after this span's loss and gain.
    pub running_power_dbm: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeasibilityResult {
    pub feasible: bool,
    pub received_power_dbm: f64,
    pub power_margin_db: f64,
    pub osnr_db: f64,
    pub osnr_margin_db: f64,
    pub limiting_factor: LimitingFactor,
    /// Set only when both constraints fail: the less-violated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_limiting_factor: Option<LimitingFactor>,
    pub total_loss_db: f64,
    pub total_gain_db: f64,
    pub total_penalty_db: f64,
    pub per_span_breakdown: Vec<SpanContribution>,
}

//! Power-Budget Calculator.
//!
//! Walks the resolved path in order, subtracting each span's passive loss and adding its
//! amplifier gain at the span output. Plain dB arithmetic: no clamping, no saturation.
//! An extreme input yields an extreme number, never an error.

use tracing::debug;

use crate::planner::models::{Assumptions, ValidatedSpan};

/// Passive loss of one span, split by contributor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanLoss {
    pub fiber_db: f64,
    pub connector_db: f64,
    pub splice_db: f64,
}

impl SpanLoss {
    pub fn total(&self) -> f64 {
        self.fiber_db + self.connector_db + self.splice_db
    }
}

/// Budget entry for one span.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStep {
    pub from: String,
    pub to: String,
    pub loss: SpanLoss,
    pub gain_db: f64,
    pub running_power_dbm: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerBudget {
    pub received_power_dbm: f64,
    pub total_loss_db: f64,
    pub total_gain_db: f64,
    pub steps: Vec<BudgetStep>,
}

/// Loss of a single span; span-level overrides win over the global assumptions.
pub fn span_loss(span: &ValidatedSpan, assumptions: &Assumptions) -> SpanLoss {
    let atten = span.atten_db_per_km.unwrap_or(assumptions.atten_db_per_km);
    let conn = span.conn_loss_db.unwrap_or(assumptions.conn_loss_db);
    let splice = span.splice_loss_db.unwrap_or(assumptions.splice_loss_db);

    SpanLoss {
        fiber_db: span.length_km * atten,
        connector_db: span.connectors as f64 * conn,
        splice_db: span.splices as f64 * splice,
    }
}

/// Accumulates the budget from launch power to the receiver.
pub fn compute(
    spans: &[ValidatedSpan],
    assumptions: &Assumptions,
    tx_power_dbm: f64,
) -> PowerBudget {
    let mut power = tx_power_dbm;
    let mut total_loss_db = 0.0;
    let mut total_gain_db = 0.0;
    let mut steps = Vec::with_capacity(spans.len());

    for span in spans {
        let loss = span_loss(span, assumptions);
        power -= loss.total();
        total_loss_db += loss.total();

        let gain_db = if span.is_amplified() {
            span.amp_gain_db
        } else {
            0.0
        };
        power += gain_db;
        total_gain_db += gain_db;

        debug!(
            "span #{} {} -> {}: loss {:.3} dB, gain {:.3} dB, power {:.3} dBm",
            span.index,
            span.from,
            span.to,
            loss.total(),
            gain_db,
            power
        );

        steps.push(BudgetStep {
            from: span.from.clone(),
            to: span.to.clone(),
            loss,
            gain_db,
            running_power_dbm: power,
        });
    }

    PowerBudget {
        received_power_dbm: power,
        total_loss_db,
        total_gain_db,
        steps,
    }
}

//! Canonical test vectors: the console's PASS / MEDIUM / FAIL presets expanded into
//! full requests the same way the console builds its payload (two sites, one span,
//! amplifier penalty 1 dB, service noise penalty 3 dB, standard SMF constants).

use crate::planner::models::{Assumptions, FeasibilityRequest, Node, ServiceRequest, Span};

pub struct Preset {
    pub length_km: f64,
    pub connectors: f64,
    pub splices: f64,
    pub amp_gain_db: f64,
    pub tx_power_dbm: f64,
    pub receiver_sensitivity_dbm: f64,
    pub osnr_threshold_db: f64,
}

pub const PASS: Preset = Preset {
    length_km: 50.0,
    connectors: 2.0,
    splices: 6.0,
    amp_gain_db: 20.0,
    tx_power_dbm: 2.0,
    receiver_sensitivity_dbm: -28.0,
    osnr_threshold_db: 12.0,
};

pub const MEDIUM: Preset = Preset {
    length_km: 80.0,
    connectors: 4.0,
    splices: 10.0,
    amp_gain_db: 15.0,
    tx_power_dbm: 1.0,
    receiver_sensitivity_dbm: -24.0,
    osnr_threshold_db: 13.0,
};

pub const FAIL: Preset = Preset {
    length_km: 120.0,
    connectors: 6.0,
    splices: 15.0,
    amp_gain_db: 5.0,
    tx_power_dbm: 0.0,
    receiver_sensitivity_dbm: -20.0,
    osnr_threshold_db: 20.0,
};

pub fn node(id: &str) -> Node {
    Node {
        id: id.to_string(),
        label: format!("Site {id}"),
    }
}

pub fn span(from: &str, to: &str, length_km: f64, connectors: f64, splices: f64) -> Span {
    Span {
        from: from.to_string(),
        to: to.to_string(),
        length_km,
        connectors,
        splices,
        amp_gain_db: 0.0,
        amp_penalty_db: 1.0,
        atten_db_per_km: None,
        conn_loss_db: None,
        splice_loss_db: None,
    }
}

pub fn standard_assumptions() -> Assumptions {
    Assumptions {
        atten_db_per_km: 0.22,
        conn_loss_db: 0.5,
        splice_loss_db: 0.1,
    }
}

pub fn request(preset: &Preset) -> FeasibilityRequest {
    let mut s = span(
        "A",
        "B",
        preset.length_km,
        preset.connectors,
        preset.splices,
    );
    s.amp_gain_db = preset.amp_gain_db;

    FeasibilityRequest {
        nodes: vec![node("A"), node("B")],
        spans: vec![s],
        service: ServiceRequest {
            tx_power_dbm: preset.tx_power_dbm,
            receiver_sensitivity_dbm: preset.receiver_sensitivity_dbm,
            osnr_threshold_db: preset.osnr_threshold_db,
            noise_penalty_db: 3.0,
        },
        assumptions: standard_assumptions(),
        path: None,
    }
}

/// A → B → C → D chain with amplifiers on the first two spans.
pub fn three_span_request() -> FeasibilityRequest {
    let mut ab = span("A", "B", 80.0, 2.0, 8.0);
    ab.amp_gain_db = 18.0;
    let mut bc = span("B", "C", 60.0, 2.0, 6.0);
    bc.amp_gain_db = 14.0;
    let cd = span("C", "D", 20.0, 2.0, 2.0);

    FeasibilityRequest {
        nodes: vec![node("A"), node("B"), node("C"), node("D")],
        spans: vec![ab, bc, cd],
        service: ServiceRequest {
            tx_power_dbm: 20.0,
            receiver_sensitivity_dbm: -24.0,
            osnr_threshold_db: 12.0,
            noise_penalty_db: 3.0,
        },
        assumptions: standard_assumptions(),
        path: None,
    }
}

//! Topology Validator: first stage of the feasibility pipeline.
//!
//! Checks that the node/span graph is well-formed, that every numeric input is usable,
//! and resolves the ordered span sequence for the service. Nothing downstream runs
//! unless this stage succeeds, so a rejected request never produces a partial result.
//!
//! # Path resolution
//! - Without an explicit `path`, the spans are the path in input order. Consecutive spans
//!   must share an endpoint (`spans[i].to == spans[i + 1].from`); they are never reordered.
//! - With a `path` of node ids, each consecutive pair resolves to the first declared span
//!   with that `from`/`to`. Parallel spans are allowed; later ones are simply not chosen.

use std::collections::HashSet;

use crate::planner::error::{PlannerError, Result};
use crate::planner::models::{
    Assumptions, FeasibilityRequest, ResolvedPath, ServiceRequest, Span, ValidatedSpan,
};

/// Validates the whole request and returns the resolved path.
pub fn validate(request: &FeasibilityRequest) -> Result<ResolvedPath> {
    if request.nodes.is_empty() {
        return Err(PlannerError::EmptyTopology { what: "nodes" });
    }
    if request.spans.is_empty() {
        return Err(PlannerError::EmptyTopology { what: "spans" });
    }

    let node_ids = collect_node_ids(request)?;

    for (index, span) in request.spans.iter().enumerate() {
        for endpoint in [&span.from, &span.to] {
            if !node_ids.contains(endpoint.as_str()) {
                return Err(PlannerError::UnknownNode {
                    id: endpoint.clone(),
                    span: span_label(index, span),
                });
            }
        }
    }

    let spans = request
        .spans
        .iter()
        .enumerate()
        .map(|(index, span)| validate_span(index, span))
        .collect::<Result<Vec<_>>>()?;

    validate_service(&request.service)?;
    validate_assumptions(&request.assumptions)?;
    bounded_gain(request.service.tx_power_dbm, &spans)?;

    match &request.path {
        Some(path) => resolve_explicit(path, &node_ids, &spans),
        None => resolve_in_order(spans),
    }
}

fn collect_node_ids(request: &FeasibilityRequest) -> Result<HashSet<&str>> {
    let mut ids = HashSet::with_capacity(request.nodes.len());
    for (i, node) in request.nodes.iter().enumerate() {
        if node.id.trim().is_empty() {
            return Err(PlannerError::invalid(
                format!("nodes[{i}].id"),
                &node.id,
                "must not be blank",
            ));
        }
        if !ids.insert(node.id.as_str()) {
            return Err(PlannerError::invalid(
                format!("nodes[{i}].id"),
                &node.id,
                "duplicate node id",
            ));
        }
    }
    Ok(ids)
}

fn span_label(index: usize, span: &Span) -> String {
    format!("spans[{index}] ({} -> {})", span.from, span.to)
}

fn validate_span(index: usize, span: &Span) -> Result<ValidatedSpan> {
    let field = |name: &str| format!("spans[{index}].{name}");

    let length_km = non_negative(&field("length_km"), span.length_km)?;
    let connectors = whole_count(&field("connectors"), span.connectors)?;
    let splices = whole_count(&field("splices"), span.splices)?;
    let amp_gain_db = non_negative(&field("amp_gain_db"), span.amp_gain_db)?;
    let amp_penalty_db = non_negative(&field("amp_penalty_db"), span.amp_penalty_db)?;

    let atten_db_per_km = span
        .atten_db_per_km
        .map(|v| non_negative(&field("atten_db_per_km"), v))
        .transpose()?;
    let conn_loss_db = span
        .conn_loss_db
        .map(|v| non_negative(&field("conn_loss_db"), v))
        .transpose()?;
    let splice_loss_db = span
        .splice_loss_db
        .map(|v| non_negative(&field("splice_loss_db"), v))
        .transpose()?;

    Ok(ValidatedSpan {
        index,
        from: span.from.clone(),
        to: span.to.clone(),
        length_km,
        connectors,
        splices,
        amp_gain_db,
        amp_penalty_db,
        atten_db_per_km,
        conn_loss_db,
        splice_loss_db,
    })
}

fn validate_service(service: &ServiceRequest) -> Result<()> {
    finite("service.tx_power_dbm", service.tx_power_dbm)?;
    finite(
        "service.receiver_sensitivity_dbm",
        service.receiver_sensitivity_dbm,
    )?;
    finite("service.osnr_threshold_db", service.osnr_threshold_db)?;
    non_negative("service.noise_penalty_db", service.noise_penalty_db)?;
    Ok(())
}

fn validate_assumptions(assumptions: &Assumptions) -> Result<()> {
    non_negative("assumptions.atten_db_per_km", assumptions.atten_db_per_km)?;
    non_negative("assumptions.conn_loss_db", assumptions.conn_loss_db)?;
    non_negative("assumptions.splice_loss_db", assumptions.splice_loss_db)?;
    Ok(())
}

/// Launch power plus accumulated amplifier gain must stay finite. Running power may
/// still overflow to -inf through loss, but never meets +inf, so it is never NaN.
fn bounded_gain(tx_power_dbm: f64, spans: &[ValidatedSpan]) -> Result<()> {
    let total: f64 = spans.iter().map(|s| s.amp_gain_db).sum();
    if (tx_power_dbm.max(0.0) + total).is_finite() {
        Ok(())
    } else {
        Err(PlannerError::invalid(
            "spans[*].amp_gain_db",
            total,
            "accumulated amplifier gain overflows",
        ))
    }
}

fn finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlannerError::invalid(field, value, "must be a finite number"))
    }
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(PlannerError::invalid(field, value, "must be non-negative"));
    }
    Ok(value)
}

fn whole_count(field: &str, value: f64) -> Result<u32> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 {
        return Err(PlannerError::invalid(field, value, "must be a whole number"));
    }
    if value > u32::MAX as f64 {
        return Err(PlannerError::invalid(field, value, "count is too large"));
    }
    Ok(value as u32)
}

fn resolve_in_order(spans: Vec<ValidatedSpan>) -> Result<ResolvedPath> {
    for pair in spans.windows(2) {
        if pair[0].to != pair[1].from {
            return Err(PlannerError::DisconnectedPath {
                from: pair[0].to.clone(),
                to: pair[1].from.clone(),
            });
        }
    }

    // `validate` rejects an empty span list before we get here.
    let source = spans.first().map(|s| s.from.clone()).unwrap_or_default();
    let sink = spans.last().map(|s| s.to.clone()).unwrap_or_default();

    Ok(ResolvedPath {
        source,
        sink,
        spans,
    })
}

fn resolve_explicit(
    path: &[String],
    node_ids: &HashSet<&str>,
    spans: &[ValidatedSpan],
) -> Result<ResolvedPath> {
    for (i, id) in path.iter().enumerate() {
        if !node_ids.contains(id.as_str()) {
            return Err(PlannerError::UnknownNode {
                id: id.clone(),
                span: format!("path[{i}]"),
            });
        }
    }

    let (source, sink) = match (path.first(), path.last()) {
        (Some(first), Some(last)) if path.len() >= 2 => (first.clone(), last.clone()),
        _ => {
            let only = path.first().cloned().unwrap_or_default();
            return Err(PlannerError::DisconnectedPath {
                from: only.clone(),
                to: only,
            });
        }
    };

    let resolved = path
        .windows(2)
        .map(|hop| {
            spans
                .iter()
                .find(|s| s.from == hop[0] && s.to == hop[1])
                .cloned()
                .ok_or_else(|| PlannerError::DisconnectedPath {
                    from: hop[0].clone(),
                    to: hop[1].clone(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ResolvedPath {
        source,
        sink,
        spans: resolved,
    })
}

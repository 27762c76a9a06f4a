//! Feasibility pipeline: Topology Validator → Power-Budget Calculator → OSNR/Verdict.
//!
//! Pure and synchronous. Each call reads only its own request and allocates its own
//! result, so concurrent calls need no coordination.

use tracing::debug;

use crate::planner::error::Result;
use crate::planner::models::{FeasibilityRequest, FeasibilityResult};
use crate::planner::osnr::OsnrModel;
use crate::planner::{power_budget, topology, verdict};

/// Runs the full pipeline with the given OSNR model.
pub fn evaluate(
    request: &FeasibilityRequest,
    model: &dyn OsnrModel,
) -> Result<FeasibilityResult> {
    let path = topology::validate(request)?;
    debug!(
        "Resolved path {} -> {} over {} span(s)",
        path.source,
        path.sink,
        path.spans.len()
    );

    let budget = power_budget::compute(
        &path.spans,
        &request.assumptions,
        request.service.tx_power_dbm,
    );
    let osnr = model.estimate(&request.service, &path.spans);

    Ok(verdict::compose(&request.service, budget, osnr))
}

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Validation failures raised by the planner before any power or OSNR arithmetic runs.
/// Every variant is terminal for the request that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlannerError {
    #[error("Span {span} references unknown node '{id}'")]
    UnknownNode { id: String, span: String },

    #[error("Topology has no {what}")]
    EmptyTopology { what: &'static str },

    #[error("No path connects '{from}' to '{to}'")]
    DisconnectedPath { from: String, to: String },

    #[error("Invalid parameter {field} = {value}: {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    pub fn invalid(field: impl Into<String>, value: impl ToString, reason: &'static str) -> Self {
        PlannerError::InvalidParameter {
            field: field.into(),
            value: value.to_string(),
            reason,
        }
    }

    /// Stable machine-readable code used in the HTTP error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            PlannerError::UnknownNode { .. } => "UNKNOWN_NODE",
            PlannerError::EmptyTopology { .. } => "EMPTY_TOPOLOGY",
            PlannerError::DisconnectedPath { .. } => "DISCONNECTED_PATH",
            PlannerError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }

    /// Structured detail (offending field / id) so the console can render a precise message.
    pub fn details(&self) -> Value {
        match self {
            PlannerError::UnknownNode { id, span } => json!({ "node_id": id, "span": span }),
            PlannerError::EmptyTopology { what } => json!({ "missing": what }),
            PlannerError::DisconnectedPath { from, to } => json!({ "from": from, "to": to }),
            PlannerError::InvalidParameter {
                field,
                value,
                reason,
            } => json!({ "field": field, "value": value, "reason": reason }),
        }
    }
}

/// Serialized form of a planner error, as embedded in API error bodies.
#[derive(Debug, Serialize)]
pub struct PlannerErrorBody {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

impl From<&PlannerError> for PlannerErrorBody {
    fn from(err: &PlannerError) -> Self {
        PlannerErrorBody {
            code: err.code(),
            message: err.to_string(),
            details: err.details(),
        }
    }
}

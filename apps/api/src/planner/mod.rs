// Optical link-budget and OSNR feasibility engine.
// Pipeline: topology validation → power budget → OSNR accumulation → verdict.
// Everything below `handlers` is pure and synchronous.

pub mod coerce;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod models;
pub mod osnr;
pub mod power_budget;
pub mod topology;
pub mod verdict;

#[cfg(test)]
pub mod fixtures;

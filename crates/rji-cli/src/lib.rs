//! CLI library components for RJI reconciliation.

pub mod config;
pub mod fields;
pub mod logging;

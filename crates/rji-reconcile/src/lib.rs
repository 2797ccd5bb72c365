//! Reconciliation of participant registrations against companion
//! registrations.
//!
//! The engine is a pure function of the two source datasets: every run
//! rebuilds the companion index and recomputes every output row, and the
//! result replaces the previous reconciliation dataset in full.

pub mod engine;
pub mod error;
pub mod index;
pub mod observation;
pub mod run;
pub mod summary;

pub use engine::{reconcile, reconcile_participant};
pub use error::{ReconcileError, Result};
pub use index::{CompanionEntry, CompanionIndex, build_companion_index};
pub use observation::Observation;
pub use run::{
    ReconciliationRun, load_reconciliation, update_reconciliation, update_reconciliation_at,
};
pub use summary::ReconciliationSummary;

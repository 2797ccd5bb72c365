use std::path::PathBuf;

use rji_model::ReconciliationRow;
use rji_reconcile::ReconciliationSummary;

#[derive(Debug)]
pub struct ReconcileOutcome {
    pub data_dir: PathBuf,
    pub output_dataset: String,
    pub summary: ReconciliationSummary,
    pub companions_indexed: usize,
    pub duplicate_companions: usize,
    pub rows: Vec<ReconciliationRow>,
}

//! Read-read-compute-write entry points.

use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use rji_ingest::{CsvRowStore, RowStore};
use rji_model::{
    COMPANION_COLUMNS, CompanionRecord, DatasetNames, DatasetTable, PARTICIPANT_COLUMNS,
    ParticipantRecord, RECONCILIATION_COLUMNS, ReconciliationRow,
};

use crate::engine::reconcile_participant;
use crate::index::build_companion_index;
use crate::summary::ReconciliationSummary;
use crate::{ReconcileError, Result};

/// Outcome of one reconciliation run.
#[derive(Debug, Clone)]
pub struct ReconciliationRun {
    pub rows: Vec<ReconciliationRow>,
    pub summary: ReconciliationSummary,
    pub companions_indexed: usize,
    pub duplicate_companions: usize,
}

/// Recomputes the reconciliation dataset from the current source datasets.
///
/// Both sources are read, every participant is classified, and the output
/// dataset is replaced in full. A failure before the write leaves the
/// previous output untouched. Nothing guards against a source changing
/// between the reads and the write.
pub fn update_reconciliation<S: RowStore + ?Sized>(
    store: &mut S,
    names: &DatasetNames,
) -> Result<ReconciliationRun> {
    let span = info_span!("reconcile", output = %names.reconciliation);
    let _guard = span.enter();
    let started = Instant::now();

    let participants_table = store.fetch_all_rows(&names.participants, PARTICIPANT_COLUMNS)?;
    let companions_table = store.fetch_all_rows(&names.companions, COMPANION_COLUMNS)?;
    let participants: Vec<ParticipantRecord> = participants_table
        .records()
        .map(ParticipantRecord::from_record)
        .collect();
    let companions: Vec<CompanionRecord> = companions_table
        .records()
        .map(CompanionRecord::from_record)
        .collect();

    let index = build_companion_index(&companions);
    let rows: Vec<ReconciliationRow> = participants
        .iter()
        .map(|participant| reconcile_participant(participant, &index))
        .collect();

    let mut output = DatasetTable::new(
        names.reconciliation.as_str(),
        RECONCILIATION_COLUMNS.iter().copied(),
    );
    for row in &rows {
        output.push_row(row.to_cells());
    }
    store.replace_all_rows(&output)?;

    let summary = ReconciliationSummary::from_rows(&rows);
    info!(
        participants = participants.len(),
        companions = companions.len(),
        rows = rows.len(),
        minors = summary.minors,
        guardian_missing = summary.guardian_missing,
        duration_ms = started.elapsed().as_millis(),
        "reconciliation written"
    );
    Ok(ReconciliationRun {
        rows,
        summary,
        companions_indexed: index.len(),
        duplicate_companions: index.overwritten_documents().len(),
    })
}

/// Runs reconciliation against the CSV store at `location` with the default
/// dataset names and returns the number of rows written.
pub fn update_reconciliation_at(location: &Path) -> Result<usize> {
    let mut store = CsvRowStore::open(location)?;
    let run = update_reconciliation(&mut store, &DatasetNames::default())?;
    Ok(run.rows.len())
}

/// Reads back the stored reconciliation dataset without recomputing it.
pub fn load_reconciliation<S: RowStore + ?Sized>(
    store: &S,
    names: &DatasetNames,
) -> Result<Vec<ReconciliationRow>> {
    let table = store.fetch_all_rows(&names.reconciliation, RECONCILIATION_COLUMNS)?;
    table
        .records()
        .enumerate()
        .map(|(row, record)| {
            ReconciliationRow::from_record(record)
                .map_err(|source| ReconcileError::InvalidOutputRow { row: row + 1, source })
        })
        .collect()
}

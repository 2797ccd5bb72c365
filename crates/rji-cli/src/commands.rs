use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use rji_ingest::{CsvRowStore, append_row, ensure_datasets, set_value_by_key};
use rji_model::columns::{companion, participant};
use rji_model::{
    DatasetKind, PARTICIPANT_COLUMNS, check_companion_submission, check_participant_submission,
};
use rji_reconcile::{ReconciliationSummary, load_reconciliation, update_reconciliation};
use rji_cli::config::{RjiConfig, load_config};
use rji_cli::fields::parse_fields;
use rji_cli::logging::redact_value;

use crate::cli::{AppendArgs, ColumnsArgs, DataDirArgs, ReconcileArgs, SetLinkArgs, ShowArgs};
use crate::summary::apply_table_style;
use crate::types::ReconcileOutcome;

fn open_store(data_dir: &Path) -> Result<CsvRowStore> {
    CsvRowStore::open(data_dir).with_context(|| format!("open data dir {}", data_dir.display()))
}

pub fn run_init(args: &DataDirArgs, config_path: Option<&Path>) -> Result<Vec<String>> {
    let config = load_config(config_path, &args.data_dir)?;
    let mut store = CsvRowStore::create(&args.data_dir)
        .with_context(|| format!("create data dir {}", args.data_dir.display()))?;
    let created = ensure_datasets(&mut store, &config.datasets).context("create datasets")?;
    info!(created = created.len(), "init complete");
    Ok(created)
}

pub fn run_reconcile(args: &ReconcileArgs, config_path: Option<&Path>) -> Result<ReconcileOutcome> {
    let data_dir = &args.location.data_dir;
    let config = load_config(config_path, data_dir)?;
    reconcile_in(data_dir, &config)
}

fn reconcile_in(data_dir: &Path, config: &RjiConfig) -> Result<ReconcileOutcome> {
    let mut store = open_store(data_dir)?;
    let run = update_reconciliation(&mut store, &config.datasets)
        .context("update reconciliation dataset")?;
    Ok(ReconcileOutcome {
        data_dir: data_dir.to_path_buf(),
        output_dataset: config.datasets.reconciliation.clone(),
        summary: run.summary,
        companions_indexed: run.companions_indexed,
        duplicate_companions: run.duplicate_companions,
        rows: run.rows,
    })
}

pub fn run_show(args: &ShowArgs, config_path: Option<&Path>) -> Result<ReconcileOutcome> {
    let data_dir = &args.location.data_dir;
    let config = load_config(config_path, data_dir)?;
    let store = open_store(data_dir)?;
    let rows = load_reconciliation(&store, &config.datasets)
        .context("read reconciliation dataset")?;
    Ok(ReconcileOutcome {
        data_dir: data_dir.clone(),
        output_dataset: config.datasets.reconciliation.clone(),
        summary: ReconciliationSummary::from_rows(&rows),
        companions_indexed: 0,
        duplicate_companions: 0,
        rows,
    })
}

/// Stores one registration; returns the reconciliation outcome when
/// `--reconcile` was given.
pub fn run_append(args: &AppendArgs, config_path: Option<&Path>) -> Result<Option<ReconcileOutcome>> {
    let data_dir = &args.location.data_dir;
    let config = load_config(config_path, data_dir)?;
    let kind = args.kind.dataset_kind();
    let span = info_span!("append", kind = %kind);
    let _guard = span.enter();

    let mut values = parse_fields(&args.fields, kind.columns())?;
    let (document, timestamp_column) = match kind {
        DatasetKind::Participants => {
            let age_group = check_participant_submission(&values)?;
            values.insert(
                participant::IS_ADULT.to_string(),
                age_group.as_str().to_string(),
            );
            let document = values.get(participant::DOCUMENT).cloned();
            (document, participant::TIMESTAMP)
        }
        _ => {
            check_companion_submission(&values)?;
            (values.get(companion::DOCUMENT).cloned(), companion::TIMESTAMP)
        }
    };
    let document = document.unwrap_or_default();
    values
        .entry(timestamp_column.to_string())
        .or_insert_with(|| Local::now().format("%Y-%m-%dT%H:%M:%S").to_string());

    let mut store = open_store(data_dir)?;
    ensure_datasets(&mut store, &config.datasets).context("create datasets")?;
    let dataset = config.datasets.name(kind);
    let rows = append_row(&mut store, dataset, kind.columns(), &values)
        .with_context(|| format!("append to {dataset}"))?;
    info!(
        dataset = %dataset,
        document = %redact_value(&document),
        rows,
        "registration stored"
    );

    if args.reconcile {
        return reconcile_in(data_dir, &config).map(Some);
    }
    Ok(None)
}

pub fn run_set_link(args: &SetLinkArgs, config_path: Option<&Path>) -> Result<usize> {
    let data_dir = &args.location.data_dir;
    let config = load_config(config_path, data_dir)?;
    let mut store = open_store(data_dir)?;
    let updated = set_value_by_key(
        &mut store,
        &config.datasets.participants,
        PARTICIPANT_COLUMNS,
        participant::DOCUMENT,
        &args.document,
        &args.column,
        &args.link,
    )
    .context("store document link")?;
    info!(
        document = %redact_value(&args.document),
        column = %args.column,
        updated,
        "document link stored"
    );
    Ok(updated)
}

pub fn run_columns(args: &ColumnsArgs) {
    let kinds: Vec<DatasetKind> = match args.dataset {
        Some(dataset) => vec![dataset.dataset_kind()],
        None => DatasetKind::ALL.to_vec(),
    };
    let mut table = Table::new();
    table.set_header(vec!["Dataset", "#", "Column"]);
    apply_table_style(&mut table);
    for kind in kinds {
        for (position, column) in kind.columns().iter().enumerate() {
            table.add_row(vec![
                kind.default_name().to_string(),
                (position + 1).to_string(),
                (*column).to_string(),
            ]);
        }
    }
    println!("{table}");
}

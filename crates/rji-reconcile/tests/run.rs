//! End-to-end runs against the row stores.

use std::fs;

use rji_ingest::{CsvRowStore, MemoryRowStore, RowStore, StoreError, ensure_datasets};
use rji_model::{
    COMPANION_COLUMNS, DatasetNames, DatasetTable, MatchStatus, PARTICIPANT_COLUMNS,
    RECONCILIATION_COLUMNS,
};
use rji_reconcile::{
    ReconcileError, load_reconciliation, update_reconciliation, update_reconciliation_at,
};

const PARTICIPANTS_CSV: &str = "\
es_mayor_edad,documento_participante,nombre_completo,documento_contacto
Si,100,Adulto Uno,
FALSE,123,Luisa,456
no,124,Pedro,999
,125,Sara,
";

const COMPANIONS_CSV: &str = "\
documento_acompanante,nombre_acompanante,archivo_lista_menores_url,lista_documentos_menores_texto
456,Ana,,\"123,789\"
";

fn seeded_store() -> MemoryRowStore {
    let mut participants = DatasetTable::new("PARTICIPANTES", PARTICIPANT_COLUMNS.iter().copied());
    let mut values = std::collections::BTreeMap::new();
    values.insert("documento_participante".to_string(), "123".to_string());
    values.insert("es_mayor_edad".to_string(), "FALSE".to_string());
    values.insert("documento_contacto".to_string(), "456".to_string());
    participants.push_values(&values);
    let mut companions = DatasetTable::new("ACOMPANANTES", COMPANION_COLUMNS.iter().copied());
    let mut values = std::collections::BTreeMap::new();
    values.insert("documento_acompanante".to_string(), "456".to_string());
    values.insert("nombre_acompanante".to_string(), "Ana".to_string());
    values.insert("archivo_lista_menores_url".to_string(), "url".to_string());
    companions.push_values(&values);
    MemoryRowStore::new()
        .with_dataset(participants)
        .with_dataset(companions)
}

#[test]
fn writes_full_output_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("PARTICIPANTES.csv"), PARTICIPANTS_CSV).expect("write");
    fs::write(dir.path().join("ACOMPANANTES.csv"), COMPANIONS_CSV).expect("write");

    let written = update_reconciliation_at(dir.path()).expect("reconcile");
    assert_eq!(written, 4);

    let output = fs::read_to_string(dir.path().join("UNIFICADO.csv")).expect("read output");
    insta::assert_snapshot!(output.trim_end(), @r"
documento_participante,nombre_completo,es_mayor_edad,documento_acudiente_declarado,match_acudiente_en_form,documento_acompanante_real,nombre_acompanante_real,tiene_archivo_consentimiento,consentimiento_lista_contiene_doc_participante,observaciones
100,Adulto Uno,TRUE,,NO_APLICA,,,NO_APLICA,NO_APLICA,
123,Luisa,FALSE,456,OK,456,Ana,FALSE,TRUE,guardian has no consent file on record.
124,Pedro,FALSE,999,FALTA,,,NO_APLICA,NO_APLICA,guardian not found among submitted companion registrations.
125,Sara,FALSE,,FALTA,,,NO_APLICA,NO_APLICA,minor lacks a declared guardian identifier.
");
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("PARTICIPANTES.csv"), PARTICIPANTS_CSV).expect("write");
    fs::write(dir.path().join("ACOMPANANTES.csv"), COMPANIONS_CSV).expect("write");

    update_reconciliation_at(dir.path()).expect("first run");
    let first = fs::read(dir.path().join("UNIFICADO.csv")).expect("read");
    update_reconciliation_at(dir.path()).expect("second run");
    let second = fs::read(dir.path().join("UNIFICADO.csv")).expect("read");
    assert_eq!(first, second);
}

#[test]
fn output_replaces_previous_rows() {
    let mut store = seeded_store();
    let mut stale = DatasetTable::new("UNIFICADO", ["documento_participante", "old_column"]);
    stale.push_row(vec!["999".into(), "x".into()]);
    stale.push_row(vec!["998".into(), "y".into()]);
    store.replace_all_rows(&stale).expect("seed stale output");

    let run = update_reconciliation(&mut store, &DatasetNames::default()).expect("reconcile");
    assert_eq!(run.rows.len(), 1);
    assert_eq!(run.summary.no_list, 1);
    assert_eq!(run.summary.consent_present, 1);
    assert_eq!(run.companions_indexed, 1);

    let output = store.dataset("UNIFICADO").expect("output");
    assert_eq!(output.columns, RECONCILIATION_COLUMNS);
    assert_eq!(output.rows.len(), 1);
    assert_eq!(output.rows[0][0], "123");
    assert_eq!(output.rows[0][8], "NO_LISTA");
}

#[test]
fn failed_read_leaves_previous_output_untouched() {
    let mut previous = DatasetTable::new("UNIFICADO", RECONCILIATION_COLUMNS.iter().copied());
    previous.push_row(vec!["kept".into()]);
    let participants = DatasetTable::new("PARTICIPANTES", PARTICIPANT_COLUMNS.iter().copied());
    let mut store = MemoryRowStore::new()
        .with_dataset(previous.clone())
        .with_dataset(participants);

    let err = update_reconciliation(&mut store, &DatasetNames::default()).unwrap_err();
    assert!(matches!(
        err,
        ReconcileError::Store(StoreError::DatasetNotFound { ref name }) if name == "ACOMPANANTES"
    ));
    assert_eq!(store.dataset("UNIFICADO"), Some(&previous));
}

#[test]
fn empty_datasets_produce_header_only_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = CsvRowStore::open(dir.path()).expect("open");
    ensure_datasets(&mut store, &DatasetNames::default()).expect("ensure");

    let run = update_reconciliation(&mut store, &DatasetNames::default()).expect("reconcile");
    assert!(run.rows.is_empty());
    let table = store
        .fetch_all_rows("UNIFICADO", RECONCILIATION_COLUMNS)
        .expect("fetch");
    assert!(table.is_empty());
}

#[test]
fn custom_dataset_names_are_honored() {
    let names = DatasetNames {
        participants: "P".to_string(),
        companions: "C".to_string(),
        reconciliation: "R".to_string(),
    };
    let mut store = MemoryRowStore::new();
    ensure_datasets(&mut store, &names).expect("ensure");
    update_reconciliation(&mut store, &names).expect("reconcile");
    assert!(store.dataset("R").is_some());
    assert!(store.dataset("UNIFICADO").is_none());
}

#[test]
fn stored_output_loads_back() {
    let mut store = seeded_store();
    let run = update_reconciliation(&mut store, &DatasetNames::default()).expect("reconcile");
    let loaded = load_reconciliation(&store, &DatasetNames::default()).expect("load");
    assert_eq!(loaded, run.rows);
    assert_eq!(loaded[0].guardian_match, MatchStatus::Matched);
}

#[test]
fn corrupt_stored_output_is_reported() {
    let mut output = DatasetTable::new("UNIFICADO", RECONCILIATION_COLUMNS.iter().copied());
    output.push_row(vec![
        "1".into(),
        "A".into(),
        "FALSE".into(),
        "".into(),
        "MAYBE".into(),
    ]);
    let store = MemoryRowStore::new().with_dataset(output);
    let err = load_reconciliation(&store, &DatasetNames::default()).unwrap_err();
    assert!(matches!(err, ReconcileError::InvalidOutputRow { row: 1, .. }));
}

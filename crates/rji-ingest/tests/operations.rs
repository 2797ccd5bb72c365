use std::collections::BTreeMap;

use rji_ingest::{
    CsvRowStore, MemoryRowStore, RowStore, StoreError, append_row, ensure_datasets,
    set_value_by_key,
};
use rji_model::{DatasetNames, DatasetTable, PARTICIPANT_COLUMNS, RECONCILIATION_COLUMNS};

fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

#[test]
fn ensure_creates_only_missing_datasets() {
    let mut existing = DatasetTable::new("UNIFICADO", ["documento_participante"]);
    existing.push_row(vec!["keep".into()]);
    let mut store = MemoryRowStore::new().with_dataset(existing);

    let created = ensure_datasets(&mut store, &DatasetNames::default()).expect("ensure");
    assert_eq!(created, vec!["PARTICIPANTES", "ACOMPANANTES"]);
    assert_eq!(store.dataset("UNIFICADO").unwrap().rows.len(), 1);
    assert_eq!(
        store.dataset("PARTICIPANTES").unwrap().columns.len(),
        PARTICIPANT_COLUMNS.len()
    );

    let again = ensure_datasets(&mut store, &DatasetNames::default()).expect("ensure");
    assert!(again.is_empty());
}

#[test]
fn ensure_writes_header_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = CsvRowStore::open(dir.path()).expect("open");
    ensure_datasets(&mut store, &DatasetNames::default()).expect("ensure");
    let header = std::fs::read_to_string(dir.path().join("UNIFICADO.csv")).expect("read");
    assert_eq!(header.trim_end(), RECONCILIATION_COLUMNS.join(","));
}

#[test]
fn append_conforms_existing_rows() {
    let mut legacy = DatasetTable::new("PARTICIPANTES", ["nombre_completo", "documento_participante"]);
    legacy.push_row(vec!["Old".into(), "1".into()]);
    let mut store = MemoryRowStore::new().with_dataset(legacy);

    let count = append_row(
        &mut store,
        "PARTICIPANTES",
        &["documento_participante", "nombre_completo", "es_mayor_edad"],
        &values(&[("documento_participante", "2"), ("unknown", "x")]),
    )
    .expect("append");

    assert_eq!(count, 2);
    let table = store.dataset("PARTICIPANTES").unwrap();
    assert_eq!(
        table.columns,
        vec!["documento_participante", "nombre_completo", "es_mayor_edad"]
    );
    assert_eq!(table.rows[0], vec!["1", "Old", ""]);
    assert_eq!(table.rows[1], vec!["2", "", ""]);
}

#[test]
fn append_to_missing_dataset_fails() {
    let mut store = MemoryRowStore::new();
    let err = append_row(&mut store, "PARTICIPANTES", &["a"], &BTreeMap::new()).unwrap_err();
    assert!(matches!(err, StoreError::DatasetNotFound { .. }));
}

#[test]
fn set_value_matches_ignoring_whitespace() {
    let mut table = DatasetTable::new("PARTICIPANTES", ["documento_participante"]);
    table.push_row(vec!["101 202".into()]);
    table.push_row(vec!["303".into()]);
    let mut store = MemoryRowStore::new().with_dataset(table);

    let updated = set_value_by_key(
        &mut store,
        "PARTICIPANTES",
        &["documento_participante"],
        "documento_participante",
        "101202",
        "archivo_doc_participante",
        "https://files/1",
    )
    .expect("set value");

    assert_eq!(updated, 1);
    let table = store
        .fetch_all_rows(
            "PARTICIPANTES",
            &["documento_participante", "archivo_doc_participante"],
        )
        .expect("fetch");
    assert_eq!(table.rows[0], vec!["101 202", "https://files/1"]);
    assert_eq!(table.rows[1], vec!["303", ""]);
}

#[test]
fn set_value_without_match_leaves_dataset_untouched() {
    let mut table = DatasetTable::new("PARTICIPANTES", ["documento_participante"]);
    table.push_row(vec!["303".into()]);
    let mut store = MemoryRowStore::new().with_dataset(table.clone());

    let err = set_value_by_key(
        &mut store,
        "PARTICIPANTES",
        &["documento_participante"],
        "documento_participante",
        "999",
        "archivo_doc_participante",
        "x",
    )
    .unwrap_err();

    assert!(matches!(err, StoreError::KeyNotFound { .. }));
    assert_eq!(store.dataset("PARTICIPANTES"), Some(&table));
}

#[test]
fn set_value_keeps_columns_from_earlier_links() {
    let mut store = MemoryRowStore::new();
    ensure_datasets(&mut store, &DatasetNames::default()).expect("ensure");
    append_row(
        &mut store,
        "PARTICIPANTES",
        PARTICIPANT_COLUMNS,
        &values(&[("documento_participante", "123")]),
    )
    .expect("append");

    for (column, link) in [("foto_url", "A"), ("eps_url", "B")] {
        set_value_by_key(
            &mut store,
            "PARTICIPANTES",
            PARTICIPANT_COLUMNS,
            "documento_participante",
            "123",
            column,
            link,
        )
        .expect("set value");
    }

    let table = store.dataset("PARTICIPANTES").unwrap();
    let tail: Vec<&str> = table.columns[PARTICIPANT_COLUMNS.len()..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(tail, vec!["foto_url", "eps_url"]);
    let record = table.records().next().unwrap();
    assert_eq!(record.get("foto_url"), "A");
    assert_eq!(record.get("eps_url"), "B");
}

#[test]
fn append_keeps_extra_stored_columns() {
    let mut table = DatasetTable::new("PARTICIPANTES", ["documento_participante", "foto_url"]);
    table.push_row(vec!["1".into(), "https://files/1".into()]);
    let mut store = MemoryRowStore::new().with_dataset(table);

    append_row(
        &mut store,
        "PARTICIPANTES",
        &["documento_participante", "nombre_completo"],
        &values(&[("documento_participante", "2")]),
    )
    .expect("append");

    let table = store.dataset("PARTICIPANTES").unwrap();
    assert_eq!(
        table.columns,
        vec!["documento_participante", "nombre_completo", "foto_url"]
    );
    assert_eq!(table.rows[0], vec!["1", "", "https://files/1"]);
    assert_eq!(table.rows[1], vec!["2", "", ""]);
}

#[test]
fn memory_store_checks_dataset_names_like_csv_store() {
    let mut store = MemoryRowStore::new();
    for name in ["..", ".", "", "a/b"] {
        assert!(
            matches!(store.has_dataset(name), Err(StoreError::InvalidDatasetName { .. })),
            "{name}"
        );
        let table = DatasetTable::new(name, ["a"]);
        assert!(matches!(
            store.replace_all_rows(&table),
            Err(StoreError::InvalidDatasetName { .. })
        ));
    }

    let padded = DatasetTable::new(" UNIFICADO ", ["a"]);
    store.replace_all_rows(&padded).expect("replace");
    assert!(store.has_dataset("UNIFICADO").expect("has dataset"));
    assert_eq!(store.dataset("UNIFICADO").unwrap().name, "UNIFICADO");
}

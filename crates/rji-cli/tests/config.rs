//! Integration tests for configuration loading.

use std::fs;

use rji_cli::config::{CONFIG_FILENAME, RjiConfig, load_config};
use rji_model::DatasetNames;

#[test]
fn test_missing_implicit_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config, RjiConfig::default());
    assert_eq!(config.datasets.reconciliation, "UNIFICADO");
}

#[test]
fn test_implicit_config_overrides_some_names() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "[datasets]\nreconciliation = \"UNIFICADO_2025\"\n",
    )
    .unwrap();

    let config = load_config(None, dir.path()).unwrap();

    assert_eq!(config.datasets.reconciliation, "UNIFICADO_2025");
    assert_eq!(
        config.datasets.participants,
        DatasetNames::default().participants
    );
}

#[test]
fn test_invalid_implicit_config_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILENAME), "[datasets\nbroken").unwrap();

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config, RjiConfig::default());
}

#[test]
fn test_explicit_config_is_required() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("other.toml");

    let error = load_config(Some(&missing), dir.path()).unwrap_err();
    assert!(format!("{error:#}").contains("read config"));
}

#[test]
fn test_explicit_config_must_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("other.toml");
    fs::write(&path, "datasets = 3").unwrap();

    let error = load_config(Some(&path), dir.path()).unwrap_err();
    assert!(format!("{error:#}").contains("parse config"));
}

#[test]
fn test_explicit_config_wins_over_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIG_FILENAME),
        "[datasets]\ncompanions = \"IGNORED\"\n",
    )
    .unwrap();
    let path = dir.path().join("explicit.toml");
    fs::write(&path, "[datasets]\ncompanions = \"ACOMP\"\n").unwrap();

    let config = load_config(Some(&path), dir.path()).unwrap();
    assert_eq!(config.datasets.companions, "ACOMP");
}

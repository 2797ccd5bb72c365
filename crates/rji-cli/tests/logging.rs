//! Logging setup writes to a file; kept in its own binary because the
//! subscriber is global.

use std::fs;

use rji_cli::logging::{LogConfig, LogFormat, init_logging, log_data_enabled, redact_value};
use tracing::level_filters::LevelFilter;

#[test]
fn json_logs_go_to_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rji.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        log_file: Some(path.clone()),
        log_data: true,
        ..LogConfig::default()
    };

    init_logging(&config).unwrap();
    tracing::warn!(document = %redact_value("123"), "duplicate companion documents");

    assert!(log_data_enabled());
    let content = fs::read_to_string(&path).unwrap();
    let line = content.lines().next().expect("one log line");
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "WARN");
    assert_eq!(event["fields"]["message"], "duplicate companion documents");
    assert_eq!(event["fields"]["document"], "123");
}

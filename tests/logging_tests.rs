use exphys::{init_logging, Catalogue, LogConfig, LogFormat, LogLevel, ValidationConfig};
use std::fs;
use tempfile::tempdir;

/// Rejected arguments reach the JSON log file once logging is initialized

#[test]
fn test_rejection_is_written_to_log_file() {
    std::env::remove_var("RUST_LOG");

    let temp_dir = tempdir().unwrap();
    let log_path = temp_dir.path().join("logs").join("exphys.log");
    let config = LogConfig {
        level: LogLevel::Warn,
        format: LogFormat::Compact,
        file_path: Some(log_path.clone()),
        rotation: false,
        include_spans: false,
    };

    init_logging(&config).unwrap();
    assert!(log_path.exists());

    let result = Catalogue::global().evaluate_checked(
        "indices.bmi",
        &[70.0, -175.0],
        &ValidationConfig::default(),
    );
    assert!(result.is_err());

    let contents = fs::read_to_string(&log_path).unwrap();
    let events: Vec<serde_json::Value> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let rejection = events
        .iter()
        .find(|e| e["fields"]["formula"] == "indices.bmi")
        .unwrap();
    assert_eq!(rejection["level"], "WARN");
    assert_eq!(rejection["fields"]["parameter"], "height");
    assert_eq!(rejection["fields"]["message"], "Argument outside documented domain");

    // info is below the configured level
    assert!(events.iter().all(|e| e["fields"]["message"] != "Logging initialized"));

    // the global subscriber is already installed
    assert!(init_logging(&config).is_err());
}

use luna::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 5432);
    assert_eq!(config.log_level, "info");
    assert!(config.metrics.enabled);
    assert_eq!(config.metrics.port, 9091);
    assert_eq!(config.metrics.poll_interval_secs, 10);
    assert_eq!(config.stores.profiles_path, "connections.json");
    assert_eq!(config.stores.snippets_path, "snippets.json");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = Config::from_file("no-such-luna.toml").unwrap();
    assert_eq!(config.port, 5432);
    assert!(config.metrics.enabled);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = 5433").unwrap();
    writeln!(file, "[metrics]").unwrap();
    writeln!(file, "enabled = false").unwrap();
    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.port, 5433);
    assert!(!config.metrics.enabled);
    assert_eq!(config.host, "localhost");
    assert_eq!(config.metrics.port, 9091);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "port = \"not a number\"").unwrap();
    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
}

use crate::{AppConfig, ConfigError, LogLevel, OutputFormat};

use std::io::Write;
use tempfile::NamedTempFile;

fn write_toml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_with_empty_environment() {
    let config = AppConfig::load_with_env(None, &env(&[])).unwrap();
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert!(config.server.cors_enabled);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert_eq!(config.logging.format, OutputFormat::Pretty);
}

#[test]
fn test_port_variable_overrides_default() {
    let config = AppConfig::load_with_env(None, &env(&[("PORT", "8081")])).unwrap();
    assert_eq!(config.server.port, 8081);
}

#[test]
fn test_invalid_port_variable_is_rejected() {
    let err = AppConfig::load_with_env(None, &env(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, ConfigError::Environment(_)));

    let err = AppConfig::load_with_env(None, &env(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Environment(_)));
}

#[test]
fn test_prefixed_variables_map_to_nested_keys() {
    let vars = env(&[
        ("CRON_ECHO_SERVER__PORT", "9090"),
        ("CRON_ECHO_SERVER__HOST", "127.0.0.1"),
        ("CRON_ECHO_SERVER__CORS_ENABLED", "false"),
        ("CRON_ECHO_LOGGING__LEVEL", "debug"),
        ("CRON_ECHO_LOGGING__FORMAT", "json"),
        // Unprefixed variables are ignored.
        ("SERVER__PORT", "1111"),
    ]);

    let config = AppConfig::load_with_env(None, &vars).unwrap();
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.host, "127.0.0.1");
    assert!(!config.server.cors_enabled);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, OutputFormat::Json);
}

#[test]
fn test_toml_file_is_merged_over_defaults() {
    let file = write_toml(
        r#"
[server]
port = 4000
cors_enabled = false

[logging]
level = "debug"
format = "json"
"#,
    );

    let config = AppConfig::load_with_env(file.path().to_str(), &env(&[])).unwrap();
    assert_eq!(config.server.port, 4000);
    assert!(!config.server.cors_enabled);
    // Keys absent from the file keep their defaults.
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.shutdown_timeout_seconds, 30);
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, OutputFormat::Json);
}

#[test]
fn test_precedence_file_then_prefixed_env_then_port() {
    let file = write_toml("[server]\nport = 4000\n\n[logging]\nlevel = \"warn\"\n");
    let path = file.path().to_str();

    let config = AppConfig::load_with_env(path, &env(&[])).unwrap();
    assert_eq!(config.server.port, 4000);

    let config = AppConfig::load_with_env(
        path,
        &env(&[
            ("CRON_ECHO_SERVER__PORT", "5000"),
            ("CRON_ECHO_LOGGING__LEVEL", "error"),
        ]),
    )
    .unwrap();
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.logging.level, LogLevel::Error);

    let config = AppConfig::load_with_env(
        path,
        &env(&[("CRON_ECHO_SERVER__PORT", "5000"), ("PORT", "6000")]),
    )
    .unwrap();
    assert_eq!(config.server.port, 6000);
    assert_eq!(config.logging.level, LogLevel::Warn);
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = AppConfig::load_with_env(Some("/nonexistent/cron-echo.toml"), &env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::File(_)));
}

#[test]
fn test_validation_runs_after_merge() {
    let file = write_toml("[server]\nport = 0\n");
    let err = AppConfig::load_with_env(file.path().to_str(), &env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    let err = AppConfig::load_with_env(None, &env(&[("CRON_ECHO_SERVER__PORT", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn test_unknown_log_level_fails_to_deserialize() {
    let file = write_toml("[logging]\nlevel = \"loud\"\n");
    let err = AppConfig::load_with_env(file.path().to_str(), &env(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

use config::{Config, File, FileFormat};
use logscope_logger::{init, LogConfig, LogFormat, LogOutput};
use tracing::Level;

fn from_toml(toml: &str) -> LogConfig {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()
        .unwrap()
        .try_deserialize()
        .unwrap()
}

#[test]
fn test_defaults_apply_to_missing_fields() {
    let config = from_toml(r#"level = "debug""#);
    assert_eq!(config.level(), Level::DEBUG);
    assert_eq!(config.format, LogFormat::Plain);
    assert_eq!(config.output, LogOutput::Stdout);
    assert_eq!(config.file_path, None);
}

#[test]
fn test_full_config_deserializes() {
    let config = from_toml(
        r#"
        level = "warn"
        format = "json"
        output = "file"
        file-path = "/tmp/logscope.log"
        "#,
    );
    assert_eq!(
        config,
        LogConfig {
            level: "warn".to_string(),
            format: LogFormat::Json,
            output: LogOutput::File,
            file_path: Some("/tmp/logscope.log".to_string()),
        }
    );
}

#[test]
fn test_unknown_level_falls_back_to_info() {
    let config = LogConfig {
        level: "loud".to_string(),
        ..LogConfig::default()
    };
    assert_eq!(config.level(), Level::INFO);
}

#[test]
fn test_file_output_requires_path() {
    let config = LogConfig {
        output: LogOutput::File,
        ..LogConfig::default()
    };
    let err = init(&config).unwrap_err();
    assert!(err.to_string().contains("file_path"));
}

#[test]
fn test_json_file_output_receives_events() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logscope.log");
    let config = LogConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        output: LogOutput::File,
        file_path: Some(path.to_string_lossy().into_owned()),
    };

    init(&config).unwrap();
    tracing::info!(scopes = 3, "grouped transaction logs");

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("grouped transaction logs"));
    assert!(written.contains("\"scopes\":3"));
}

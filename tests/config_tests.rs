use peptide_proxy::{
    Error,
    config::{self, DEFAULT_INFERENCE_ENDPOINT},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 3000
  logs:
    level: debug
inference:
  endpoint: "http://localhost:7860/predict_peptide"
  timeout_secs: 20
"#;

async fn write_config(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

#[tokio::test]
async fn test_load_full_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, SAMPLE_CONFIG_YAML).await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(
        config.inference.endpoint,
        "http://localhost:7860/predict_peptide"
    );
    assert_eq!(config.inference.timeout_secs, Some(20));
}

#[tokio::test]
async fn test_load_partial_config_keeps_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "server:\n  logs:\n    level: warn\n").await;

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.logs.level, "warn");
    assert_eq!(config.inference.endpoint, DEFAULT_INFERENCE_ENDPOINT);
    assert_eq!(config.inference.timeout_secs, None);
}

#[tokio::test]
async fn test_load_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let result = config::load_from(&path.to_string_lossy()).await;

    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_load_invalid_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "server:\n  port: not-a-number\n").await;

    let result = config::load_from(&path).await;

    assert!(matches!(result, Err(Error::Yaml(_))));
}

use super::*;
use crate::error::CoreError;

const MINIMAL: &str = r#"
name: play_warehouse
iam_role:
  arn: arn:aws:iam::123456789012:role/warehouse-load
storage:
  log_data: s3://streaming-raw/log_data
  log_jsonpath: s3://streaming-raw/log_json_path.json
  song_data: s3://streaming-raw/song_data
"#;

#[test]
fn test_parse_minimal_config() {
    let config: Config = serde_yaml::from_str(MINIMAL).unwrap();
    assert_eq!(config.name, "play_warehouse");
    assert_eq!(config.version, "1.0.0");
    assert_eq!(config.storage.region, "us-west-2");
    assert_eq!(config.target_path, "target");
    assert_eq!(config.database.db_type, DbType::DuckDb);
    assert_eq!(config.database.path, "warehouse.duckdb");
}

#[test]
fn test_parse_full_config() {
    let yaml = r#"
name: play_warehouse
version: "2.1.0"
iam_role:
  arn: arn:aws:iam::123456789012:role/warehouse-load
storage:
  log_data: s3://streaming-raw/log_data
  log_jsonpath: s3://streaming-raw/log_json_path.json
  song_data: s3://streaming-raw/song_data
  region: eu-central-1
database:
  type: redshift
  connection: "host=example.com port=5439 dbname=dwh"
dialect: redshift
target_path: out
"#;
    let config: Config = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(config.version, "2.1.0");
    assert_eq!(config.storage.region, "eu-central-1");
    assert_eq!(config.database.db_type, DbType::Redshift);
    assert!(config.database.connection.is_some());
    assert_eq!(config.dialect(), Dialect::Redshift);
    assert_eq!(config.target_path, "out");
}

#[test]
fn test_dialect_follows_database_type() {
    let config: Config = serde_yaml::from_str(MINIMAL).unwrap();
    assert_eq!(config.dialect(), Dialect::DuckDb);

    let yaml = format!("{}database:\n  type: redshift\n", MINIMAL);
    let config: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.dialect(), Dialect::Redshift);
}

#[test]
fn test_dialect_override() {
    let yaml = format!("{}dialect: redshift\n", MINIMAL);
    let config: Config = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(config.database.db_type, DbType::DuckDb);
    assert_eq!(config.dialect(), Dialect::Redshift);
}

#[test]
fn test_unknown_field_rejected() {
    let yaml = format!("{}schedule: hourly\n", MINIMAL);
    assert!(serde_yaml::from_str::<Config>(&yaml).is_err());
}

#[test]
fn test_load_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tunelift.yml"), MINIMAL).unwrap();

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "play_warehouse");
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigNotFound { .. }));
}

#[test]
fn test_load_rejects_empty_arn() {
    let dir = tempfile::tempdir().unwrap();
    let yaml = MINIMAL.replace("arn: arn:aws:iam::123456789012:role/warehouse-load", "arn: \"\"");
    std::fs::write(dir.path().join("tunelift.yml"), yaml).unwrap();

    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::ConfigInvalid { .. }));
    assert!(err.to_string().contains("iam_role.arn"));
}

#[test]
fn test_load_rejects_invalid_yaml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("tunelift.yml"), "name: [unclosed").unwrap();

    let err = Config::load_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, CoreError::YamlParse(_)));
}

#[test]
fn test_target_path_absolute() {
    let config: Config = serde_yaml::from_str(MINIMAL).unwrap();
    let root = std::path::PathBuf::from("/tmp/project");
    assert_eq!(config.target_path_absolute(&root), root.join("target"));
}

//! Configuration types and parsing for tunelift.yml

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from tunelift.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// IAM role assumed by the warehouse for bulk loads
    pub iam_role: IamRoleConfig,

    /// Object-storage locations for the raw datasets
    pub storage: StorageConfig,

    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// SQL dialect the catalog renders for.
    ///
    /// Defaults to the dialect matching `database.type`, so it only needs to
    /// be set when compiling SQL for an engine other than the one connected.
    #[serde(default)]
    pub dialect: Option<Dialect>,

    /// Output directory for compiled SQL and run results
    #[serde(default = "default_target_path")]
    pub target_path: String,
}

/// IAM role used in COPY credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IamRoleConfig {
    /// Role ARN, e.g. arn:aws:iam::123456789012:role/warehouse-load
    pub arn: String,
}

/// Object-storage locations for the two raw JSON datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Event log dataset (JSON lines)
    pub log_data: String,

    /// JSON-path specification used by the Redshift COPY of the event log
    pub log_jsonpath: String,

    /// Song metadata dataset (JSON lines)
    pub song_data: String,

    /// Region of the storage bucket
    #[serde(default = "default_region")]
    pub region: String,
}

/// Database type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// DuckDB (default)
    #[default]
    DuckDb,
    /// Redshift
    Redshift,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::DuckDb => write!(f, "duckdb"),
            DbType::Redshift => write!(f, "redshift"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Database type (duckdb or redshift)
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database path (for DuckDB file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Connection string (for Redshift)
    #[serde(default)]
    pub connection: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
            connection: None,
        }
    }
}

/// SQL dialect the catalog renders for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// DuckDB SQL dialect
    #[default]
    DuckDb,
    /// Redshift SQL dialect
    Redshift,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::DuckDb => write!(f, "duckdb"),
            Dialect::Redshift => write!(f, "redshift"),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_target_path() -> String {
    "target".to_string()
}

fn default_region() -> String {
    "us-west-2".to_string()
}

fn default_db_path() -> String {
    "warehouse.duckdb".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory
    /// Looks for tunelift.yml or tunelift.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("tunelift.yml");
        let yaml_path = dir.join("tunelift.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("tunelift.yml").display().to_string(),
            })
        }
    }

    /// Validate the configuration
    ///
    /// Only presence is checked. A malformed ARN or bucket URI surfaces when
    /// the warehouse rejects the statement that uses it, not here.
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        for (key, value) in [
            ("iam_role.arn", &self.iam_role.arn),
            ("storage.log_data", &self.storage.log_data),
            ("storage.log_jsonpath", &self.storage.log_jsonpath),
            ("storage.song_data", &self.storage.song_data),
            ("storage.region", &self.storage.region),
        ] {
            if value.is_empty() {
                return Err(CoreError::ConfigInvalid {
                    message: format!("{} cannot be empty", key),
                });
            }
        }

        Ok(())
    }

    /// Effective SQL dialect: explicit override, or the one matching the
    /// configured database type
    pub fn dialect(&self) -> Dialect {
        match self.dialect {
            Some(dialect) => dialect,
            None => match self.database.db_type {
                DbType::DuckDb => Dialect::DuckDb,
                DbType::Redshift => Dialect::Redshift,
            },
        }
    }

    /// Absolute target path given the project root
    pub fn target_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.target_path)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

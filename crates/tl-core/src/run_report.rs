//! Run report types for pipeline executions
//!
//! A `RunReport` records every statement attempted during a pipeline run,
//! its phase, duration, and outcome. The CLI serializes it to
//! `target/run_results.json` after each `run` invocation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::CoreResult;

/// Pipeline phase a statement belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// DROP-IF-EXISTS of all managed tables
    Drop,
    /// CREATE-IF-NOT-EXISTS of all managed tables
    Create,
    /// Bulk load of the staging tables
    Copy,
    /// INSERT...SELECT population of the final tables
    Insert,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Drop => write!(f, "drop"),
            Phase::Create => write!(f, "create"),
            Phase::Copy => write!(f, "copy"),
            Phase::Insert => write!(f, "insert"),
        }
    }
}

/// Outcome of a single statement execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Success,
    Error,
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepStatus::Success => write!(f, "success"),
            StepStatus::Error => write!(f, "error"),
        }
    }
}

/// Result of executing one catalog statement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Catalog name of the statement, e.g. "copy_staging_events"
    pub statement: String,

    /// Phase the statement ran in
    pub phase: Phase,

    /// Outcome
    pub status: StepStatus,

    /// Wall-clock execution time
    pub duration_secs: f64,

    /// Rows affected, when the backend reports a count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_affected: Option<usize>,

    /// Error message when status is Error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Report for one full pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique identifier for this run
    pub run_id: String,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Total wall-clock time for the run
    pub elapsed_secs: f64,

    /// Number of statements that succeeded
    pub success_count: usize,

    /// Number of statements that failed
    pub failure_count: usize,

    /// Per-statement results, in execution order
    pub results: Vec<StepResult>,
}

impl RunReport {
    /// Build a report from per-statement results
    pub fn new(results: Vec<StepResult>, started_at: DateTime<Utc>, elapsed_secs: f64) -> Self {
        let success_count = results
            .iter()
            .filter(|r| r.status == StepStatus::Success)
            .count();
        let failure_count = results.len() - success_count;

        Self {
            run_id: Uuid::new_v4().to_string(),
            started_at,
            elapsed_secs,
            success_count,
            failure_count,
            results,
        }
    }

    /// Whether any statement failed
    pub fn failed(&self) -> bool {
        self.failure_count > 0
    }

    /// The first failed step, if any
    pub fn first_failure(&self) -> Option<&StepResult> {
        self.results.iter().find(|r| r.status == StepStatus::Error)
    }

    /// Serialize the report to a JSON file, creating parent directories
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
#[path = "run_report_test.rs"]
mod tests;

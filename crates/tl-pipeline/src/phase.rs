//! Sequential statement execution shared by the pipeline components

use crate::error::{PipelineError, PipelineResult};
use std::time::Instant;
use tl_catalog::Statement;
use tl_core::run_report::{Phase, StepResult, StepStatus};
use tl_db::{Database, DbError};

/// Outcome of one pipeline phase, in statement execution order.
///
/// Execution is fail-fast: on the first statement failure the remaining
/// statements of the phase are not attempted and `error` is set. Results
/// for every attempted statement, including the failed one, are kept for
/// run reporting. Nothing is rolled back: effects of earlier statements
/// remain.
#[derive(Debug)]
pub struct PhaseOutcome {
    /// Per-statement results for every attempted statement
    pub results: Vec<StepResult>,

    /// The failure that stopped the phase, if any
    pub error: Option<PipelineError>,
}

impl PhaseOutcome {
    /// Whether every statement in the phase succeeded
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into the step results, or the failure if one occurred
    pub fn into_result(self) -> PipelineResult<Vec<StepResult>> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.results),
        }
    }
}

/// Execute statements strictly sequentially, stopping at the first failure
pub(crate) async fn run_statements(
    db: &dyn Database,
    statements: &[Statement],
    phase: Phase,
    wrap: fn(String, DbError) -> PipelineError,
) -> PhaseOutcome {
    let mut results = Vec::with_capacity(statements.len());

    for statement in statements {
        log::debug!("executing {}:\n{}", statement.name(), statement.sql());
        let started = Instant::now();

        match db.execute(statement.sql()).await {
            Ok(rows) => {
                results.push(StepResult {
                    statement: statement.name().to_string(),
                    phase,
                    status: StepStatus::Success,
                    duration_secs: started.elapsed().as_secs_f64(),
                    rows_affected: Some(rows),
                    error: None,
                });
            }
            Err(e) => {
                results.push(StepResult {
                    statement: statement.name().to_string(),
                    phase,
                    status: StepStatus::Error,
                    duration_secs: started.elapsed().as_secs_f64(),
                    rows_affected: None,
                    error: Some(e.to_string()),
                });
                return PhaseOutcome {
                    results,
                    error: Some(wrap(statement.name().to_string(), e)),
                };
            }
        }
    }

    PhaseOutcome {
        results,
        error: None,
    }
}

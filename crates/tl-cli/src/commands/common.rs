//! Shared utilities for CLI commands

use anyhow::Result;
use tl_core::run_report::{Phase, StepResult, StepStatus};
use tl_core::table::INSERT_ORDER;
use tl_db::Database;

/// Print one line per executed statement
pub(crate) fn print_steps(results: &[StepResult]) {
    for result in results {
        let millis = (result.duration_secs * 1000.0) as u64;
        match result.status {
            StepStatus::Success => {
                // Row counts only matter for the data-moving phases.
                let rows = match (result.phase, result.rows_affected) {
                    (Phase::Copy | Phase::Insert, Some(rows)) => format!(" [{} rows]", rows),
                    _ => String::new(),
                };
                println!("  ✓ {} ({}ms){}", result.statement, millis, rows);
            }
            StepStatus::Error => {
                let error = result.error.as_deref().unwrap_or("unknown error");
                println!("  ✗ {} ({}ms): {}", result.statement, millis, error);
            }
        }
    }
}

/// Print row counts for the fact and dimension tables
pub(crate) async fn print_final_counts(db: &dyn Database) -> Result<()> {
    println!();
    println!("Final table row counts:");
    for table in INSERT_ORDER {
        let count = db
            .query_count(&format!("SELECT * FROM {}", table.name()))
            .await?;
        println!("  {:<10} {:>8} rows", table.name(), count);
    }
    Ok(())
}

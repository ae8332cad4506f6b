//! Pipeline driver: fixed-order orchestration of the ETL phases

use crate::phase::PhaseOutcome;
use crate::schema::SchemaManager;
use crate::staging::StagingLoader;
use crate::transform::TransformRunner;
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tl_catalog::Catalog;
use tl_core::run_report::{RunReport, StepResult};
use tl_db::Database;

/// Runs the full pipeline: drop, create, copy-load, insert-transform.
///
/// The driver owns the database handle for the run; the connection is
/// released when the driver (and any clones of the handle) drop.
pub struct Driver {
    db: Arc<dyn Database>,
    catalog: Catalog,
}

impl Driver {
    pub fn new(db: Arc<dyn Database>, catalog: Catalog) -> Self {
        Self { db, catalog }
    }

    /// The catalog this driver executes
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Execute all four phases in fixed order and report every attempted
    /// statement.
    ///
    /// Fail-fast: the first statement failure stops the phase, and a
    /// failed phase stops the run; later phases are not attempted. A
    /// dimension-transform failure therefore ends the run with the fact
    /// table already loaded, and nothing is rolled back.
    pub async fn run(&self) -> RunReport {
        let started_at = Utc::now();
        let started = Instant::now();
        let db = self.db.as_ref();

        let schema = SchemaManager::new(db, &self.catalog);
        let loader = StagingLoader::new(db, &self.catalog);
        let transforms = TransformRunner::new(db, &self.catalog);

        let mut results: Vec<StepResult> = Vec::new();
        let mut take = |outcome: PhaseOutcome| -> bool {
            let ok = outcome.succeeded();
            if let Some(error) = &outcome.error {
                log::debug!("pipeline stopped: {}", error);
            }
            results.extend(outcome.results);
            ok
        };

        let ok = take(schema.drop_all().await);
        let ok = ok && take(schema.create_all().await);
        let ok = ok && take(loader.load_staging().await);
        let _ = ok && take(transforms.run_transforms().await);

        RunReport::new(results, started_at, started.elapsed().as_secs_f64())
    }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;

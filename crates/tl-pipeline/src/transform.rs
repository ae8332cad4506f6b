//! Transform runner: populates the fact and dimension tables from staging

use crate::error::PipelineError;
use crate::phase::{run_statements, PhaseOutcome};
use tl_catalog::Catalog;
use tl_core::run_report::Phase;
use tl_db::Database;

/// Executes the catalog's INSERT...SELECT transforms
pub struct TransformRunner<'a> {
    db: &'a dyn Database,
    catalog: &'a Catalog,
}

impl<'a> TransformRunner<'a> {
    pub fn new(db: &'a dyn Database, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Run the five transforms in fixed order: songplays, users, songs,
    /// artists, time.
    ///
    /// Each INSERT is atomic as a single statement; no cross-statement
    /// transaction wraps the five. A failure stops the remaining
    /// transforms, so partial completion (fact loaded, a dimension
    /// missing) is possible and is not rolled back.
    pub async fn run_transforms(&self) -> PhaseOutcome {
        run_statements(
            self.db,
            self.catalog.insert_statements(),
            Phase::Insert,
            |statement, source| PipelineError::Transform { statement, source },
        )
        .await
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;

//! Staging loader: bulk ingestion of the raw JSON datasets

use crate::error::PipelineError;
use crate::phase::{run_statements, PhaseOutcome};
use tl_catalog::Catalog;
use tl_core::run_report::Phase;
use tl_db::Database;

/// Executes the catalog's staging bulk-load statements
pub struct StagingLoader<'a> {
    db: &'a dyn Database,
    catalog: &'a Catalog,
}

impl<'a> StagingLoader<'a> {
    pub fn new(db: &'a dyn Database, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// Load both staging tables sequentially: events, then songs.
    ///
    /// Each load is a single warehouse-side bulk operation. There is no
    /// retry and no partial recovery: a failure aborts the run after this
    /// step, leaving whichever staging table was being written partially
    /// populated.
    pub async fn load_staging(&self) -> PhaseOutcome {
        run_statements(
            self.db,
            self.catalog.copy_statements(),
            Phase::Copy,
            |statement, source| PipelineError::Load { statement, source },
        )
        .await
    }
}

#[cfg(test)]
#[path = "staging_test.rs"]
mod tests;

//! Schema manager: DDL reset of the warehouse star schema

use crate::error::PipelineError;
use crate::phase::{run_statements, PhaseOutcome};
use tl_catalog::Catalog;
use tl_core::run_report::Phase;
use tl_db::Database;

/// Executes the catalog's DROP and CREATE statements
pub struct SchemaManager<'a> {
    db: &'a dyn Database,
    catalog: &'a Catalog,
}

impl<'a> SchemaManager<'a> {
    pub fn new(db: &'a dyn Database, catalog: &'a Catalog) -> Self {
        Self { db, catalog }
    }

    /// DROP-IF-EXISTS every managed relation in the fixed drop order.
    ///
    /// Idempotent: a relation that does not exist is a no-op.
    pub async fn drop_all(&self) -> PhaseOutcome {
        run_statements(
            self.db,
            self.catalog.drop_statements(),
            Phase::Drop,
            |statement, source| PipelineError::Schema { statement, source },
        )
        .await
    }

    /// CREATE-IF-NOT-EXISTS every managed relation in the fixed create order.
    ///
    /// Idempotent. If statement N fails, relations 1..N-1 remain created.
    pub async fn create_all(&self) -> PhaseOutcome {
        run_statements(
            self.db,
            self.catalog.create_statements(),
            Phase::Create,
            |statement, source| PipelineError::Schema { statement, source },
        )
        .await
    }
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;

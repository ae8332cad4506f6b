//! Error types for tl-pipeline

use thiserror::Error;
use tl_db::DbError;

/// Pipeline execution errors, one category per phase, each naming the
/// failing catalog statement
#[derive(Error, Debug)]
pub enum PipelineError {
    /// DDL failure (P001)
    #[error("[P001] Schema statement '{statement}' failed: {source}")]
    Schema {
        statement: String,
        #[source]
        source: DbError,
    },

    /// Staging bulk-load failure (P002)
    #[error("[P002] Staging load '{statement}' failed: {source}")]
    Load {
        statement: String,
        #[source]
        source: DbError,
    },

    /// Final-table transform failure (P003)
    #[error("[P003] Transform '{statement}' failed: {source}")]
    Transform {
        statement: String,
        #[source]
        source: DbError,
    },
}

impl PipelineError {
    /// Catalog name of the failing statement
    pub fn statement(&self) -> &str {
        match self {
            PipelineError::Schema { statement, .. }
            | PipelineError::Load { statement, .. }
            | PipelineError::Transform { statement, .. } => statement,
        }
    }
}

/// Result type alias for PipelineError
pub type PipelineResult<T> = Result<T, PipelineError>;

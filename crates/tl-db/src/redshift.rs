//! Redshift database backend stub
//!
//! The catalog renders native Redshift SQL, but executing it requires a
//! warehouse connection this backend does not implement yet. Runs against
//! Redshift currently go through `tl compile` plus an external client.

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;

/// Redshift database backend (stub implementation)
#[derive(Debug)]
pub struct RedshiftBackend {
    // Connection details would go here
}

fn not_implemented(feature: &str) -> DbError {
    DbError::NotImplemented {
        backend: "redshift".to_string(),
        feature: feature.to_string(),
    }
}

impl RedshiftBackend {
    /// Create a new Redshift backend (not yet implemented)
    pub fn new(_connection_string: &str) -> DbResult<Self> {
        Err(not_implemented("connect"))
    }
}

#[async_trait]
impl Database for RedshiftBackend {
    async fn execute(&self, _sql: &str) -> DbResult<usize> {
        Err(not_implemented("execute"))
    }

    async fn execute_batch(&self, _sql: &str) -> DbResult<()> {
        Err(not_implemented("execute_batch"))
    }

    async fn query_count(&self, _sql: &str) -> DbResult<usize> {
        Err(not_implemented("query_count"))
    }

    async fn relation_exists(&self, _name: &str) -> DbResult<bool> {
        Err(not_implemented("relation_exists"))
    }

    fn db_type(&self) -> &'static str {
        "redshift"
    }
}

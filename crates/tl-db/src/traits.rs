//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Database abstraction trait for Tunelift
///
/// Implementations must be Send + Sync. Statement execution is strictly
/// sequential; one call is one blocking round-trip to the warehouse.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute a single SQL statement, returns affected rows
    async fn execute(&self, sql: &str) -> DbResult<usize>;

    /// Execute multiple semicolon-separated SQL statements
    async fn execute_batch(&self, sql: &str) -> DbResult<()>;

    /// Execute a query and return its result-set row count
    async fn query_count(&self, sql: &str) -> DbResult<usize>;

    /// Check if a table or view exists
    async fn relation_exists(&self, name: &str) -> DbResult<bool>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;
}

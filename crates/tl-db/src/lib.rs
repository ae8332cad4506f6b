//! tl-db - Database abstraction layer for Tunelift
//!
//! This crate provides the `Database` trait, the DuckDB implementation the
//! pipeline runs against locally, and a Redshift stub for the native
//! warehouse target.

pub mod duckdb;
pub mod error;
pub mod redshift;
pub mod traits;

pub use duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use redshift::RedshiftBackend;
pub use traits::Database;

use std::sync::Arc;
use tl_core::config::{DatabaseConfig, DbType};

/// Create a connection for the configured backend
pub fn connect(config: &DatabaseConfig) -> DbResult<Arc<dyn Database>> {
    match config.db_type {
        DbType::DuckDb => Ok(Arc::new(DuckDbBackend::new(&config.path)?)),
        DbType::Redshift => {
            let connection = config.connection.as_deref().unwrap_or_default();
            Ok(Arc::new(RedshiftBackend::new(connection)?))
        }
    }
}

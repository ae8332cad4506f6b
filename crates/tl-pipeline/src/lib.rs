//! tl-pipeline - ETL pipeline for Tunelift
//!
//! This crate executes the catalog against a warehouse: `SchemaManager`
//! resets the schema, `StagingLoader` bulk-loads the staging tables,
//! `TransformRunner` populates the fact and dimension tables, and `Driver`
//! sequences the three in fixed order and produces a run report.

pub mod driver;
pub mod error;
pub mod phase;
pub mod schema;
pub mod staging;
pub mod transform;

pub use driver::Driver;
pub use error::{PipelineError, PipelineResult};
pub use phase::PhaseOutcome;
pub use schema::SchemaManager;
pub use staging::StagingLoader;
pub use transform::TransformRunner;

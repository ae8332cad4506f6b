//! tl-catalog - Query catalog for Tunelift
//!
//! This crate holds the fixed set of named SQL statement templates (DROP,
//! CREATE, COPY, INSERT) and renders them once at construction from
//! external configuration. The rendered statements are immutable and
//! grouped into ordered lists that form the pipeline's execution-order
//! contract.

pub mod catalog;
pub mod error;
pub(crate) mod templates;

pub use catalog::{Catalog, CatalogParams, Operation, Statement};
pub use error::{CatalogError, CatalogResult};

//! Error types for tl-catalog

use thiserror::Error;

/// Catalog rendering errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Template render error (Q001)
    #[error("[Q001] Failed to render statement '{statement}': {message}")]
    Render { statement: String, message: String },

    /// Unresolved placeholder left in rendered SQL (Q002)
    #[error("[Q002] Statement '{statement}' contains an unresolved placeholder token '{token}'")]
    UnresolvedPlaceholder { statement: String, token: String },
}

/// Result type alias for CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

//! Error types for the core domain.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building map data or layout.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A colour string could not be parsed.
    #[error("Invalid colour '{0}': expected #rgb, #rrggbb or a known colour name")]
    InvalidColor(String),

    /// Region data JSON was malformed.
    #[error("Invalid region data: {0}")]
    RegionData(#[from] serde_json::Error),

    /// Hover card template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

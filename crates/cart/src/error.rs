//! Widget-level error type.
//!
//! Under normal page availability nothing here surfaces to the user: storage
//! failures degrade softly (see [`crate::storage`]), and unknown-id
//! operations are silent no-ops. What remains is configuration rejected at
//! construction and template rendering failures.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error for cart widget operations.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Configuration rejected at controller construction.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A template failed to render.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

//! Error types for the pixlab facade

use thiserror::Error;

/// Errors that can occur while dispatching an operation
#[derive(Debug, Error)]
pub enum PixlabError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),

    /// Filter error
    #[error("filter error: {0}")]
    Filter(#[from] pixlab_filter::FilterError),

    /// Color error
    #[error("color error: {0}")]
    Color(#[from] pixlab_color::ColorError),

    /// A numeric parameter outside the range its transform accepts
    #[error("invalid value {value} for parameter `{name}`")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result type for dispatch operations
pub type PixlabResult<T> = Result<T, PixlabError>;

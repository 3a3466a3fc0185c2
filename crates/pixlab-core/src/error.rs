//! Error types for pixlab-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Out-of-bounds pixel access is deliberately not represented here: reads
//! outside the raster return 0 and writes are dropped.

use thiserror::Error;

/// pixlab-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid raster dimensions (zero, or too large to address)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u64, height: u64 },

    /// Sample buffer does not match the declared geometry
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Rows of unequal length passed to a row-based constructor
    #[error("ragged rows: row {row} has {actual} samples, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pixlab-core operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture construction failed in the core crate
    #[error("core error: {0}")]
    Core(#[from] pixlab_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;

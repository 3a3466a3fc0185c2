//! pixlab-color - Thresholding and color-space conversion
//!
//! This crate provides the color-related point transforms:
//!
//! - **Thresholding** ([`threshold`]): Fixed-cutoff binarization to 0/255
//! - **Color space conversion** ([`colorspace`]): RGB(A) to luma gray

pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use pixlab_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use colorspace::{convert_rgba_to_gray, convert_to_gray, rgb_to_gray};
pub use threshold::threshold;

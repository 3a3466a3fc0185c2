//! pixlab-filter - Neighborhood and tone filters
//!
//! This crate provides the filtering operations of the transform engine:
//!
//! - Convolution with arbitrary kernels, either over the interior only
//!   or with in-bounds weight renormalization at the border
//! - Gaussian blur
//! - Edge detection (Sobel gradient magnitude) and sharpening
//! - Tone curves: linear contrast and histogram equalization
//!
//! Every function takes `&Grid` and returns a new grid.

pub mod convolve;
pub mod edge;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve_interior, convolve_interior_pair, convolve_renormalized, gaussian_blur};
pub use edge::{EdgeOrientation, sharpen, sobel_edge, sobel_edge_oriented};
pub use enhance::{
    TrcLut, adjust_contrast, contrast_trc, equalize_histogram, equalize_trc, trc_map,
};

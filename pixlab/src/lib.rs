//! pixlab - Pixel-buffer transform engine
//!
//! The engine behind an image-processing playground: decoded RGBA pixels
//! come in, are reduced to a single-channel luma [`Grid`], transformed,
//! and handed back as a new raster.
//!
//! # Overview
//!
//! - Point transforms: contrast, thresholding, inversion, gray conversion
//! - Neighborhood filters: Gaussian blur, sharpening, Sobel edges
//! - Histogram equalization
//! - Six boundary-extension (padding) policies
//! - Dispatch from a string operation id plus a parameter map
//!
//! # Example
//!
//! ```
//! use pixlab::{Grid, Operation, apply};
//!
//! let grid = Grid::new_filled(4, 4, 100).unwrap();
//! let op = Operation::new("contrast").with_param("factor", 2.0);
//! let out = apply(&grid, &op).unwrap();
//! assert!(out.data().iter().all(|&v| v == 72));
//! ```

pub mod catalog;
mod error;
pub mod ops;
pub mod params;

// Re-export core types (primary data structures used everywhere)
pub use pixlab_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixlab_color as color;
pub use pixlab_core::color::Rgb;
pub use pixlab_filter as filter;

pub use error::{PixlabError, PixlabResult};
pub use ops::{Dispatcher, OperationKind, apply, apply_rgba};
pub use params::{Operation, ParamDefaults, ParamValue};

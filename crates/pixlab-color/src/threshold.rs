//! Fixed-cutoff binarization
//!
//! Output samples are 0 or 255 only, so the result is still an 8-bit
//! grid rather than a packed binary image.

use log::trace;
use pixlab_core::Grid;

use crate::{ColorError, ColorResult};

/// Binarize a grid.
///
/// Samples `>= cutoff` become 255, all others 0. The cutoff is real
/// valued: anything at or below 0 yields all white, anything above 255
/// all black.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if `cutoff` is NaN.
///
/// # Examples
///
/// ```
/// use pixlab_core::Grid;
/// use pixlab_color::threshold;
///
/// let grid = Grid::from_rows(&[[10u8, 128, 200]]).unwrap();
/// let bin = threshold(&grid, 128.0).unwrap();
/// assert_eq!(bin.data(), &[0, 255, 255]);
/// ```
pub fn threshold(grid: &Grid, cutoff: f64) -> ColorResult<Grid> {
    if cutoff.is_nan() {
        return Err(ColorError::InvalidParameters(
            "threshold cutoff must be a number".into(),
        ));
    }
    trace!("threshold: cutoff {}", cutoff);

    let mut lut = [0u8; 256];
    for (i, v) in lut.iter_mut().enumerate() {
        if i as f64 >= cutoff {
            *v = 255;
        }
    }
    Ok(grid.map_samples(|v| lut[v as usize]))
}

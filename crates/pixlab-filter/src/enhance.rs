//! Tone curve operations
//!
//! Point transforms expressed as tone reproduction curves (TRCs): a
//! 256-entry table is built once and every sample is remapped through
//! it with [`trc_map`].
//!
//! - [`contrast_trc`] / [`adjust_contrast`] - linear stretch about 128
//! - [`equalize_trc`] / [`equalize_histogram`] - histogram equalization

use log::trace;
use pixlab_core::color::{quantize, round_half_up};
use pixlab_core::{Grid, cumulative_histogram};

/// Center of the linear contrast stretch.
const CONTRAST_PIVOT: f64 = 128.0;

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input sample values [0..255] to output sample values [0..255].
pub type TrcLut = [u8; 256];

/// Generate a linear contrast TRC.
///
/// `lut[i] = clamp(round((i - 128) * factor + 128), 0, 255)`. Any factor
/// is accepted: 1.0 is the identity, values between 0 and 1 flatten
/// toward mid gray, 0 maps everything to 128 and negative factors invert
/// about the pivot.
pub fn contrast_trc(factor: f64) -> TrcLut {
    let mut lut = [0u8; 256];
    for (i, v) in lut.iter_mut().enumerate() {
        *v = quantize((i as f64 - CONTRAST_PIVOT) * factor + CONTRAST_PIVOT);
    }
    lut
}

/// Generate a histogram equalization TRC for `grid`.
///
/// With `cdf` the cumulative histogram and `cdf_min` its first nonzero
/// entry, `lut[i] = round((cdf[i] - cdf_min) / (total - cdf_min) * 255)`,
/// clamped to [0, 255]. A flat grid (every sample equal, so
/// `total == cdf_min`) yields an all-zero table.
pub fn equalize_trc(grid: &Grid) -> TrcLut {
    let cdf = cumulative_histogram(&grid.histogram());
    let total = grid.pixel_count() as u64;
    let cdf_min = cdf.iter().copied().find(|&c| c > 0).unwrap_or(0);

    let mut lut = [0u8; 256];
    if total == cdf_min {
        return lut;
    }
    let range = (total - cdf_min) as f64;
    for (v, &c) in lut.iter_mut().zip(&cdf) {
        // Entries below the darkest sample go negative and clamp to 0
        let scaled = (c as f64 - cdf_min as f64) / range * 255.0;
        *v = round_half_up(scaled).clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Remap every sample through a lookup table.
pub fn trc_map(grid: &Grid, lut: &TrcLut) -> Grid {
    grid.map_samples(|v| lut[v as usize])
}

/// Linear contrast adjustment about mid gray.
///
/// # Examples
///
/// ```
/// use pixlab_core::Grid;
/// use pixlab_filter::adjust_contrast;
///
/// let grid = Grid::new_filled(4, 4, 100).unwrap();
/// let out = adjust_contrast(&grid, 2.0);
/// assert!(out.data().iter().all(|&v| v == 72));
/// ```
pub fn adjust_contrast(grid: &Grid, factor: f64) -> Grid {
    trace!("adjust_contrast: factor {}", factor);
    trc_map(grid, &contrast_trc(factor))
}

/// Histogram equalization.
///
/// A flat grid maps to all zeros.
pub fn equalize_histogram(grid: &Grid) -> Grid {
    trc_map(grid, &equalize_trc(grid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contrast_trc_identity() {
        let lut = contrast_trc(1.0);
        for (i, &v) in lut.iter().enumerate() {
            assert_eq!(v as usize, i);
        }
    }

    #[test]
    fn test_contrast_trc_values() {
        let lut = contrast_trc(2.0);
        assert_eq!(lut[100], 72);
        assert_eq!(lut[128], 128);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
        assert_eq!(lut[200], 255);

        // Half values round up
        assert_eq!(contrast_trc(0.5)[127], 128);
    }

    #[test]
    fn test_contrast_trc_degenerate_factors() {
        assert!(contrast_trc(0.0).iter().all(|&v| v == 128));
        let neg = contrast_trc(-1.0);
        assert_eq!(neg[0], 255);
        assert_eq!(neg[128], 128);
        assert_eq!(neg[255], 1);
        assert!(contrast_trc(f64::NAN).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_equalize_trc_flat_is_zero() {
        let grid = Grid::new_filled(5, 3, 77).unwrap();
        assert!(equalize_trc(&grid).iter().all(|&v| v == 0));
        assert!(equalize_histogram(&grid).data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_equalize_two_levels() {
        let grid = Grid::from_rows(&[[50u8, 50], [90, 90]]).unwrap();
        let out = equalize_histogram(&grid);
        assert_eq!(out.data(), &[0, 0, 255, 255]);
    }

    #[test]
    fn test_equalize_four_levels() {
        // cdf at samples: 1, 2, 3, 4; cdf_min = 1, range = 3
        let grid = Grid::from_rows(&[[10u8, 20, 30, 40]]).unwrap();
        let lut = equalize_trc(&grid);
        assert_eq!(lut[10], 0);
        assert_eq!(lut[20], 85);
        assert_eq!(lut[30], 170);
        assert_eq!(lut[40], 255);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
    }

    #[test]
    fn test_trc_map() {
        let grid = Grid::from_rows(&[[0u8, 1, 2]]).unwrap();
        let mut lut = [0u8; 256];
        lut[1] = 9;
        lut[2] = 200;
        assert_eq!(trc_map(&grid, &lut).data(), &[0, 9, 200]);
    }
}

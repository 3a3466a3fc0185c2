//! Color space conversion
//!
//! A [`Grid`] already holds luma, so the gray conversion on a grid is a
//! copy. The RGBA variant recomputes luma per pixel and keeps alpha.

use pixlab_core::color::luma;
use pixlab_core::rgba::RGBA_CHANNELS;
use pixlab_core::{Grid, RgbaImage};

/// Convert an RGB triple to gray.
///
/// `round(0.299*r + 0.587*g + 0.114*b)`
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    luma(r, g, b)
}

/// Convert a grid to gray.
///
/// Returns an independent copy: grid samples are luma already.
pub fn convert_to_gray(grid: &Grid) -> Grid {
    grid.clone()
}

/// Convert an RGBA image to gray, preserving alpha.
///
/// R, G and B are all replaced by the pixel's luma.
pub fn convert_rgba_to_gray(img: &RgbaImage) -> RgbaImage {
    let mut out = img.clone();
    for p in out.data_mut().chunks_exact_mut(RGBA_CHANNELS) {
        let y = rgb_to_gray(p[0], p[1], p[2]);
        p[0] = y;
        p[1] = y;
        p[2] = y;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_gray() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(255, 0, 0), 76);
        assert_eq!(rgb_to_gray(0, 255, 0), 150);
        assert_eq!(rgb_to_gray(0, 0, 255), 29);
    }

    #[test]
    fn test_convert_to_gray_is_copy() {
        let grid = Grid::from_rows(&[[3u8, 250], [17, 90]]).unwrap();
        assert_eq!(convert_to_gray(&grid), grid);
    }

    #[test]
    fn test_convert_rgba_to_gray_keeps_alpha() {
        let img = RgbaImage::from_vec(2, 1, vec![255, 0, 0, 10, 0, 0, 255, 200]).unwrap();
        let gray = convert_rgba_to_gray(&img);
        assert_eq!(gray.data(), &[76, 76, 76, 10, 29, 29, 29, 200]);
        // Luma of the result equals luma of the input
        assert_eq!(Grid::from_rgba(&gray), Grid::from_rgba(&img));
    }
}

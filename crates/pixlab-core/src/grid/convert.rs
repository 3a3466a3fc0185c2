//! Conversion between RGBA images and luma grids
//!
//! These are the only two places where the interleaved boundary format
//! meets the canonical single-channel grid.

use super::Grid;
use crate::color;
use crate::rgba::RgbaImage;

impl Grid {
    /// Convert an RGBA image to a luma grid.
    ///
    /// Each pixel becomes `round(0.299*R + 0.587*G + 0.114*B)`; alpha is
    /// discarded.
    ///
    /// ```
    /// use pixlab_core::{Grid, RgbaImage};
    ///
    /// let img = RgbaImage::from_vec(1, 1, vec![255, 0, 0, 17]).unwrap();
    /// assert_eq!(Grid::from_rgba(&img).get_pixel(0, 0), 76);
    /// ```
    pub fn from_rgba(img: &RgbaImage) -> Grid {
        let data = img
            .pixels()
            .map(|p| color::luma(p[0], p[1], p[2]))
            .collect();
        Grid {
            width: img.width(),
            height: img.height(),
            data,
        }
    }

    /// Convert the grid to an opaque gray RGBA image.
    ///
    /// The luma sample is replicated into R, G and B; A is 255.
    pub fn to_rgba(&self) -> RgbaImage {
        let mut data = Vec::with_capacity(self.data.len() * 4);
        for &v in &self.data {
            data.extend_from_slice(&[v, v, v, 255]);
        }
        RgbaImage::from_raw_parts(self.width, self.height, data)
    }
}

//! Pixel access functions
//!
//! Bounds-tolerant accessors used throughout the transforms:
//!
//! - [`Grid::get_pixel`] treats anything outside the grid as black (0)
//! - [`Grid::set_pixel`] silently drops writes outside the grid
//!
//! Several callers rely on these conventions, so neither accessor ever
//! returns an error or panics. The `_unchecked` variants are for inner
//! loops that have already established the coordinates are valid.

use super::Grid;
use crate::color::quantize;

impl Grid {
    #[inline]
    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns 0 if the coordinates are out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i64, y: i64) -> u8 {
        self.index_of(x, y).map_or(0, |i| self.data[i])
    }

    /// Set a pixel at (x, y) from a real value.
    ///
    /// The value is clamped to `[0, 255]` and rounded before it is stored.
    /// Out-of-bounds coordinates are a no-op.
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, value: f64) {
        if let Some(i) = self.index_of(x, y) {
            self.data[i] = quantize(value);
        }
    }

    /// Get a pixel value without the out-of-bounds convention.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Store a sample without the out-of-bounds convention.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: u8) {
        debug_assert!(x < self.width && y < self.height);
        let w = self.width as usize;
        self.data[y as usize * w + x as usize] = value;
    }

    /// Read a rectangular block of samples, row by row.
    ///
    /// The rectangle may extend past the grid; those cells read as 0, the
    /// same as [`Grid::get_pixel`]. This is the query behind comparing
    /// the same region of an input and an output grid.
    ///
    /// ```
    /// use pixlab_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[1u8, 2], [3, 4]]).unwrap();
    /// assert_eq!(grid.region_values(1, 1, 2, 2), vec![vec![4, 0], vec![0, 0]]);
    /// ```
    pub fn region_values(&self, x: i64, y: i64, width: u32, height: u32) -> Vec<Vec<u8>> {
        (0..height as i64)
            .map(|dy| {
                (0..width as i64)
                    .map(|dx| self.get_pixel(x + dx, y + dy))
                    .collect()
            })
            .collect()
    }
}

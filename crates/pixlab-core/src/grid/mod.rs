//! Grid - The canonical raster container
//!
//! A `Grid` is a single-channel luma image: one `u8` sample per pixel,
//! stored row-major with a stride equal to the width.
//!
//! # Ownership model
//!
//! `Grid` owns its samples outright and `Clone` is a deep copy. Every
//! transform in pixlab takes `&Grid` and returns a freshly allocated
//! `Grid`, so an output can never alias its input.
//!
//! # Sample range
//!
//! Storage is `u8`, so every sample is an integer in `[0, 255]`. Writes
//! from real-valued math go through [`Grid::set_pixel`], which clamps and
//! rounds at the moment of the write.

mod access;
mod border;
mod convert;
mod histogram;
mod ops;

pub use border::{
    PaddingMode, custom_padding, reflect_padding, replicate_padding, symmetric_padding,
    wrap_padding, zero_padding,
};
pub use histogram::cumulative_histogram;

use crate::error::{Error, Result};

/// Largest pixel count a raster may hold.
///
/// Geometry above this is rejected with [`Error::InvalidDimension`]
/// before anything is allocated.
pub const MAX_PIXELS: u64 = 1 << 29;

/// Pixel count of a `width x height` raster, validated against
/// [`MAX_PIXELS`].
pub(crate) fn checked_pixel_count(width: u32, height: u32) -> Result<usize> {
    let count = width as u64 * height as u64;
    if count == 0 || count > MAX_PIXELS {
        return Err(Error::InvalidDimension {
            width: width as u64,
            height: height as u64,
        });
    }
    usize::try_from(count).map_err(|_| Error::InvalidDimension {
        width: width as u64,
        height: height as u64,
    })
}

/// Grid - Single-channel luma raster
///
/// # Examples
///
/// ```
/// use pixlab_core::Grid;
///
/// let grid = Grid::new(640, 480).unwrap();
/// assert_eq!(grid.width(), 640);
/// assert_eq!(grid.height(), 480);
/// assert_eq!(grid.get_pixel(10, 10), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples, row-major, `width * height` long
    data: Vec<u8>,
}

impl Grid {
    /// Create a new grid with every sample set to 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the pixel count exceeds [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new grid with every sample set to `value`.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Grid {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for empty geometry and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            data,
        })
    }

    /// Build a grid from a slice of rows.
    ///
    /// All rows must have the same, nonzero length.
    ///
    /// ```
    /// use pixlab_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[5u8, 6], [7, 8]]).unwrap();
    /// assert_eq!(grid.get_pixel(1, 1), 8);
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(width * height);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: width,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(Error::InvalidDimension {
                    width: width as u64,
                    height: height as u64,
                });
            }
        };
        Self::from_vec(w, h, data)
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        checked_pixel_count(width, height)
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get mutable access to the samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the grid and return its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Get one row of samples mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.width as usize;
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Create a zeroed grid with the same dimensions.
    pub fn create_template(&self) -> Self {
        Grid {
            width: self.width,
            height: self.height,
            data: vec![0; self.data.len()],
        }
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Build a new grid by mapping every sample independently.
    ///
    /// The closure sees samples in row-major order.
    pub fn map_samples(&self, mut f: impl FnMut(u8) -> u8) -> Grid {
        Grid {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

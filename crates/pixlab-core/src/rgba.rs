//! RgbaImage - Interleaved RGBA raster
//!
//! The boundary representation exchanged with decoders and displays:
//! four bytes per pixel in R, G, B, A order, rows packed with a stride of
//! `width * 4`. Transforms do not run on this type; it is converted to a
//! [`Grid`](crate::Grid) on the way in and back on the way out.

use crate::error::{Error, Result};
use crate::grid::checked_pixel_count;

/// Bytes per RGBA pixel
pub const RGBA_CHANNELS: usize = 4;

/// Interleaved 8-bit RGBA image
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Create a fully transparent black image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(RgbaImage {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap decoded RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for empty geometry and
    /// [`Error::DataLengthMismatch`] if `data.len() != width * height * 4`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbaImage {
            width,
            height,
            data,
        })
    }

    /// Assemble an image whose geometry the caller has already validated.
    pub(crate) fn from_raw_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * RGBA_CHANNELS);
        RgbaImage {
            width,
            height,
            data,
        }
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        checked_pixel_count(width, height)?
            .checked_mul(RGBA_CHANNELS)
            .ok_or(Error::InvalidDimension {
                width: width as u64,
                height: height as u64,
            })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes between the starts of consecutive rows.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * RGBA_CHANNELS
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Iterate over pixels as `[r, g, b, a]` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(RGBA_CHANNELS)
    }

    /// Get RGBA values at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride() + x as usize * RGBA_CHANNELS;
        let p = &self.data[i..i + RGBA_CHANNELS];
        Some((p[0], p[1], p[2], p[3]))
    }

    /// Set RGBA values at (x, y). Out-of-bounds writes are dropped.
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = y as usize * self.stride() + x as usize * RGBA_CHANNELS;
        self.data[i..i + RGBA_CHANNELS].copy_from_slice(&[r, g, b, a]);
    }
}

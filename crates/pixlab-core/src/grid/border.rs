//! Border operations for grids
//!
//! This module provides boundary extension (padding) and its inverse:
//!
//! - [`Grid::add_border`] enlarges a grid by `npix` on every side,
//!   synthesizing the new samples according to a [`PaddingMode`]
//! - [`Grid::remove_border`] crops a uniform border away
//!
//! Every policy copies the interior verbatim; they differ only in how a
//! destination coordinate in the border maps back to a source sample.

use log::trace;

use super::Grid;
use crate::color::Rgb;
use crate::error::{Error, Result};

/// Boundary-extension policy for [`Grid::add_border`].
///
/// Rules are given for the x axis with `sx = x - npix`; y is symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    /// Border samples are 0
    Zero,
    /// Edge samples extend outward: `clamp(sx, 0, w-1)`
    Replicate,
    /// Mirror that repeats the edge sample: `-sx-1` / `2w-sx-1`
    Reflect,
    /// Mirror about the edge sample: `-sx` / `2w-sx-2`
    Symmetric,
    /// Circular: `sx mod w`
    Wrap,
    /// Border filled with the luma of a fixed color
    Constant(Rgb),
}

impl PaddingMode {
    /// Map a source coordinate that may lie outside `[0, len)` back into
    /// the grid. Returns `None` when the policy fills with a constant.
    ///
    /// Mirror policies reflect once and then clamp, so borders wider than
    /// the grid settle on the far edge rather than reflecting again.
    #[inline]
    fn source_index(self, s: i64, len: i64) -> Option<i64> {
        if (0..len).contains(&s) {
            return Some(s);
        }
        match self {
            PaddingMode::Zero | PaddingMode::Constant(_) => None,
            PaddingMode::Replicate => Some(s.clamp(0, len - 1)),
            PaddingMode::Reflect => {
                let m = if s < 0 { -s - 1 } else { 2 * len - s - 1 };
                Some(m.clamp(0, len - 1))
            }
            PaddingMode::Symmetric => {
                let m = if s < 0 { -s } else { 2 * len - s - 2 };
                Some(m.clamp(0, len - 1))
            }
            PaddingMode::Wrap => Some(s.rem_euclid(len)),
        }
    }

    /// Sample used where [`Self::source_index`] yields no source.
    #[inline]
    fn fill_value(self) -> u8 {
        match self {
            PaddingMode::Constant(c) => c.luma(),
            _ => 0,
        }
    }
}

impl Grid {
    /// Add a uniform border around the grid.
    ///
    /// # Arguments
    ///
    /// * `npix` - Border width in pixels; 0 yields an identical copy
    /// * `mode` - How border samples are synthesized
    ///
    /// # Returns
    ///
    /// New grid with dimensions `(width + 2*npix, height + 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the padded size overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixlab_core::{Grid, PaddingMode};
    ///
    /// let grid = Grid::from_rows(&[[5u8, 6], [7, 8]]).unwrap();
    /// let padded = grid.add_border(1, PaddingMode::Zero).unwrap();
    /// assert_eq!(padded.width(), 4);
    /// assert_eq!(padded.get_pixel(1, 1), 5);
    /// assert_eq!(padded.get_pixel(0, 0), 0);
    /// ```
    pub fn add_border(&self, npix: u32, mode: PaddingMode) -> Result<Grid> {
        let overflow = || Error::InvalidDimension {
            width: self.width as u64 + 2 * npix as u64,
            height: self.height as u64 + 2 * npix as u64,
        };
        let extra = npix.checked_mul(2).ok_or_else(overflow)?;
        let wd = self.width.checked_add(extra).ok_or_else(overflow)?;
        let hd = self.height.checked_add(extra).ok_or_else(overflow)?;

        let ws = self.width as i64;
        let hs = self.height as i64;
        let p = npix as i64;
        let fill = mode.fill_value();

        trace!(
            "add_border: {}x{} -> {}x{} with {:?}",
            self.width, self.height, wd, hd, mode
        );

        let mut out = Grid::new_filled(wd, hd, fill)?;

        // The column mapping is identical for every row
        let col_map: Vec<Option<usize>> = (0..wd as i64)
            .map(|x| mode.source_index(x - p, ws).map(|s| s as usize))
            .collect();
        for y in 0..hd {
            let Some(sy) = mode.source_index(y as i64 - p, hs) else {
                continue;
            };
            let src = self.row(sy as u32);
            let dst = out.row_mut(y);
            for (d, sx) in dst.iter_mut().zip(&col_map) {
                if let Some(sx) = sx {
                    *d = src[*sx];
                }
            }
        }

        Ok(out)
    }

    /// Remove a uniform border from the grid.
    ///
    /// # Returns
    ///
    /// New grid with dimensions `(width - 2*npix, height - 2*npix)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the border leaves no pixels.
    pub fn remove_border(&self, npix: u32) -> Result<Grid> {
        let extra = npix as u64 * 2;
        if extra >= self.width as u64 || extra >= self.height as u64 {
            return Err(Error::InvalidParameter(format!(
                "border {npix} too large for {}x{} grid",
                self.width, self.height
            )));
        }
        let wd = self.width - 2 * npix;
        let hd = self.height - 2 * npix;
        let mut data = Vec::with_capacity(wd as usize * hd as usize);
        for y in npix..npix + hd {
            let row = self.row(y);
            data.extend_from_slice(&row[npix as usize..(npix + wd) as usize]);
        }
        Grid::from_vec(wd, hd, data)
    }
}

/// Pad with zeros.
pub fn zero_padding(grid: &Grid, npix: u32) -> Result<Grid> {
    grid.add_border(npix, PaddingMode::Zero)
}

/// Pad by repeating the edge samples.
pub fn replicate_padding(grid: &Grid, npix: u32) -> Result<Grid> {
    grid.add_border(npix, PaddingMode::Replicate)
}

/// Pad with the mirror that repeats the edge sample.
pub fn reflect_padding(grid: &Grid, npix: u32) -> Result<Grid> {
    grid.add_border(npix, PaddingMode::Reflect)
}

/// Pad with the mirror about the edge sample.
pub fn symmetric_padding(grid: &Grid, npix: u32) -> Result<Grid> {
    grid.add_border(npix, PaddingMode::Symmetric)
}

/// Pad by wrapping around to the opposite edge.
pub fn wrap_padding(grid: &Grid, npix: u32) -> Result<Grid> {
    grid.add_border(npix, PaddingMode::Wrap)
}

/// Pad with the luma of `color`.
pub fn custom_padding(grid: &Grid, npix: u32, color: Rgb) -> Result<Grid> {
    grid.add_border(npix, PaddingMode::Constant(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_3x3() -> Grid {
        Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    fn top_row(g: &Grid) -> Vec<u8> {
        g.row(0).to_vec()
    }

    #[test]
    fn test_source_index_rules() {
        let w = 4;
        assert_eq!(PaddingMode::Replicate.source_index(-2, w), Some(0));
        assert_eq!(PaddingMode::Replicate.source_index(5, w), Some(3));
        assert_eq!(PaddingMode::Reflect.source_index(-1, w), Some(0));
        assert_eq!(PaddingMode::Reflect.source_index(-2, w), Some(1));
        assert_eq!(PaddingMode::Reflect.source_index(4, w), Some(3));
        assert_eq!(PaddingMode::Symmetric.source_index(-1, w), Some(1));
        assert_eq!(PaddingMode::Symmetric.source_index(4, w), Some(2));
        assert_eq!(PaddingMode::Wrap.source_index(-1, w), Some(3));
        assert_eq!(PaddingMode::Wrap.source_index(9, w), Some(1));
        assert_eq!(PaddingMode::Zero.source_index(-1, w), None);
        assert_eq!(PaddingMode::Zero.source_index(2, w), Some(2));
    }

    #[test]
    fn test_mirror_clamps_after_single_reflection() {
        // Border wider than the grid: reflected index is clamped
        assert_eq!(PaddingMode::Reflect.source_index(-10, 3), Some(2));
        assert_eq!(PaddingMode::Symmetric.source_index(10, 3), Some(0));
        // Single-column grid
        assert_eq!(PaddingMode::Symmetric.source_index(-1, 1), Some(0));
        assert_eq!(PaddingMode::Reflect.source_index(1, 1), Some(0));
    }

    #[test]
    fn test_zero_border() {
        let g = Grid::from_rows(&[[5u8, 6], [7, 8]]).unwrap();
        let p = g.add_border(1, PaddingMode::Zero).unwrap();
        let expected = Grid::from_rows(&[
            [0u8, 0, 0, 0],
            [0, 5, 6, 0],
            [0, 7, 8, 0],
            [0, 0, 0, 0],
        ])
        .unwrap();
        assert_eq!(p, expected);
    }

    #[test]
    fn test_replicate_border() {
        let p = sample_3x3().add_border(2, PaddingMode::Replicate).unwrap();
        assert_eq!(top_row(&p), vec![1, 1, 1, 2, 3, 3, 3]);
        assert_eq!(p.get_pixel(6, 6), 9);
    }

    #[test]
    fn test_reflect_border() {
        let p = sample_3x3().add_border(2, PaddingMode::Reflect).unwrap();
        // Source row for y=0 is -2 -> 1
        assert_eq!(top_row(&p), vec![5, 4, 4, 5, 6, 6, 5]);
    }

    #[test]
    fn test_symmetric_border() {
        let p = sample_3x3().add_border(2, PaddingMode::Symmetric).unwrap();
        // Source row for y=0 is -2 -> 2
        assert_eq!(top_row(&p), vec![9, 8, 7, 8, 9, 8, 7]);
    }

    #[test]
    fn test_wrap_border() {
        let p = sample_3x3().add_border(1, PaddingMode::Wrap).unwrap();
        assert_eq!(top_row(&p), vec![9, 7, 8, 9, 7]);
        assert_eq!(p.get_pixel(0, 1), 3);
    }

    #[test]
    fn test_constant_border_uses_color_luma() {
        let p = sample_3x3()
            .add_border(1, PaddingMode::Constant(Rgb::new(255, 0, 0)))
            .unwrap();
        assert_eq!(p.get_pixel(0, 0), 76);
        assert_eq!(p.get_pixel(4, 2), 76);
        assert_eq!(p.get_pixel(1, 1), 1);
    }

    #[test]
    fn test_zero_npix_is_copy() {
        let g = sample_3x3();
        for mode in [
            PaddingMode::Zero,
            PaddingMode::Replicate,
            PaddingMode::Reflect,
            PaddingMode::Symmetric,
            PaddingMode::Wrap,
            PaddingMode::Constant(Rgb::default()),
        ] {
            assert_eq!(g.add_border(0, mode).unwrap(), g);
        }
    }

    #[test]
    fn test_add_border_overflow() {
        let g = Grid::new(1, 1).unwrap();
        let err = g.add_border(u32::MAX, PaddingMode::Zero).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
    }

    #[test]
    fn test_add_border_too_many_pixels() {
        // Fits in u32 but exceeds MAX_PIXELS
        let g = Grid::new(1, 1).unwrap();
        for mode in [PaddingMode::Zero, PaddingMode::Wrap] {
            let err = g.add_border(i32::MAX as u32, mode).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidDimension {
                    width: u32::MAX as u64,
                    height: u32::MAX as u64
                }
            );
        }
    }

    #[test]
    fn test_remove_border_inverts_add() {
        let g = sample_3x3();
        let p = g.add_border(3, PaddingMode::Wrap).unwrap();
        assert_eq!(p.remove_border(3).unwrap(), g);
        assert!(g.remove_border(2).is_err());
        assert_eq!(g.remove_border(1).unwrap().data(), &[5]);
    }

    #[test]
    fn test_wrappers_match_add_border() {
        let g = Grid::from_rows(&[[1u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(zero_padding(&g, 2).unwrap(), g.add_border(2, PaddingMode::Zero).unwrap());
        assert_eq!(
            replicate_padding(&g, 2).unwrap(),
            g.add_border(2, PaddingMode::Replicate).unwrap()
        );
        assert_eq!(
            reflect_padding(&g, 2).unwrap(),
            g.add_border(2, PaddingMode::Reflect).unwrap()
        );
        assert_eq!(
            symmetric_padding(&g, 2).unwrap(),
            g.add_border(2, PaddingMode::Symmetric).unwrap()
        );
        assert_eq!(wrap_padding(&g, 2).unwrap(), g.add_border(2, PaddingMode::Wrap).unwrap());
        let c = Rgb::new(255, 0, 0);
        assert_eq!(custom_padding(&g, 1, c).unwrap().get_pixel(0, 0), 76);
    }
}

//! pixlab-test - Regression test framework for pixlab
//!
//! This crate provides the comparison bookkeeping used by the
//! `tests/*_reg.rs` suites of every pixlab crate, plus a few
//! deterministic grid fixtures.
//!
//! # Usage
//!
//! ```ignore
//! use pixlab_test::{RegParams, gradient_grid};
//!
//! let mut rp = RegParams::new("border");
//! let grid = gradient_grid(8, 8)?;
//! rp.compare_values(8.0, grid.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "verbose" to print passing comparisons too

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use pixlab_core::Grid;

/// Build a grid from literal rows.
pub fn grid_from_rows<R: AsRef<[u8]>>(rows: &[R]) -> TestResult<Grid> {
    Ok(Grid::from_rows(rows)?)
}

/// A grid where every sample equals `value`.
pub fn flat_grid(width: u32, height: u32, value: u8) -> TestResult<Grid> {
    Ok(Grid::new_filled(width, height, value)?)
}

/// A diagonal ramp from 0 at the top-left to 255 at the bottom-right.
pub fn gradient_grid(width: u32, height: u32) -> TestResult<Grid> {
    let span = (width as u64 + height as u64).saturating_sub(2).max(1);
    let mut grid = Grid::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = (x as u64 + y as u64) * 255 / span;
            grid.set_pixel_unchecked(x, y, v as u8);
        }
    }
    Ok(grid)
}

/// A deterministic, irregular pattern that exercises the full sample range.
///
/// Different seeds give different patterns; the same seed always gives
/// the same grid.
pub fn pattern_grid(width: u32, height: u32, seed: u32) -> TestResult<Grid> {
    let mut grid = Grid::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let h = (x.wrapping_mul(37))
                .wrapping_add(y.wrapping_mul(101))
                .wrapping_add(seed.wrapping_mul(53))
                ^ x.wrapping_mul(y).wrapping_add(seed);
            grid.set_pixel_unchecked(x, y, (h % 256) as u8);
        }
    }
    Ok(grid)
}

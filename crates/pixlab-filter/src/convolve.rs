//! Convolution operations
//!
//! Two border treatments are provided:
//!
//! - [`convolve_renormalized`] evaluates every pixel, drops taps that fall
//!   outside the grid and divides by the sum of the weights that remain
//! - [`convolve_interior`] evaluates only pixels whose whole window lies
//!   inside the grid and copies the rest from the input
//!
//! Sums are accumulated in `f64` in row-major kernel order, so results
//! are deterministic.

use std::ops::Range;

use log::trace;
use pixlab_core::Grid;
use pixlab_core::color::quantize;

use crate::{FilterError, FilterResult, Kernel};

/// Convolve a grid, renormalizing by the in-bounds kernel weight.
///
/// At each pixel the weighted sum over in-bounds taps is divided by the
/// sum of those taps' weights. If that weight sum is zero the raw sum is
/// used instead.
pub fn convolve_renormalized(grid: &Grid, kernel: &Kernel) -> Grid {
    let w = grid.width() as i64;
    let h = grid.height() as i64;
    let kw = kernel.width() as i64;
    let kh = kernel.height() as i64;
    let kcx = kernel.center_x() as i64;
    let kcy = kernel.center_y() as i64;
    let weights = kernel.data();

    let mut out = grid.create_template();
    for y in 0..h {
        let dst = out.row_mut(y as u32);
        for (x, d) in (0..w).zip(dst.iter_mut()) {
            let mut sum = 0.0;
            let mut weight_sum = 0.0;

            for ky in 0..kh {
                let sy = y + ky - kcy;
                if sy < 0 || sy >= h {
                    continue;
                }
                let src = grid.row(sy as u32);
                let krow = &weights[(ky * kw) as usize..((ky + 1) * kw) as usize];
                for (kx, &k) in krow.iter().enumerate() {
                    let sx = x + kx as i64 - kcx;
                    if sx < 0 || sx >= w {
                        continue;
                    }
                    sum += src[sx as usize] as f64 * k;
                    weight_sum += k;
                }
            }

            let value = if weight_sum != 0.0 {
                sum / weight_sum
            } else {
                sum
            };
            *d = quantize(value);
        }
    }

    out
}

/// Rows and columns at which the whole kernel window lies inside the grid.
fn interior(grid: &Grid, kernel: &Kernel) -> Option<(Range<u32>, Range<u32>)> {
    let x0 = kernel.center_x();
    let y0 = kernel.center_y();
    let right = kernel.width() - 1 - x0;
    let below = kernel.height() - 1 - y0;
    let x1 = grid.width().checked_sub(right)?;
    let y1 = grid.height().checked_sub(below)?;
    if x0 >= x1 || y0 >= y1 {
        return None;
    }
    Some((x0..x1, y0..y1))
}

/// Weighted sum of the window centered on an interior pixel.
#[inline]
fn window_sum(grid: &Grid, kernel: &Kernel, x: u32, y: u32) -> f64 {
    let kw = kernel.width() as usize;
    let left = x - kernel.center_x();
    let top = y - kernel.center_y();
    let mut sum = 0.0;
    for (ky, krow) in kernel.data().chunks_exact(kw).enumerate() {
        let src = &grid.row(top + ky as u32)[left as usize..left as usize + kw];
        for (&v, &k) in src.iter().zip(krow) {
            sum += v as f64 * k;
        }
    }
    sum
}

/// Convolve the interior of a grid with a kernel.
///
/// Pixels closer to the edge than the kernel reaches keep their input
/// value. A grid with no interior is returned unchanged.
pub fn convolve_interior(grid: &Grid, kernel: &Kernel) -> Grid {
    let mut out = grid.clone();
    let Some((xs, ys)) = interior(grid, kernel) else {
        trace!(
            "convolve_interior: {}x{} grid has no interior for {}x{} kernel",
            grid.width(),
            grid.height(),
            kernel.width(),
            kernel.height()
        );
        return out;
    };
    for y in ys {
        for x in xs.clone() {
            out.set_pixel_unchecked(x, y, quantize(window_sum(grid, kernel, x, y)));
        }
    }
    out
}

/// Convolve the interior with two kernels and combine the responses.
///
/// `combine` receives the two raw sums for each interior pixel and returns
/// the value to store (clamped and rounded).
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if the kernels differ in size or
/// center.
pub fn convolve_interior_pair(
    grid: &Grid,
    first: &Kernel,
    second: &Kernel,
    combine: impl Fn(f64, f64) -> f64,
) -> FilterResult<Grid> {
    let same_shape = first.width() == second.width()
        && first.height() == second.height()
        && first.center_x() == second.center_x()
        && first.center_y() == second.center_y();
    if !same_shape {
        return Err(FilterError::InvalidKernel(format!(
            "paired kernels must share geometry: {}x{} vs {}x{}",
            first.width(),
            first.height(),
            second.width(),
            second.height()
        )));
    }

    Ok(combine_interior(grid, first, second, combine))
}

/// Paired interior convolution for kernels already known to share
/// geometry.
pub(crate) fn combine_interior(
    grid: &Grid,
    first: &Kernel,
    second: &Kernel,
    combine: impl Fn(f64, f64) -> f64,
) -> Grid {
    debug_assert_eq!(
        (first.width(), first.height(), first.center_x(), first.center_y()),
        (second.width(), second.height(), second.center_x(), second.center_y())
    );
    let mut out = grid.clone();
    let Some((xs, ys)) = interior(grid, first) else {
        return out;
    };
    for y in ys {
        for x in xs.clone() {
            let a = window_sum(grid, first, x, y);
            let b = window_sum(grid, second, x, y);
            out.set_pixel_unchecked(x, y, quantize(combine(a, b)));
        }
    }
    out
}

/// Apply Gaussian blur.
///
/// Uses [`Kernel::gaussian`] with border renormalization. A radius of 0
/// returns a copy of the input.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if `radius` exceeds
/// [`MAX_GAUSSIAN_RADIUS`](crate::kernel::MAX_GAUSSIAN_RADIUS).
pub fn gaussian_blur(grid: &Grid, radius: u32) -> FilterResult<Grid> {
    if radius == 0 {
        return Ok(grid.clone());
    }
    let kernel = Kernel::gaussian(radius)?;
    trace!(
        "gaussian_blur: radius {} on {}x{}",
        radius,
        grid.width(),
        grid.height()
    );
    Ok(convolve_renormalized(grid, &kernel))
}

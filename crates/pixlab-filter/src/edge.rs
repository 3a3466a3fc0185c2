//! Edge detection and sharpening
//!
//! Both filters use 3x3 kernels evaluated over the interior only; the
//! one-pixel border ring is copied from the input, and grids narrower or
//! shorter than 3 pixels come back unchanged.

use pixlab_core::Grid;

use crate::Kernel;
use crate::convolve::{combine_interior, convolve_interior};

/// Edge detection orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeOrientation {
    /// Respond to horizontal intensity change (`|gx|`)
    Horizontal,
    /// Respond to vertical intensity change (`|gy|`)
    Vertical,
    /// Gradient magnitude `sqrt(gx² + gy²)`
    #[default]
    All,
}

/// Apply Sobel edge detection with the full gradient magnitude.
///
/// ```
/// use pixlab_core::Grid;
/// use pixlab_filter::sobel_edge;
///
/// let grid = Grid::from_rows(&[[0u8, 0, 255], [0, 0, 255], [0, 0, 255]]).unwrap();
/// let edges = sobel_edge(&grid);
/// assert_eq!(edges.get_pixel(1, 1), 255);
/// assert_eq!(edges.get_pixel(0, 0), 0);
/// ```
pub fn sobel_edge(grid: &Grid) -> Grid {
    sobel_edge_oriented(grid, EdgeOrientation::All)
}

/// Apply Sobel edge detection for one orientation.
///
/// # Arguments
/// * `grid` - Input grid
/// * `orientation` - Which edges to detect
pub fn sobel_edge_oriented(grid: &Grid, orientation: EdgeOrientation) -> Grid {
    let gx = Kernel::sobel_horizontal();
    let gy = Kernel::sobel_vertical();
    match orientation {
        EdgeOrientation::Horizontal => combine_interior(grid, &gx, &gy, |x, _| x.abs()),
        EdgeOrientation::Vertical => combine_interior(grid, &gx, &gy, |_, y| y.abs()),
        EdgeOrientation::All => combine_interior(grid, &gx, &gy, |x, y| (x * x + y * y).sqrt()),
    }
}

/// Sharpen with the 3x3 kernel `[[0,-1,0],[-1,5,-1],[0,-1,0]]`.
pub fn sharpen(grid: &Grid) -> Grid {
    convolve_interior(grid, &Kernel::sharpen())
}

//! Per-sample raster operations on grids

use super::Grid;

impl Grid {
    /// Invert all samples: `255 - v`.
    ///
    /// # Returns
    ///
    /// New grid with inverted samples.
    pub fn invert(&self) -> Grid {
        self.map_samples(|v| 255 - v)
    }
}

//! Histogram generation for grids
//!
//! Functions to compute the intensity distribution of a grid.

use super::Grid;

impl Grid {
    /// Get the 256-bin intensity histogram of the grid.
    ///
    /// Bin `i` holds the number of samples equal to `i`. Samples are
    /// visited in row-major order.
    ///
    /// ```
    /// use pixlab_core::Grid;
    ///
    /// let grid = Grid::from_rows(&[[0u8, 0], [7, 255]]).unwrap();
    /// let hist = grid.histogram();
    /// assert_eq!(hist[0], 2);
    /// assert_eq!(hist[7], 1);
    /// assert_eq!(hist[255], 1);
    /// ```
    pub fn histogram(&self) -> [u32; 256] {
        let mut hist = [0u32; 256];
        for &v in &self.data {
            hist[v as usize] += 1;
        }
        hist
    }
}

/// Running sum of a histogram: `cdf[i] = hist[0] + ... + hist[i]`.
pub fn cumulative_histogram(hist: &[u32; 256]) -> [u64; 256] {
    let mut cdf = [0u64; 256];
    let mut acc = 0u64;
    for (c, &h) in cdf.iter_mut().zip(hist) {
        acc += h as u64;
        *c = acc;
    }
    cdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_all_pixels() {
        let g = Grid::from_rows(&[[1u8, 2, 2], [3, 3, 3]]).unwrap();
        let hist = g.histogram();
        assert_eq!(hist[1], 1);
        assert_eq!(hist[2], 2);
        assert_eq!(hist[3], 3);
        assert_eq!(hist.iter().sum::<u32>(), 6);
    }

    #[test]
    fn test_cumulative_histogram() {
        let g = Grid::from_rows(&[[1u8, 2, 2], [3, 3, 3]]).unwrap();
        let cdf = cumulative_histogram(&g.histogram());
        assert_eq!(cdf[0], 0);
        assert_eq!(cdf[1], 1);
        assert_eq!(cdf[2], 3);
        assert_eq!(cdf[3], 6);
        assert_eq!(cdf[255], 6);
    }
}

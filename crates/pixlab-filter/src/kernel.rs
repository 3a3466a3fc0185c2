//! Convolution kernels
//!
//! Defines the weight matrices used by the convolution routines.
//!
//! Built-in kernels:
//! - [`Kernel::gaussian`] - normalized Gaussian, `σ = radius / 3`
//! - [`Kernel::sharpen`] - 3x3 Laplacian sharpen (center 5)
//! - [`Kernel::sobel_horizontal`] / [`Kernel::sobel_vertical`] - 3x3 Sobel

use crate::{FilterError, FilterResult};

/// Largest Gaussian radius accepted by [`Kernel::gaussian`].
///
/// A radius this size already builds a 2001x2001 kernel.
pub const MAX_GAUSSIAN_RADIUS: u32 = 1000;

/// A 2D convolution kernel
///
/// Weights are stored row-major. The center is the tap aligned with the
/// output pixel; for the built-in kernels it is the middle element.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f64>,
}

impl Kernel {
    /// Create a kernel from a slice of values, centered in the middle.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for empty dimensions or when
    /// `data.len() != width * height`.
    pub fn from_slice(width: u32, height: u32, data: &[f64]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "expected {expected} weights, got {}",
                data.len()
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Fixed 3x3 kernel from a literal.
    fn square3(rows: [[f64; 3]; 3]) -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    /// Create a Gaussian kernel of size `2*radius + 1`.
    ///
    /// Weights are `exp(-(dx² + dy²) / (2σ²))` with `σ = radius / 3`,
    /// normalized to sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `radius` is 0 (σ would be
    /// zero) or exceeds [`MAX_GAUSSIAN_RADIUS`].
    pub fn gaussian(radius: u32) -> FilterResult<Self> {
        if radius == 0 || radius > MAX_GAUSSIAN_RADIUS {
            return Err(FilterError::InvalidKernel(format!(
                "gaussian radius must be in 1..={MAX_GAUSSIAN_RADIUS}, got {radius}"
            )));
        }
        let size = 2 * radius + 1;
        let sigma = radius as f64 / 3.0;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let r = radius as i64;

        let mut data = Vec::with_capacity(size as usize * size as usize);
        let mut sum = 0.0;
        for y in 0..size as i64 {
            for x in 0..size as i64 {
                let dx = x - r;
                let dy = y - r;
                let v = (-((dx * dx + dy * dy) as f64) / two_sigma_sq).exp();
                data.push(v);
                sum += v;
            }
        }
        for v in &mut data {
            *v /= sum;
        }

        Ok(Kernel {
            width: size,
            height: size,
            cx: radius,
            cy: radius,
            data,
        })
    }

    /// Create a sharpening kernel.
    pub fn sharpen() -> Self {
        Self::square3([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]])
    }

    /// Sobel kernel responding to horizontal intensity change (gx).
    pub fn sobel_horizontal() -> Self {
        Self::square3([[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]])
    }

    /// Sobel kernel responding to vertical intensity change (gy).
    pub fn sobel_vertical() -> Self {
        Self::square3([[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]])
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the weights, row-major.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Get the weight at (x, y), or `None` outside the kernel.
    pub fn get(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

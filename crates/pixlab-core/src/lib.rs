//! pixlab Core - Raster data structures for the transform engine
//!
//! This crate provides the data containers used throughout pixlab:
//!
//! - [`Grid`] - The canonical single-channel luma raster
//! - [`RgbaImage`] - Interleaved RGBA bytes, used only at the boundary
//!   with decoders and displays
//! - [`PaddingMode`] - Boundary-extension policies for [`Grid::add_border`]
//! - [`color::Rgb`] - A structured color triple
//!
//! Every operation that produces a raster allocates a new one; inputs are
//! never modified or aliased.

pub mod error;
pub mod grid;
pub mod rgba;

pub use error::{Error, Result};
pub use grid::{
    Grid, MAX_PIXELS, PaddingMode, cumulative_histogram, custom_padding, reflect_padding,
    replicate_padding, symmetric_padding, wrap_padding, zero_padding,
};
pub use rgba::RgbaImage;

/// Color helpers shared by the grid conversions and the padding policies.
///
/// # Pixel format
///
/// Packed colors use the `0xRRGGBB` layout produced by the playground's
/// color picker: `(r << 16) | (g << 8) | b`.
pub mod color {
    /// Luma weight of the red channel.
    pub const LUMA_RED_WEIGHT: f64 = 0.299;
    /// Luma weight of the green channel.
    pub const LUMA_GREEN_WEIGHT: f64 = 0.587;
    /// Luma weight of the blue channel.
    pub const LUMA_BLUE_WEIGHT: f64 = 0.114;

    /// Shift amounts for packed `0xRRGGBB` colors
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Round half up, the way the reference outputs were produced.
    ///
    /// `f64::round` rounds half away from zero, which differs for negative
    /// halves; quantization goes through this function instead.
    #[inline]
    pub fn round_half_up(v: f64) -> f64 {
        (v + 0.5).floor()
    }

    /// Clamp and round a real value into a stored sample.
    ///
    /// NaN maps to 0.
    #[inline]
    pub fn quantize(v: f64) -> u8 {
        if v.is_nan() {
            return 0;
        }
        round_half_up(v).clamp(0.0, 255.0) as u8
    }

    /// Weighted luma of an RGB triple, unrounded.
    #[inline]
    pub fn luma_f64(r: u8, g: u8, b: u8) -> f64 {
        LUMA_RED_WEIGHT * r as f64 + LUMA_GREEN_WEIGHT * g as f64 + LUMA_BLUE_WEIGHT * b as f64
    }

    /// Rounded luma of an RGB triple.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        quantize(luma_f64(r, g, b))
    }

    /// An RGB color triple.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Rgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Default for Rgb {
        /// Mid-gray, the playground's default padding color.
        fn default() -> Self {
            Self::gray(128)
        }
    }

    impl Rgb {
        pub const fn new(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b }
        }

        pub const fn gray(v: u8) -> Self {
            Self { r: v, g: v, b: v }
        }

        /// Unpack a `0xRRGGBB` color. Bits above 24 are ignored.
        #[inline]
        pub fn from_packed(packed: u32) -> Self {
            Self {
                r: ((packed >> RED_SHIFT) & 0xff) as u8,
                g: ((packed >> GREEN_SHIFT) & 0xff) as u8,
                b: ((packed >> BLUE_SHIFT) & 0xff) as u8,
            }
        }

        /// Pack into `0xRRGGBB`.
        #[inline]
        pub fn to_packed(self) -> u32 {
            ((self.r as u32) << RED_SHIFT)
                | ((self.g as u32) << GREEN_SHIFT)
                | ((self.b as u32) << BLUE_SHIFT)
        }

        /// Rounded luma of this color.
        #[inline]
        pub fn luma(self) -> u8 {
            luma(self.r, self.g, self.b)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round_half_up_matches_reference() {
            assert_eq!(round_half_up(2.5), 3.0);
            assert_eq!(round_half_up(-0.5), 0.0);
            assert_eq!(round_half_up(-1.5), -1.0);
            assert_eq!(round_half_up(254.49), 254.0);
        }

        #[test]
        fn test_quantize_clamps() {
            assert_eq!(quantize(-20.0), 0);
            assert_eq!(quantize(300.0), 255);
            assert_eq!(quantize(127.5), 128);
            assert_eq!(quantize(f64::NAN), 0);
        }

        #[test]
        fn test_luma_primaries() {
            assert_eq!(luma(255, 0, 0), 76);
            assert_eq!(luma(0, 255, 0), 150);
            assert_eq!(luma(0, 0, 255), 29);
            assert_eq!(luma(255, 255, 255), 255);
            assert_eq!(luma(0, 0, 0), 0);
        }

        #[test]
        fn test_packed_roundtrip() {
            let c = Rgb::from_packed(0x12_34_56);
            assert_eq!(c, Rgb::new(0x12, 0x34, 0x56));
            assert_eq!(c.to_packed(), 0x12_34_56);
            // High byte is discarded
            assert_eq!(Rgb::from_packed(0xff_80_80_80), Rgb::gray(128));
        }

        #[test]
        fn test_default_is_mid_gray() {
            assert_eq!(Rgb::default().to_packed(), 0x80_80_80);
            assert_eq!(Rgb::default().luma(), 128);
        }
    }
}

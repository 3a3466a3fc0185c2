//! Operation dispatch
//!
//! Maps an [`Operation`] id to one transform and pulls that transform's
//! numeric parameters out of the operation, falling back to
//! [`ParamDefaults`] for anything missing or non-numeric.
//!
//! Ids with no real transform behind them (the restoration placeholders
//! and anything unrecognized) run [`Grid::invert`] so the caller always
//! gets a visible result.

use log::debug;
use pixlab_color::{convert_to_gray, threshold};
use pixlab_core::color::Rgb;
use pixlab_core::{Grid, PaddingMode, RgbaImage};
use pixlab_filter::{adjust_contrast, equalize_histogram, gaussian_blur, sharpen, sobel_edge};

use crate::error::{PixlabError, PixlabResult};
use crate::params::{Operation, ParamDefaults, keys};

/// Largest cutoff accepted for `threshold`; it makes every sample black.
const MAX_THRESHOLD: f64 = 256.0;

/// Mask selecting the `0xRRGGBB` bits of a packed color.
const PACKED_RGB_MASK: i64 = 0xFF_FFFF;

/// The transform an operation id resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Contrast,
    Histogram,
    NoiseRemoval,
    Sharpening,
    EdgeDetection,
    Thresholding,
    ColorSpace,
    ZeroPadding,
    ReplicatePadding,
    ReflectPadding,
    SymmetricPadding,
    WrapPadding,
    CustomPadding,
    /// Listed in the catalog but not implemented; runs invert
    Placeholder(&'static str),
    /// Unrecognized id; runs invert
    Fallback,
}

impl OperationKind {
    /// Resolve an operation id.
    pub fn from_id(id: &str) -> Self {
        match id {
            "contrast" => OperationKind::Contrast,
            "histogram" => OperationKind::Histogram,
            "noise-removal" => OperationKind::NoiseRemoval,
            "sharpening" => OperationKind::Sharpening,
            "edge-detection" => OperationKind::EdgeDetection,
            "thresholding" => OperationKind::Thresholding,
            "color-space" => OperationKind::ColorSpace,
            "zero-padding" => OperationKind::ZeroPadding,
            "replicate-padding" => OperationKind::ReplicatePadding,
            "reflect-padding" => OperationKind::ReflectPadding,
            "symmetric-padding" => OperationKind::SymmetricPadding,
            "wrap-padding" => OperationKind::WrapPadding,
            "custom-padding" => OperationKind::CustomPadding,
            "deblurring" => OperationKind::Placeholder("deblurring"),
            "denoising" => OperationKind::Placeholder("denoising"),
            "inpainting" => OperationKind::Placeholder("inpainting"),
            _ => OperationKind::Fallback,
        }
    }

    /// The canonical id, or `None` for [`OperationKind::Fallback`].
    pub fn id(&self) -> Option<&'static str> {
        let id = match self {
            OperationKind::Contrast => "contrast",
            OperationKind::Histogram => "histogram",
            OperationKind::NoiseRemoval => "noise-removal",
            OperationKind::Sharpening => "sharpening",
            OperationKind::EdgeDetection => "edge-detection",
            OperationKind::Thresholding => "thresholding",
            OperationKind::ColorSpace => "color-space",
            OperationKind::ZeroPadding => "zero-padding",
            OperationKind::ReplicatePadding => "replicate-padding",
            OperationKind::ReflectPadding => "reflect-padding",
            OperationKind::SymmetricPadding => "symmetric-padding",
            OperationKind::WrapPadding => "wrap-padding",
            OperationKind::CustomPadding => "custom-padding",
            OperationKind::Placeholder(id) => *id,
            OperationKind::Fallback => return None,
        };
        Some(id)
    }

    /// Whether the id maps to its own transform rather than to invert.
    pub fn is_implemented(&self) -> bool {
        !matches!(
            self,
            OperationKind::Placeholder(_) | OperationKind::Fallback
        )
    }

    /// Whether the transform changes the grid dimensions.
    pub fn is_padding(&self) -> bool {
        matches!(
            self,
            OperationKind::ZeroPadding
                | OperationKind::ReplicatePadding
                | OperationKind::ReflectPadding
                | OperationKind::SymmetricPadding
                | OperationKind::WrapPadding
                | OperationKind::CustomPadding
        )
    }
}

/// Runs operations against grids with a fixed set of parameter defaults.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    defaults: ParamDefaults,
}

impl Dispatcher {
    /// Create a dispatcher with custom defaults.
    pub fn new(defaults: ParamDefaults) -> Self {
        Dispatcher { defaults }
    }

    /// The defaults this dispatcher falls back to.
    pub fn defaults(&self) -> &ParamDefaults {
        &self.defaults
    }

    /// Run `op` on `grid`, returning a new grid.
    ///
    /// # Errors
    ///
    /// Returns [`PixlabError::InvalidParameter`] for a negative or
    /// non-finite `paddingSize` or `radius`, and propagates errors from the
    /// transforms themselves (for example a padded size that overflows).
    pub fn apply(&self, grid: &Grid, op: &Operation) -> PixlabResult<Grid> {
        let kind = OperationKind::from_id(&op.id);
        debug!(
            "dispatch {:?} -> {:?} on {}x{}",
            op.id,
            kind,
            grid.width(),
            grid.height()
        );

        let out = match kind {
            OperationKind::Contrast => adjust_contrast(grid, self.factor(op)),
            OperationKind::Histogram => equalize_histogram(grid),
            OperationKind::NoiseRemoval => gaussian_blur(grid, self.radius(op)?)?,
            OperationKind::Sharpening => sharpen(grid),
            OperationKind::EdgeDetection => sobel_edge(grid),
            OperationKind::Thresholding => threshold(grid, self.threshold(op))?,
            OperationKind::ColorSpace => convert_to_gray(grid),
            OperationKind::ZeroPadding => self.pad(grid, op, PaddingMode::Zero)?,
            OperationKind::ReplicatePadding => self.pad(grid, op, PaddingMode::Replicate)?,
            OperationKind::ReflectPadding => self.pad(grid, op, PaddingMode::Reflect)?,
            OperationKind::SymmetricPadding => self.pad(grid, op, PaddingMode::Symmetric)?,
            OperationKind::WrapPadding => self.pad(grid, op, PaddingMode::Wrap)?,
            OperationKind::CustomPadding => {
                let color = self.custom_color(op);
                self.pad(grid, op, PaddingMode::Constant(color))?
            }
            OperationKind::Placeholder(id) => {
                debug!("{} is not implemented, inverting", id);
                grid.invert()
            }
            OperationKind::Fallback => {
                debug!("unknown operation {:?}, inverting", op.id);
                grid.invert()
            }
        };
        Ok(out)
    }

    /// Run `op` on an RGBA image.
    ///
    /// The image is reduced to luma, transformed, and expanded back to
    /// opaque gray RGBA.
    pub fn apply_rgba(&self, img: &RgbaImage, op: &Operation) -> PixlabResult<RgbaImage> {
        let grid = Grid::from_rgba(img);
        Ok(self.apply(&grid, op)?.to_rgba())
    }

    fn pad(&self, grid: &Grid, op: &Operation, mode: PaddingMode) -> PixlabResult<Grid> {
        let npix = self.count(op, keys::PADDING_SIZE, self.defaults.padding_size)?;
        Ok(grid.add_border(npix, mode)?)
    }

    /// Numeric parameter, or the default when absent or not a number.
    fn number(&self, op: &Operation, name: &'static str, default: f64) -> f64 {
        match op.number(name) {
            Some(v) => v,
            None => {
                if op.parameters.contains_key(name) {
                    debug!("parameter {} is not numeric, using {}", name, default);
                }
                default
            }
        }
    }

    /// Non-negative integer parameter; fractions are truncated.
    fn count(&self, op: &Operation, name: &'static str, default: u32) -> PixlabResult<u32> {
        let value = self.number(op, name, default as f64);
        let truncated = value.trunc();
        if !truncated.is_finite() || truncated < 0.0 || truncated > u32::MAX as f64 {
            return Err(PixlabError::InvalidParameter { name, value });
        }
        Ok(truncated as u32)
    }

    fn factor(&self, op: &Operation) -> f64 {
        self.number(op, keys::FACTOR, self.defaults.factor)
    }

    fn radius(&self, op: &Operation) -> PixlabResult<u32> {
        self.count(op, keys::RADIUS, self.defaults.radius)
    }

    fn threshold(&self, op: &Operation) -> f64 {
        self.number(op, keys::THRESHOLD, self.defaults.threshold)
            .clamp(0.0, MAX_THRESHOLD)
    }

    fn custom_color(&self, op: &Operation) -> Rgb {
        let packed = match op.number(keys::CUSTOM_VALUE) {
            Some(v) if v.is_finite() => (v.trunc() as i64 & PACKED_RGB_MASK) as u32,
            _ => self.defaults.custom_value,
        };
        Rgb::from_packed(packed)
    }
}

/// Run `op` on `grid` with the default parameters.
///
/// ```
/// use pixlab::{Grid, Operation, apply};
///
/// let grid = Grid::from_rows(&[[5u8, 6], [7, 8]]).unwrap();
/// let op = Operation::new("zero-padding").with_param("paddingSize", 1.0);
/// let out = apply(&grid, &op).unwrap();
/// assert_eq!((out.width(), out.height()), (4, 4));
/// assert_eq!(out.get_pixel(1, 1), 5);
/// ```
pub fn apply(grid: &Grid, op: &Operation) -> PixlabResult<Grid> {
    Dispatcher::default().apply(grid, op)
}

/// Run `op` on an RGBA image with the default parameters.
pub fn apply_rgba(img: &RgbaImage, op: &Operation) -> PixlabResult<RgbaImage> {
    Dispatcher::default().apply_rgba(img, op)
}

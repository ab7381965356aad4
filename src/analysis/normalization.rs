//! Selection and dispatch of color normalization strategies

use crate::analysis::histogram::histogram_normalize;
use crate::analysis::luminance::normalize_luminance;
use crate::analysis::palette::palette_normalize;
use crate::io::configuration::DEFAULT_PALETTE_SIZE;
use crate::io::error::Result;
use crate::spatial::PixelImage;
use clap::ValueEnum;
use std::fmt;

/// Preprocessing applied to both images before tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum NormalizationMethod {
    /// Images are matched as given
    #[default]
    None,
    /// Each image is histogram-matched to the other
    Histogram,
    /// Both images are quantized onto a shared palette
    Palette,
    /// Both images are scaled toward a shared average luminance
    Luminance,
}

impl NormalizationMethod {
    /// Lowercase name of the method
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Histogram => "histogram",
            Self::Palette => "palette",
            Self::Luminance => "luminance",
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalization method with its tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// Strategy to apply
    pub method: NormalizationMethod,
    /// Palette size for palette quantization, `DEFAULT_PALETTE_SIZE` when absent
    pub palette_size: Option<usize>,
}

impl NormalizationOptions {
    /// Options for `method` with default parameters
    pub const fn new(method: NormalizationMethod) -> Self {
        Self {
            method,
            palette_size: None,
        }
    }

    /// Palette quantization with an explicit palette size
    pub const fn palette(palette_size: usize) -> Self {
        Self {
            method: NormalizationMethod::Palette,
            palette_size: Some(palette_size),
        }
    }

    /// Effective palette size
    pub fn palette_size(&self) -> usize {
        self.palette_size.unwrap_or(DEFAULT_PALETTE_SIZE)
    }
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self::new(NormalizationMethod::None)
    }
}

impl From<NormalizationMethod> for NormalizationOptions {
    fn from(method: NormalizationMethod) -> Self {
        Self::new(method)
    }
}

/// Apply a normalization strategy to both images
///
/// The inputs are never modified; new images are returned.
///
/// # Errors
///
/// Returns `InvalidParameter` if palette quantization is requested with a
/// palette size of zero
pub fn normalize_pair(
    image_a: &PixelImage,
    image_b: &PixelImage,
    options: &NormalizationOptions,
) -> Result<(PixelImage, PixelImage)> {
    match options.method {
        NormalizationMethod::None => Ok((image_a.clone(), image_b.clone())),
        NormalizationMethod::Histogram => Ok(histogram_normalize(image_a, image_b)),
        NormalizationMethod::Palette => palette_normalize(image_a, image_b, options.palette_size()),
        NormalizationMethod::Luminance => Ok(normalize_luminance(image_a, image_b)),
    }
}

//! Histogram matching between source images
//!
//! Each channel of the source image is remapped so its cumulative distribution
//! follows the target's. The remap is a nearest-CDF lookup rather than an
//! interpolation, which keeps every output value an integer intensity that
//! the target actually uses.

use crate::color::Rgb;
use crate::io::configuration::HISTOGRAM_BINS;
use crate::spatial::PixelImage;

/// Per-channel intensity counts for an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistogram {
    /// Red channel counts indexed by intensity
    pub red: [usize; HISTOGRAM_BINS],
    /// Green channel counts indexed by intensity
    pub green: [usize; HISTOGRAM_BINS],
    /// Blue channel counts indexed by intensity
    pub blue: [usize; HISTOGRAM_BINS],
    /// Number of pixels counted
    pub total: usize,
}

/// Lookup table from source intensity to matched intensity for each channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMapping {
    /// Red channel lookup
    pub red: [u8; HISTOGRAM_BINS],
    /// Green channel lookup
    pub green: [u8; HISTOGRAM_BINS],
    /// Blue channel lookup
    pub blue: [u8; HISTOGRAM_BINS],
}

impl ChannelMapping {
    /// Remap one color through the lookup tables
    pub fn apply(&self, color: Rgb) -> Rgb {
        let lookup = |table: &[u8; HISTOGRAM_BINS], value: u8| {
            table.get(usize::from(value)).copied().unwrap_or(value)
        };
        Rgb::new(
            lookup(&self.red, color.r),
            lookup(&self.green, color.g),
            lookup(&self.blue, color.b),
        )
    }
}

impl ColorHistogram {
    /// Count channel intensities over every pixel of an image
    pub fn from_image(image: &PixelImage) -> Self {
        let mut histogram = Self {
            red: [0; HISTOGRAM_BINS],
            green: [0; HISTOGRAM_BINS],
            blue: [0; HISTOGRAM_BINS],
            total: 0,
        };

        for color in image.pixels() {
            if let Some(count) = histogram.red.get_mut(usize::from(color.r)) {
                *count += 1;
            }
            if let Some(count) = histogram.green.get_mut(usize::from(color.g)) {
                *count += 1;
            }
            if let Some(count) = histogram.blue.get_mut(usize::from(color.b)) {
                *count += 1;
            }
            histogram.total += 1;
        }

        histogram
    }

    /// Cumulative distributions for the red, green and blue channels
    pub fn cdfs(&self) -> [[f64; HISTOGRAM_BINS]; 3] {
        [
            cumulative_distribution(&self.red, self.total),
            cumulative_distribution(&self.green, self.total),
            cumulative_distribution(&self.blue, self.total),
        ]
    }

    /// Lookup tables remapping this histogram's intensities onto `target`'s
    pub fn mapping_to(&self, target: &Self) -> ChannelMapping {
        let [src_r, src_g, src_b] = self.cdfs();
        let [tgt_r, tgt_g, tgt_b] = target.cdfs();
        ChannelMapping {
            red: build_channel_mapping(&src_r, &tgt_r),
            green: build_channel_mapping(&src_g, &tgt_g),
            blue: build_channel_mapping(&src_b, &tgt_b),
        }
    }
}

/// Normalized running sum of bin counts
///
/// An empty histogram yields an all-zero distribution.
pub fn cumulative_distribution(
    counts: &[usize; HISTOGRAM_BINS],
    total: usize,
) -> [f64; HISTOGRAM_BINS] {
    let mut cdf = [0.0; HISTOGRAM_BINS];
    if total == 0 {
        return cdf;
    }

    let mut running = 0usize;
    for (slot, &count) in cdf.iter_mut().zip(counts.iter()) {
        running += count;
        *slot = running as f64 / total as f64;
    }
    cdf
}

/// For each source intensity, the target intensity with the closest CDF value
///
/// Target intensities are scanned in ascending order and the first minimal
/// distance wins.
pub fn build_channel_mapping(
    source_cdf: &[f64; HISTOGRAM_BINS],
    target_cdf: &[f64; HISTOGRAM_BINS],
) -> [u8; HISTOGRAM_BINS] {
    let mut mapping = [0u8; HISTOGRAM_BINS];

    for (slot, &source_value) in mapping.iter_mut().zip(source_cdf.iter()) {
        let mut best_index = 0usize;
        let mut best_distance = f64::INFINITY;
        for (index, &target_value) in target_cdf.iter().enumerate() {
            let distance = (source_value - target_value).abs();
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }
        *slot = best_index as u8;
    }

    mapping
}

/// Remap `source` so its channel distributions follow `target`'s
pub fn match_histogram(source: &PixelImage, target: &PixelImage) -> PixelImage {
    let mapping =
        ColorHistogram::from_image(source).mapping_to(&ColorHistogram::from_image(target));
    source.map_pixels(|&color| mapping.apply(color))
}

/// Match each image to the other's histogram
///
/// Both remaps are computed from the original histograms. Returns
/// `(a matched to b, b matched to a)`.
pub fn histogram_normalize(image_a: &PixelImage, image_b: &PixelImage) -> (PixelImage, PixelImage) {
    let histogram_a = ColorHistogram::from_image(image_a);
    let histogram_b = ColorHistogram::from_image(image_b);

    let a_to_b = histogram_a.mapping_to(&histogram_b);
    let b_to_a = histogram_b.mapping_to(&histogram_a);

    (
        image_a.map_pixels(|&color| a_to_b.apply(color)),
        image_b.map_pixels(|&color| b_to_a.apply(color)),
    )
}

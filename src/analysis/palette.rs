//! Palette extraction and remapping via deterministic k-means clustering
//!
//! Centroids start at the most frequent colors (ties keep first-seen order)
//! rather than random picks, so the same input always yields the same palette.
//! Clustering runs over distinct colors weighted by their pixel counts, which
//! is equivalent to clustering every pixel.

use crate::color::Rgb;
use crate::io::configuration::KMEANS_ITERATIONS;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::PixelImage;
use std::collections::HashMap;

/// An ordered set of representative colors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from explicit colors
    pub const fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Palette colors in order
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette color closest to `color` by squared RGB distance
    ///
    /// The first color wins exact ties. Returns `None` for an empty palette.
    pub fn nearest(&self, color: Rgb) -> Option<Rgb> {
        let mut best: Option<(Rgb, u32)> = None;
        for &candidate in &self.colors {
            let distance = candidate.distance_squared(color);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((candidate, distance)),
            }
        }
        best.map(|(candidate, _)| candidate)
    }
}

/// Distinct colors with their occurrence counts, in first-seen order
pub fn count_colors<'a, I>(colors: I) -> Vec<(Rgb, usize)>
where
    I: IntoIterator<Item = &'a Rgb>,
{
    let mut index_of: HashMap<Rgb, usize> = HashMap::new();
    let mut counts: Vec<(Rgb, usize)> = Vec::new();

    for &color in colors {
        if let Some(&index) = index_of.get(&color) {
            if let Some((_, count)) = counts.get_mut(index) {
                *count += 1;
            }
        } else {
            index_of.insert(color, counts.len());
            counts.push((color, 1));
        }
    }

    counts
}

/// Reduce a collection of colors to at most `palette_size` representatives
///
/// When there are no more distinct colors than `palette_size`, the distinct
/// colors themselves are the palette and no clustering happens.
///
/// # Errors
///
/// Returns `InvalidParameter` if `palette_size` is zero
pub fn cluster_colors<'a, I>(colors: I, palette_size: usize) -> Result<Palette>
where
    I: IntoIterator<Item = &'a Rgb>,
{
    if palette_size == 0 {
        return Err(invalid_parameter(
            "palette_size",
            &palette_size,
            &"must be at least 1",
        ));
    }

    let weighted = count_colors(colors);
    if weighted.len() <= palette_size {
        return Ok(Palette::new(weighted.into_iter().map(|(c, _)| c).collect()));
    }

    Ok(Palette::new(weighted_kmeans(&weighted, palette_size)))
}

/// Extract a representative palette from an image
///
/// # Errors
///
/// Returns `InvalidParameter` if `palette_size` is zero
pub fn extract_palette(image: &PixelImage, palette_size: usize) -> Result<Palette> {
    cluster_colors(image.pixels().iter(), palette_size)
}

/// Re-cluster two palettes together into one shared palette
///
/// # Errors
///
/// Returns `InvalidParameter` if `palette_size` is zero
pub fn build_shared_palette(
    palette_a: &Palette,
    palette_b: &Palette,
    palette_size: usize,
) -> Result<Palette> {
    cluster_colors(
        palette_a.colors().iter().chain(palette_b.colors()),
        palette_size,
    )
}

/// Replace every pixel with its nearest palette color
///
/// # Errors
///
/// Returns `InvalidParameter` if the palette is empty
pub fn remap_to_palette(image: &PixelImage, palette: &Palette) -> Result<PixelImage> {
    if palette.is_empty() {
        return Err(invalid_parameter(
            "palette",
            &"[]",
            &"cannot remap onto an empty palette",
        ));
    }
    Ok(image.map_pixels(|&color| palette.nearest(color).unwrap_or(color)))
}

/// Quantize both images onto a palette shared between them
///
/// # Errors
///
/// Returns `InvalidParameter` if `palette_size` is zero
pub fn palette_normalize(
    image_a: &PixelImage,
    image_b: &PixelImage,
    palette_size: usize,
) -> Result<(PixelImage, PixelImage)> {
    let palette_a = extract_palette(image_a, palette_size)?;
    let palette_b = extract_palette(image_b, palette_size)?;
    let shared = build_shared_palette(&palette_a, &palette_b, palette_size)?;

    Ok((
        remap_to_palette(image_a, &shared)?,
        remap_to_palette(image_b, &shared)?,
    ))
}

fn weighted_kmeans(points: &[(Rgb, usize)], k: usize) -> Vec<Rgb> {
    // Stable sort keeps first-seen order among equally frequent colors
    let mut by_frequency: Vec<&(Rgb, usize)> = points.iter().collect();
    by_frequency.sort_by(|a, b| b.1.cmp(&a.1));

    let seeds: Vec<[f64; 3]> = by_frequency
        .iter()
        .take(k)
        .map(|(color, _)| color.to_f64())
        .collect();

    refine_centroids(points, seeds)
        .into_iter()
        .map(|[r, g, b]| Rgb::from_clamped(r, g, b))
        .collect()
}

/// Lloyd iterations from the given seeds, stopping early once nothing moves
fn refine_centroids(points: &[(Rgb, usize)], mut centroids: Vec<[f64; 3]>) -> Vec<[f64; 3]> {
    for _ in 0..KMEANS_ITERATIONS {
        let mut sums = vec![[0.0f64; 3]; centroids.len()];
        let mut weights = vec![0usize; centroids.len()];

        for &(color, count) in points {
            let Some(cluster) = nearest_centroid(&centroids, color.to_f64()) else {
                continue;
            };
            let [r, g, b] = color.to_f64();
            let w = count as f64;
            if let Some(sum) = sums.get_mut(cluster) {
                sum[0] += r * w;
                sum[1] += g * w;
                sum[2] += b * w;
            }
            if let Some(weight) = weights.get_mut(cluster) {
                *weight += count;
            }
        }

        let mut moved = false;
        for ((centroid, sum), &weight) in centroids.iter_mut().zip(&sums).zip(&weights) {
            // Empty clusters keep their previous centroid
            if weight == 0 {
                continue;
            }
            let w = weight as f64;
            let updated = [sum[0] / w, sum[1] / w, sum[2] / w];
            if updated != *centroid {
                moved = true;
                *centroid = updated;
            }
        }

        if !moved {
            break;
        }
    }

    centroids
}

fn nearest_centroid(centroids: &[[f64; 3]], point: [f64; 3]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = (centroid[0] - point[0]).powi(2)
            + (centroid[1] - point[1]).powi(2)
            + (centroid[2] - point[2]).powi(2);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

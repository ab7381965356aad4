//! Tile-to-tile visual similarity scoring

use crate::io::configuration::SIMILARITY_NORMALIZER;
use crate::spatial::Tile;
use ndarray::{Array2, Zip};

/// Pairwise similarity of image A tiles (rows) against image B tiles (columns)
pub type SimilarityMatrix = Array2<f64>;

/// Similarity of two tiles in `[0, 1]`
///
/// One minus the mean per-pixel RGB Euclidean distance divided by
/// `SIMILARITY_NORMALIZER`. Identical tiles score exactly 1.0. Tiles of
/// different dimensions can't be compared and score 0.0.
pub fn tile_similarity(tile_a: &Tile, tile_b: &Tile) -> f64 {
    if tile_a.dim() != tile_b.dim() {
        return 0.0;
    }
    if tile_a.is_empty() {
        return 1.0;
    }

    let total_distance = Zip::from(tile_a)
        .and(tile_b)
        .fold(0.0, |acc, &a, &b| acc + a.distance(b));
    let mean_distance = total_distance / tile_a.len() as f64;

    (1.0 - mean_distance / SIMILARITY_NORMALIZER).clamp(0.0, 1.0)
}

/// Score every tile of A against every tile of B
///
/// Entry `(i, j)` is the similarity of `tiles_a[i]` and `tiles_b[j]`.
pub fn build_similarity_matrix(tiles_a: &[Tile], tiles_b: &[Tile]) -> SimilarityMatrix {
    Array2::from_shape_fn((tiles_a.len(), tiles_b.len()), |(i, j)| {
        match (tiles_a.get(i), tiles_b.get(j)) {
            (Some(a), Some(b)) => tile_similarity(a, b),
            _ => 0.0,
        }
    })
}

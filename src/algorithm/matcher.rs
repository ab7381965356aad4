//! Image pair matching: extraction, scoring, assignment and blending
//!
//! The matcher cuts both images into the same number of tiles, scores every
//! pairing, asks its solver for a bijection, and merges each matched pair into
//! one physical tile. Tile `i` always depicts cell `i` of image A, so the A
//! solution is the identity ordering and the B solution is the inverse of the
//! assignment.

use crate::algorithm::assignment::{
    AssignmentSolver, GreedyAssignment, inverse_permutation, total_similarity,
    validate_permutation,
};
use crate::algorithm::blend::combine_matched_tile;
use crate::analysis::normalization::{NormalizationMethod, NormalizationOptions, normalize_pair};
use crate::analysis::similarity::{SimilarityMatrix, build_similarity_matrix};
use crate::io::configuration::{
    ANALYSIS_GRID_SIZE, BLEND_THRESHOLD, DEFAULT_BLEND_WEIGHT, DEFAULT_GRID_SIZE, MAX_GRID_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::extract_tiles;
use crate::spatial::{PixelImage, Tile};

/// Parameters controlling how an image pair is matched
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatcherConfig {
    /// Tiles per side of the square puzzle grid
    pub grid_size: usize,
    /// Pairs scoring above this keep the image A tile unblended
    pub blend_threshold: f64,
    /// Weight of the image A tile when blending
    pub blend_weight: f64,
}

impl MatcherConfig {
    /// Configuration for `grid_size` with default blending parameters
    pub const fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            blend_threshold: BLEND_THRESHOLD,
            blend_weight: DEFAULT_BLEND_WEIGHT,
        }
    }

    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid size is zero or above
    /// `MAX_GRID_SIZE`, or the blend weight is outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size > MAX_GRID_SIZE {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("must be within 1..={MAX_GRID_SIZE}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.blend_weight) {
            return Err(invalid_parameter(
                "blend_weight",
                &self.blend_weight,
                &"must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Number of tiles in the puzzle
    pub const fn tile_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// Outcome of matching an image pair, with diagnostics
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Tiles per side
    pub grid_size: usize,
    /// Tiles cut from image A in row-major order
    pub tiles_a: Vec<Tile>,
    /// Tiles cut from image B in row-major order
    pub tiles_b: Vec<Tile>,
    /// Physical tile content, one per image A tile
    pub tiles: Vec<Tile>,
    /// Pairwise similarity of A tiles (rows) against B tiles (columns)
    pub similarity_matrix: SimilarityMatrix,
    /// `assignment[i] = j` pairs A tile `i` with B tile `j`
    pub assignment: Vec<usize>,
    /// Similarity of each committed pair, indexed by A tile
    pub pair_similarities: Vec<f64>,
    /// Tile index placed at each position to depict image A
    pub solution_a: Vec<usize>,
    /// Tile index placed at each position to depict image B
    pub solution_b: Vec<usize>,
    /// Mean similarity over all committed pairs, in `[0, 1]`
    pub total_similarity: f64,
}

impl MatchResult {
    /// Number of tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of pairs whose tiles were blended rather than copied from A
    pub fn blended_count(&self, threshold: f64) -> usize {
        self.pair_similarities
            .iter()
            .filter(|&&score| score <= threshold)
            .count()
    }
}

/// Similarity reached under each normalization strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityReport {
    /// Mean similarity without normalization
    pub raw_similarity: f64,
    /// Mean similarity after histogram matching
    pub histogram_similarity: f64,
    /// Mean similarity after palette quantization
    pub palette_similarity: f64,
    /// Best-scoring strategy; earlier checks win ties (none, histogram, palette)
    pub recommended_method: NormalizationMethod,
}

/// Orchestrates tile extraction, scoring, assignment and blending
#[derive(Debug, Clone)]
pub struct ImageMatcher<S: AssignmentSolver = GreedyAssignment> {
    config: MatcherConfig,
    solver: S,
}

impl ImageMatcher<GreedyAssignment> {
    /// Matcher using the greedy solver
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is invalid
    pub fn new(config: MatcherConfig) -> Result<Self> {
        Self::with_solver(config, GreedyAssignment::new())
    }
}

impl<S: AssignmentSolver> ImageMatcher<S> {
    /// Matcher using a custom assignment solver
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is invalid
    pub fn with_solver(config: MatcherConfig, solver: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, solver })
    }

    /// Active configuration
    pub const fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Match two images as given
    ///
    /// # Errors
    ///
    /// Returns an error if either image is smaller than the grid, or the solver
    /// fails or returns something other than a permutation
    pub fn match_images(&self, image_a: &PixelImage, image_b: &PixelImage) -> Result<MatchResult> {
        let grid_size = self.config.grid_size;
        let tiles_a = extract_tiles(image_a, grid_size)?;
        let tiles_b = extract_tiles(image_b, grid_size)?;

        let similarity_matrix = build_similarity_matrix(&tiles_a, &tiles_b);
        let assignment = self.solver.solve(&similarity_matrix)?;
        validate_permutation(&assignment)?;
        if assignment.len() != tiles_a.len() {
            return Err(invalid_parameter(
                "assignment",
                &assignment.len(),
                &format!("solver must pair all {} tiles", tiles_a.len()),
            ));
        }

        let pair_similarities: Vec<f64> = assignment
            .iter()
            .enumerate()
            .map(|(i, &j)| similarity_matrix.get((i, j)).copied().unwrap_or(0.0))
            .collect();

        let tiles = tiles_a
            .iter()
            .zip(&assignment)
            .zip(&pair_similarities)
            .map(|((tile_a, &j), &score)| match tiles_b.get(j) {
                Some(tile_b) => combine_matched_tile(
                    tile_a,
                    tile_b,
                    score,
                    self.config.blend_threshold,
                    self.config.blend_weight,
                ),
                None => Ok(tile_a.clone()),
            })
            .collect::<Result<Vec<Tile>>>()?;

        let solution_a: Vec<usize> = (0..tiles.len()).collect();
        let solution_b = inverse_permutation(&assignment)?;

        let tile_count = tiles.len().max(1) as f64;
        let mean_similarity = total_similarity(&similarity_matrix, &assignment) / tile_count;

        Ok(MatchResult {
            grid_size,
            tiles_a,
            tiles_b,
            tiles,
            similarity_matrix,
            assignment,
            pair_similarities,
            solution_a,
            solution_b,
            total_similarity: mean_similarity,
        })
    }

    /// Normalize both images with `options`, then match them
    ///
    /// # Errors
    ///
    /// Returns an error if normalization or matching fails
    pub fn match_with_normalization(
        &self,
        image_a: &PixelImage,
        image_b: &PixelImage,
        options: &NormalizationOptions,
    ) -> Result<MatchResult> {
        let (normalized_a, normalized_b) = normalize_pair(image_a, image_b, options)?;
        self.match_images(&normalized_a, &normalized_b)
    }

    /// Compare raw, histogram and palette matching and recommend the best
    ///
    /// Palette matching quantizes to `palette_size` colors, or
    /// `DEFAULT_PALETTE_SIZE` when absent. Luminance balancing is not part of
    /// the comparison.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three matching runs fails
    pub fn analyze_quality(
        &self,
        image_a: &PixelImage,
        image_b: &PixelImage,
        palette_size: Option<usize>,
    ) -> Result<QualityReport> {
        let raw_similarity = self.match_images(image_a, image_b)?.total_similarity;
        let histogram_similarity = self
            .match_with_normalization(
                image_a,
                image_b,
                &NormalizationOptions::new(NormalizationMethod::Histogram),
            )?
            .total_similarity;
        let palette_similarity = self
            .match_with_normalization(
                image_a,
                image_b,
                &NormalizationOptions {
                    method: NormalizationMethod::Palette,
                    palette_size,
                },
            )?
            .total_similarity;

        let mut recommended_method = NormalizationMethod::None;
        let mut best = raw_similarity;
        for (method, score) in [
            (NormalizationMethod::Histogram, histogram_similarity),
            (NormalizationMethod::Palette, palette_similarity),
        ] {
            if score > best {
                best = score;
                recommended_method = method;
            }
        }

        Ok(QualityReport {
            raw_similarity,
            histogram_similarity,
            palette_similarity,
            recommended_method,
        })
    }
}

/// Match two images on a `grid_size × grid_size` grid with the greedy solver
///
/// # Errors
///
/// Returns an error if the grid size is invalid for either image
pub fn match_images(
    image_a: &PixelImage,
    image_b: &PixelImage,
    grid_size: usize,
) -> Result<MatchResult> {
    ImageMatcher::new(MatcherConfig::new(grid_size))?.match_images(image_a, image_b)
}

/// Normalize, then match two images with the greedy solver
///
/// # Errors
///
/// Returns an error if normalization fails or the grid size is invalid
pub fn match_images_with_normalization(
    image_a: &PixelImage,
    image_b: &PixelImage,
    grid_size: usize,
    options: &NormalizationOptions,
) -> Result<MatchResult> {
    ImageMatcher::new(MatcherConfig::new(grid_size))?
        .match_with_normalization(image_a, image_b, options)
}

/// Compare normalization strategies on an `ANALYSIS_GRID_SIZE` grid
///
/// # Errors
///
/// Returns an error if either image is smaller than the analysis grid
pub fn analyze_match_quality(image_a: &PixelImage, image_b: &PixelImage) -> Result<QualityReport> {
    ImageMatcher::new(MatcherConfig::new(ANALYSIS_GRID_SIZE))?
        .analyze_quality(image_a, image_b, None)
}

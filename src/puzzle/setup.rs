//! Puzzle generation entry points for application startup

use crate::algorithm::matcher::{ImageMatcher, MatcherConfig};
use crate::analysis::normalization::NormalizationOptions;
use crate::io::error::{PuzzleError, Result};
use crate::puzzle::definition::{PuzzleDefinition, create_puzzle_from_match};
use crate::spatial::PixelImage;

/// Everything needed to build one puzzle besides the images
#[derive(Debug, Clone)]
pub struct PuzzleRequest {
    /// Puzzle identifier
    pub id: String,
    /// Label of image A
    pub label_a: String,
    /// Label of image B
    pub label_b: String,
    /// Matching parameters
    pub config: MatcherConfig,
    /// Preprocessing applied before matching
    pub normalization: NormalizationOptions,
}

impl PuzzleRequest {
    /// A request with default matching and no normalization
    pub fn new(id: &str, label_a: &str, label_b: &str) -> Self {
        Self {
            id: id.to_string(),
            label_a: label_a.to_string(),
            label_b: label_b.to_string(),
            config: MatcherConfig::default(),
            normalization: NormalizationOptions::default(),
        }
    }

    /// Replace the grid size
    #[must_use]
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.config.grid_size = grid_size;
        self
    }

    /// Replace the normalization options
    #[must_use]
    pub fn with_normalization(mut self, normalization: NormalizationOptions) -> Self {
        self.normalization = normalization;
        self
    }
}

/// Result of puzzle initialization
///
/// Generation failures still carry a usable (empty) puzzle alongside the error
/// that caused them.
#[derive(Debug)]
pub enum PuzzleOutcome {
    /// Generation succeeded
    Generated(PuzzleDefinition),
    /// Generation failed and the empty puzzle stands in
    Fallback {
        /// Empty puzzle with the requested id and labels
        puzzle: PuzzleDefinition,
        /// Why generation failed
        error: PuzzleError,
    },
}

impl PuzzleOutcome {
    /// The puzzle to present, generated or fallback
    pub const fn puzzle(&self) -> &PuzzleDefinition {
        match self {
            Self::Generated(puzzle) | Self::Fallback { puzzle, .. } => puzzle,
        }
    }

    /// Consume the outcome and keep the puzzle
    pub fn into_puzzle(self) -> PuzzleDefinition {
        match self {
            Self::Generated(puzzle) | Self::Fallback { puzzle, .. } => puzzle,
        }
    }

    /// The generation error, if the fallback was used
    pub const fn error(&self) -> Option<&PuzzleError> {
        match self {
            Self::Generated(_) => None,
            Self::Fallback { error, .. } => Some(error),
        }
    }

    /// Whether the fallback puzzle was used
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Normalize, match and package an image pair as a validated puzzle
///
/// # Errors
///
/// Returns an error if any pipeline stage fails or the finished puzzle breaks
/// its invariants
pub fn generate_puzzle(
    request: &PuzzleRequest,
    image_a: &PixelImage,
    image_b: &PixelImage,
) -> Result<PuzzleDefinition> {
    let matcher = ImageMatcher::new(request.config)?;
    let result = matcher.match_with_normalization(image_a, image_b, &request.normalization)?;
    let puzzle = create_puzzle_from_match(&result, &request.label_a, &request.label_b, &request.id);
    puzzle.validate()?;
    Ok(puzzle)
}

/// Generate a puzzle, substituting the empty puzzle on failure
pub fn initialize_puzzle(
    request: &PuzzleRequest,
    image_a: &PixelImage,
    image_b: &PixelImage,
) -> PuzzleOutcome {
    match generate_puzzle(request, image_a, image_b) {
        Ok(puzzle) => PuzzleOutcome::Generated(puzzle),
        Err(error) => PuzzleOutcome::Fallback {
            puzzle: PuzzleDefinition::empty(&request.id, &request.label_a, &request.label_b),
            error,
        },
    }
}

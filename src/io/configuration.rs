//! Algorithm constants and runtime configuration defaults

// Similarity scoring
/// Divisor turning mean RGB Euclidean distance into a `[0, 1]` fraction
///
/// Approximates `sqrt(255² · 3)`, the largest distance between two 8-bit colors
pub const SIMILARITY_NORMALIZER: f64 = 441.67;

// Tile blending
/// Matched pairs scoring above this keep the image A tile verbatim
pub const BLEND_THRESHOLD: f64 = 0.95;
/// Weight of the image A tile when a matched pair is blended
pub const DEFAULT_BLEND_WEIGHT: f64 = 0.5;

// Color normalization
/// Number of intensity bins per channel
pub const HISTOGRAM_BINS: usize = 256;
/// Number of refinement passes during palette clustering
pub const KMEANS_ITERATIONS: usize = 10;
/// Number of representative colors per palette
pub const DEFAULT_PALETTE_SIZE: usize = 8;
/// Luminance weight of the red channel
pub const LUMINANCE_RED: f64 = 0.299;
/// Luminance weight of the green channel
pub const LUMINANCE_GREEN: f64 = 0.587;
/// Luminance weight of the blue channel
pub const LUMINANCE_BLUE: f64 = 0.114;

// Grid sizing
/// Tiles per side when none is given
pub const DEFAULT_GRID_SIZE: usize = 3;
/// Tiles per side used when comparing normalization strategies
pub const ANALYSIS_GRID_SIZE: usize = 3;

// Similarity matrix construction grows with the fourth power of the grid size
/// Maximum allowed tiles per side
pub const MAX_GRID_SIZE: usize = 16;

// Arrangement
/// Fixed seed for reproducible shuffles
pub const DEFAULT_SEED: u64 = 42;
/// Reshuffle limit when a shuffle lands on a solved arrangement
pub const MAX_SHUFFLE_ATTEMPTS: usize = 32;

// Rendering and CLI defaults
/// Edge length in pixels of one rendered tile
pub const DEFAULT_TILE_RENDER_SIZE: u32 = 32;
/// Largest source tile edge in pixels before input images are downscaled
pub const DEFAULT_MAX_TILE_PIXELS: u32 = 16;
/// Suffix for the render of the image A arrangement
pub const SOLUTION_A_SUFFIX: &str = "_solution_a";
/// Suffix for the render of the image B arrangement
pub const SOLUTION_B_SUFFIX: &str = "_solution_b";
/// Suffix for the render of a shuffled arrangement
pub const SHUFFLED_SUFFIX: &str = "_shuffled";
/// Number of pipeline stages reported by the CLI
pub const PIPELINE_STAGES: u64 = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

//! Dual-solution tile puzzle generation from a pair of images
//!
//! Both images are cut into the same square grid of tiles. Tiles of image A are
//! paired one-to-one with tiles of image B to maximize visual similarity, and
//! each pair becomes a single physical tile. Placed one way the tiles show
//! image A; placed another way they show image B.

#![deny(unsafe_code)]

/// Tile assignment, blending and image pair matching
pub mod algorithm;
/// Tile similarity scoring and color normalization
pub mod analysis;
/// RGB color representation and conversions
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Puzzle definitions and arrangement helpers
pub mod puzzle;
/// Pixel grids and tile extraction
pub mod spatial;

pub use io::error::{PuzzleError, Result};

//! Puzzle definitions and the helpers the game layer consumes

/// Arrangement comparison, swapping and shuffling
pub mod arrangement;
/// Tile content and puzzle definition types
pub mod definition;
/// Puzzle generation with explicit fallback
pub mod setup;

pub use definition::{PuzzleDefinition, PuzzleTile, SolutionSide, TileContent};
pub use setup::{PuzzleOutcome, PuzzleRequest};

//! Spatial data structures for source images and tiles
//!
//! This module contains spatial-related functionality including:
//! - Validated rectangular pixel grids
//! - Tile extraction and reassembly

/// Rectangular pixel grid construction and access
pub mod grid;
/// Tile extraction and reassembly utilities
pub mod tiles;

pub use grid::PixelImage;
pub use tiles::Tile;

//! Analysis modules for tile similarity and color normalization

/// Per-channel histogram matching
pub mod histogram;
/// Luminance balancing
pub mod luminance;
/// Normalization strategy selection
pub mod normalization;
/// Palette extraction and quantization
pub mod palette;
/// Tile similarity scoring and matrix construction
pub mod similarity;

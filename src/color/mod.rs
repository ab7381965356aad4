//! Color representation and conversion utilities

/// RGB colors, hex encoding and luminance
pub mod rgb;

pub use rgb::Rgb;

//! Error types for puzzle generation and image operations

use std::fmt;
use std::path::PathBuf;

/// Every failure the generator and its CLI can report
#[derive(Debug)]
pub enum PuzzleError {
    /// A source image couldn't be opened or decoded
    Decode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// A render couldn't be encoded or written
    Encode {
        /// Path where the render was written
        path: PathBuf,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// An output directory couldn't be created
    Directory {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Color string is not of the form `#RRGGBB`
    InvalidColor {
        /// The rejected color string
        value: String,
    },

    /// Pixel grid is empty or ragged
    InvalidImage {
        /// Description of what's wrong with the grid
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// An ordering that must be a bijection over `0..n` is not one
    InvalidPermutation {
        /// Description of the violation
        reason: String,
    },

    /// Arithmetic on sizes left the representable range
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "Cannot read image '{}': {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "Cannot write render '{}': {source}", path.display())
            }
            Self::Directory { path, source } => {
                write!(f, "Cannot create directory '{}': {source}", path.display())
            }
            Self::InvalidColor { value } => write!(f, "Invalid color '{value}': expected #RRGGBB"),
            Self::InvalidImage { reason } => write!(f, "Invalid image: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Invalid {parameter} '{value}': {reason}"),
            Self::InvalidPermutation { reason } => write!(f, "Not a permutation: {reason}"),
            Self::Computation { operation, reason } => write!(f, "{operation} failed: {reason}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::Directory { source, .. } => Some(source),
            Self::InvalidColor { .. }
            | Self::InvalidImage { .. }
            | Self::InvalidParameter { .. }
            | Self::InvalidPermutation { .. }
            | Self::Computation { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Build an `InvalidParameter` error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Build a `Computation` error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Build an `InvalidImage` error
pub fn invalid_image(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InvalidImage {
        reason: reason.to_string(),
    }
}

//! Rectangular pixel grids used as puzzle source images
//!
//! A `PixelImage` is the validated form of the hex color grids handed in by the
//! surrounding application. Construction rejects empty and ragged input so the
//! rest of the pipeline can rely on a rectangular `height × width` layout.

use crate::color::Rgb;
use crate::color::rgb::hex_to_rgb;
use crate::io::error::{Result, invalid_image};
use ndarray::Array2;

/// A rectangular grid of colors indexed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelImage {
    pixels: Array2<Rgb>,
}

impl PixelImage {
    /// Wrap an existing color array
    ///
    /// # Errors
    ///
    /// Returns `InvalidImage` if the array has zero rows or zero columns
    pub fn new(pixels: Array2<Rgb>) -> Result<Self> {
        if pixels.is_empty() {
            let (height, width) = pixels.dim();
            return Err(invalid_image(&format!(
                "image must have at least one pixel (got {height}x{width})"
            )));
        }
        Ok(Self { pixels })
    }

    /// Build an image filled with a single color
    ///
    /// # Errors
    ///
    /// Returns `InvalidImage` if either dimension is zero
    pub fn filled(height: usize, width: usize, color: Rgb) -> Result<Self> {
        Self::new(Array2::from_elem((height, width), color))
    }

    /// Build an image from row-major color rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidImage` if there are no rows, the first row is empty, or
    /// any row differs in length from the first
    pub fn from_rows(rows: &[Vec<Rgb>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(invalid_image(&format!(
                "row {index} has {} pixels, expected {width}",
                row.len()
            )));
        }

        let flat: Vec<Rgb> = rows.iter().flatten().copied().collect();
        let pixels = Array2::from_shape_vec((height, width), flat).map_err(|e| invalid_image(&e))?;
        Self::new(pixels)
    }

    /// Build an image from rows of `#RRGGBB` strings
    ///
    /// # Errors
    ///
    /// Returns `InvalidColor` for a malformed color string, or `InvalidImage`
    /// for empty or ragged input
    pub fn from_hex_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let parsed = rows
            .iter()
            .map(|row| row.iter().map(|hex| hex_to_rgb(hex.as_ref())).collect())
            .collect::<Result<Vec<Vec<Rgb>>>>()?;
        Self::from_rows(&parsed)
    }

    /// Encode the image back into rows of `#rrggbb` strings
    pub fn to_hex_rows(&self) -> Vec<Vec<String>> {
        self.pixels
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|c| c.to_hex()).collect())
            .collect()
    }

    /// Number of pixel rows
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Number of pixel columns
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Number of pixels
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Color at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Rgb> {
        self.pixels.get((row, col)).copied()
    }

    /// Borrow the underlying color array
    pub const fn pixels(&self) -> &Array2<Rgb> {
        &self.pixels
    }

    /// Apply a color transform to every pixel, producing a new image
    #[must_use]
    pub fn map_pixels<F>(&self, f: F) -> Self
    where
        F: FnMut(&Rgb) -> Rgb,
    {
        Self {
            pixels: self.pixels.map(f),
        }
    }

    /// Consume the image and return its color array
    pub fn into_pixels(self) -> Array2<Rgb> {
        self.pixels
    }
}

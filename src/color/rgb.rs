//! 8-bit RGB colors with `#RRGGBB` encoding and perceptual luminance

use crate::io::configuration::{LUMINANCE_BLUE, LUMINANCE_GREEN, LUMINANCE_RED};
use crate::io::error::{PuzzleError, Result};
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from arbitrary numeric channels, rounding and clamping each to `0..=255`
    ///
    /// Values that cannot be represented as a float (or are NaN) become 0.
    pub fn from_clamped<T: ToPrimitive>(r: T, g: T, b: T) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Channels as floats in `[0, 255]`
    pub fn to_f64(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }

    /// Channels as a byte array
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Weighted luminance `0.299R + 0.587G + 0.114B`
    pub fn luminance(self) -> f64 {
        let [r, g, b] = self.to_f64();
        LUMINANCE_BLUE.mul_add(b, LUMINANCE_RED.mul_add(r, LUMINANCE_GREEN * g))
    }

    /// Squared Euclidean distance in RGB space
    pub fn distance_squared(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db).unsigned_abs()
    }

    /// Euclidean distance in RGB space
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }

    /// Lowercase `#rrggbb` encoding
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(channels: [u8; 3]) -> Self {
        let [r, g, b] = channels;
        Self { r, g, b }
    }
}

fn clamp_channel<T: ToPrimitive>(value: T) -> u8 {
    match value.to_f64() {
        Some(v) if v.is_nan() => 0,
        Some(v) => v.round().clamp(0.0, 255.0) as u8,
        None => 0,
    }
}

/// Parse a `#RRGGBB` string (the leading `#` is optional, case-insensitive)
///
/// # Errors
///
/// Returns `InvalidColor` if the string is not exactly six hex digits after the
/// optional `#`
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || PuzzleError::InvalidColor {
        value: hex.to_string(),
    };

    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(invalid)
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Encode channels as lowercase `#rrggbb`, clamping each into `0..=255`
///
/// `rgb_to_hex(300, -50, 128)` yields `"#ff0080"`.
pub fn rgb_to_hex<T: ToPrimitive>(r: T, g: T, b: T) -> String {
    Rgb::from_clamped(r, g, b).to_hex()
}

/// Weighted luminance of a color
pub fn luminance(color: Rgb) -> f64 {
    color.luminance()
}

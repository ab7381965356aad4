//! Luminance balancing between two images

use crate::color::Rgb;
use crate::spatial::PixelImage;

/// Mean weighted luminance over every pixel
pub fn average_luminance(image: &PixelImage) -> f64 {
    let count = image.pixel_count();
    if count == 0 {
        return 0.0;
    }
    image.pixels().iter().map(|c| c.luminance()).sum::<f64>() / count as f64
}

/// Scale every channel of an image by `factor`, clamping at 255
#[must_use]
pub fn scale_channels(image: &PixelImage, factor: f64) -> PixelImage {
    image.map_pixels(|&color| {
        let [r, g, b] = color.to_f64();
        Rgb::from_clamped(r * factor, g * factor, b * factor)
    })
}

/// Pull both images toward the mean of their average luminances
///
/// Each image is scaled by `target / own_average`. An image with zero average
/// luminance has nothing to scale and is returned unchanged.
pub fn normalize_luminance(image_a: &PixelImage, image_b: &PixelImage) -> (PixelImage, PixelImage) {
    let luminance_a = average_luminance(image_a);
    let luminance_b = average_luminance(image_b);
    let target = f64::midpoint(luminance_a, luminance_b);

    let balance = |image: &PixelImage, own: f64| {
        if own > 0.0 {
            scale_channels(image, target / own)
        } else {
            image.clone()
        }
    };

    (balance(image_a, luminance_a), balance(image_b, luminance_b))
}

//! Combining a matched pair of tiles into one physical tile

use crate::color::Rgb;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Tile;
use ndarray::Zip;

/// Per-pixel linear interpolation `round(a·w + b·(1 − w))`
///
/// Tiles of different dimensions can't be blended; tile A is returned
/// unchanged in that case.
///
/// # Errors
///
/// Returns `InvalidParameter` if `weight_a` is outside `[0, 1]`
pub fn blend_tiles(tile_a: &Tile, tile_b: &Tile, weight_a: f64) -> Result<Tile> {
    if !(0.0..=1.0).contains(&weight_a) {
        return Err(invalid_parameter(
            "weight_a",
            &weight_a,
            &"must be within [0, 1]",
        ));
    }
    if tile_a.dim() != tile_b.dim() {
        return Ok(tile_a.clone());
    }

    let weight_b = 1.0 - weight_a;
    Ok(Zip::from(tile_a)
        .and(tile_b)
        .map_collect(|&a, &b| blend_colors(a, b, weight_a, weight_b)))
}

fn blend_colors(a: Rgb, b: Rgb, weight_a: f64, weight_b: f64) -> Rgb {
    let [ar, ag, ab] = a.to_f64();
    let [br, bg, bb] = b.to_f64();
    Rgb::from_clamped(
        ar.mul_add(weight_a, br * weight_b),
        ag.mul_add(weight_a, bg * weight_b),
        ab.mul_add(weight_a, bb * weight_b),
    )
}

/// Physical tile content for a matched pair
///
/// Pairs scoring above `threshold` are close enough that tile A is used
/// verbatim; anything at or below it is blended with `weight_a`.
///
/// # Errors
///
/// Returns `InvalidParameter` if `weight_a` is outside `[0, 1]`
pub fn combine_matched_tile(
    tile_a: &Tile,
    tile_b: &Tile,
    similarity: f64,
    threshold: f64,
    weight_a: f64,
) -> Result<Tile> {
    if similarity > threshold {
        Ok(tile_a.clone())
    } else {
        blend_tiles(tile_a, tile_b, weight_a)
    }
}

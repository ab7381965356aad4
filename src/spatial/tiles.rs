//! Tile extraction from source images
//!
//! Cuts an image into a `grid_size × grid_size` grid of equally sized tiles in
//! row-major order. Tile dimensions come from integer division, so leftover
//! rows at the bottom and columns at the right are dropped.

use crate::color::Rgb;
use crate::io::configuration::MAX_GRID_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::PixelImage;
use ndarray::{Array2, s};

/// A rectangular block of colors cut from a source image
pub type Tile = Array2<Rgb>;

/// Tile height and width for an image split into `grid_size` tiles per side
///
/// # Errors
///
/// Returns `InvalidParameter` if `grid_size` is zero, exceeds `MAX_GRID_SIZE`,
/// or is larger than either image dimension
pub fn tile_dimensions(image: &PixelImage, grid_size: usize) -> Result<(usize, usize)> {
    if grid_size == 0 {
        return Err(invalid_parameter(
            "grid_size",
            &grid_size,
            &"must be at least 1",
        ));
    }
    if grid_size > MAX_GRID_SIZE {
        return Err(invalid_parameter(
            "grid_size",
            &grid_size,
            &format!("must not exceed {MAX_GRID_SIZE}"),
        ));
    }

    let tile_height = image.height() / grid_size;
    let tile_width = image.width() / grid_size;

    if tile_height == 0 || tile_width == 0 {
        return Err(invalid_parameter(
            "grid_size",
            &grid_size,
            &format!(
                "image of {}x{} pixels is smaller than the grid",
                image.height(),
                image.width()
            ),
        ));
    }

    Ok((tile_height, tile_width))
}

/// Split an image into `grid_size²` tiles in row-major order
///
/// Every tile is `floor(height / grid_size) × floor(width / grid_size)`.
///
/// # Errors
///
/// Returns `InvalidParameter` under the same conditions as [`tile_dimensions`]
pub fn extract_tiles(image: &PixelImage, grid_size: usize) -> Result<Vec<Tile>> {
    let (tile_height, tile_width) = tile_dimensions(image, grid_size)?;
    let pixels = image.pixels();

    let mut tiles = Vec::with_capacity(grid_size * grid_size);
    for grid_row in 0..grid_size {
        for grid_col in 0..grid_size {
            let top = grid_row * tile_height;
            let left = grid_col * tile_width;
            let tile = pixels
                .slice(s![top..top + tile_height, left..left + tile_width])
                .to_owned();
            tiles.push(tile);
        }
    }

    Ok(tiles)
}

/// Reassemble tiles placed in row-major grid positions into one image
///
/// `arrangement[position]` names the tile drawn at that position.
///
/// # Errors
///
/// Returns `InvalidParameter` if the arrangement length isn't `grid_size²`,
/// names a missing tile, or the tiles differ in size
pub fn assemble_tiles(
    tiles: &[Tile],
    arrangement: &[usize],
    grid_size: usize,
) -> Result<PixelImage> {
    if arrangement.len() != grid_size * grid_size {
        return Err(invalid_parameter(
            "arrangement",
            &arrangement.len(),
            &format!("expected {} positions", grid_size * grid_size),
        ));
    }

    let (tile_height, tile_width) = tiles.first().map_or((0, 0), |tile| tile.dim());
    let mut pixels = Array2::from_elem(
        (tile_height * grid_size, tile_width * grid_size),
        Rgb::default(),
    );

    for (position, &tile_index) in arrangement.iter().enumerate() {
        let tile = tiles.get(tile_index).ok_or_else(|| {
            invalid_parameter("arrangement", &tile_index, &"tile index out of range")
        })?;
        if tile.dim() != (tile_height, tile_width) {
            return Err(invalid_parameter(
                "tiles",
                &format!("{:?}", tile.dim()),
                &"all tiles must share one size",
            ));
        }
        let top = (position / grid_size) * tile_height;
        let left = (position % grid_size) * tile_width;
        pixels
            .slice_mut(s![top..top + tile_height, left..left + tile_width])
            .assign(tile);
    }

    PixelImage::new(pixels)
}

//! PNG loading into pixel grids and rendering of puzzle arrangements

use crate::color::Rgb;
use crate::io::error::{PuzzleError, Result, computation_error, invalid_parameter};
use crate::puzzle::definition::{LinePath, PuzzleDefinition, TileContent};
use crate::spatial::{PixelImage, Tile};
use image::imageops::{self, FilterType};
use image::{ImageBuffer, Rgb as ImageRgb, RgbImage, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Load an image file as a pixel grid
///
/// Images whose larger side exceeds `max_dimension` are downscaled with
/// Lanczos filtering, keeping the aspect ratio.
///
/// # Errors
///
/// Returns `Decode` if the file can't be opened or decoded
pub fn load_pixel_image<P: AsRef<Path>>(path: P, max_dimension: Option<u32>) -> Result<PixelImage> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|source| PuzzleError::Decode {
        path: path_buf,
        source,
    })?;
    let mut rgb = img.to_rgb8();

    if let Some(limit) = max_dimension {
        rgb = downscale_to_fit(rgb, limit);
    }

    pixel_image_from_rgb(&rgb)
}

/// Shrink an image so neither side exceeds `max_dimension`
pub fn downscale_to_fit(img: RgbImage, max_dimension: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    let largest = width.max(height);
    if largest <= max_dimension || max_dimension == 0 {
        return img;
    }

    let scale = f64::from(max_dimension) / f64::from(largest);
    let new_width = ((f64::from(width) * scale) as u32).max(1);
    let new_height = ((f64::from(height) * scale) as u32).max(1);
    imageops::resize(&img, new_width, new_height, FilterType::Lanczos3)
}

/// Convert a decoded RGB image into a pixel grid
///
/// # Errors
///
/// Returns `InvalidImage` if the image has no pixels
pub fn pixel_image_from_rgb(img: &RgbImage) -> Result<PixelImage> {
    let (width, height) = img.dimensions();
    let pixels = Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        let [r, g, b] = img.get_pixel(col as u32, row as u32).0;
        Rgb::new(r, g, b)
    });
    PixelImage::new(pixels)
}

/// Convert a pixel grid into an RGB image buffer
pub fn pixel_image_to_rgb(image: &PixelImage) -> RgbImage {
    ImageBuffer::from_fn(image.width() as u32, image.height() as u32, |x, y| {
        let color = image.get(y as usize, x as usize).unwrap_or_default();
        ImageRgb(color.to_array())
    })
}

/// Rasterize tile content into a square RGBA image
///
/// Double-sided tiles render the face selected by `flipped`.
pub fn render_tile(content: &TileContent, size: u32, flipped: bool) -> RgbaImage {
    match content {
        TileContent::Color(color) => ImageBuffer::from_pixel(size, size, opaque(*color)),
        TileContent::Lines(paths) => {
            let mut canvas = ImageBuffer::from_pixel(size, size, TRANSPARENT);
            for path in paths {
                draw_path(&mut canvas, path);
            }
            canvas
        }
        TileContent::Pixels(tile) => render_pixels(tile, size),
        TileContent::DoubleSided { front, back } => {
            let face = if flipped { back } else { front };
            render_tile(face, size, false)
        }
    }
}

fn opaque(color: Rgb) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

// Nearest-neighbour scaling
fn render_pixels(tile: &Tile, size: u32) -> RgbaImage {
    let (rows, cols) = tile.dim();
    if rows == 0 || cols == 0 || size == 0 {
        return ImageBuffer::from_pixel(size, size, TRANSPARENT);
    }

    ImageBuffer::from_fn(size, size, |x, y| {
        let row = (y as usize * rows) / size as usize;
        let col = (x as usize * cols) / size as usize;
        tile.get((row, col)).copied().map_or(TRANSPARENT, opaque)
    })
}

fn draw_path(canvas: &mut RgbaImage, path: &LinePath) {
    let size = canvas.width() as f32;
    let radius = (path.width * size / 2.0).max(0.5);
    let color = opaque(path.color);

    let to_canvas = |point: &[f32; 2]| [point[0] * size, point[1] * size];
    let points: Vec<[f32; 2]> = path.points.iter().map(to_canvas).collect();

    if let [single] = points.as_slice() {
        stamp(canvas, *single, radius, color);
        return;
    }

    for segment in points.windows(2) {
        let (Some(&start), Some(&end)) = (segment.first(), segment.get(1)) else {
            continue;
        };
        let length = (end[0] - start[0]).hypot(end[1] - start[1]);
        let steps = (length * 2.0).ceil().max(1.0) as u32;
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let point = [
                (end[0] - start[0]).mul_add(t, start[0]),
                (end[1] - start[1]).mul_add(t, start[1]),
            ];
            stamp(canvas, point, radius, color);
        }
    }
}

fn stamp(canvas: &mut RgbaImage, center: [f32; 2], radius: f32, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let min_x = (center[0] - radius).floor().max(0.0) as u32;
    let min_y = (center[1] - radius).floor().max(0.0) as u32;
    let max_x = ((center[0] + radius).ceil().max(0.0) as u32).min(width);
    let max_y = ((center[1] + radius).ceil().max(0.0) as u32).min(height);

    for y in min_y..max_y {
        for x in min_x..max_x {
            canvas.put_pixel(x, y, color);
        }
    }
}

/// Render a puzzle with tiles placed in `arrangement` order
///
/// # Errors
///
/// Returns `InvalidParameter` if the arrangement length doesn't fill the grid
/// or names a tile the puzzle doesn't have, and `Computation` if the canvas
/// edge doesn't fit in `u32`
pub fn render_arrangement(
    puzzle: &PuzzleDefinition,
    arrangement: &[String],
    tile_size: u32,
) -> Result<RgbaImage> {
    let grid_size = puzzle.grid_size;
    if arrangement.len() != grid_size * grid_size {
        return Err(invalid_parameter(
            "arrangement",
            &arrangement.len(),
            &format!("expected {} positions", grid_size * grid_size),
        ));
    }
    if grid_size == 0 {
        return Err(invalid_parameter(
            "grid_size",
            &grid_size,
            &"cannot render an empty puzzle",
        ));
    }

    let edge = u32::try_from(grid_size)
        .ok()
        .and_then(|tiles| tiles.checked_mul(tile_size))
        .ok_or_else(|| {
            computation_error(
                "render_arrangement",
                &format!("{grid_size} tiles of {tile_size}px overflow the canvas"),
            )
        })?;
    let mut canvas = ImageBuffer::from_pixel(edge, edge, TRANSPARENT);

    for (position, id) in arrangement.iter().enumerate() {
        let tile = puzzle
            .tile(id)
            .ok_or_else(|| invalid_parameter("arrangement", id, &"unknown tile id"))?;
        let rendered = render_tile(&tile.content, tile_size, false);
        let x = (position % grid_size) as u32 * tile_size;
        let y = (position / grid_size) as u32 * tile_size;
        imageops::replace(&mut canvas, &rendered, i64::from(x), i64::from(y));
    }

    Ok(canvas)
}

/// Render an arrangement and save it as PNG
///
/// # Errors
///
/// Returns an error if rendering fails, the parent directory cannot be
/// created, or the image cannot be saved
pub fn export_arrangement_as_png(
    puzzle: &PuzzleDefinition,
    arrangement: &[String],
    tile_size: u32,
    output_path: &Path,
) -> Result<()> {
    let canvas = render_arrangement(puzzle, arrangement, tile_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| PuzzleError::Directory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    canvas
        .save(output_path)
        .map_err(|source| PuzzleError::Encode {
            path: output_path.to_path_buf(),
            source,
        })
}

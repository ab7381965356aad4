//! Tests for PNG loading, tile rendering and arrangement export

#[cfg(test)]
mod tests {
    use dualtile::PuzzleError;
    use dualtile::color::Rgb;
    use dualtile::io::image::{
        downscale_to_fit, export_arrangement_as_png, load_pixel_image, pixel_image_from_rgb,
        pixel_image_to_rgb, render_arrangement, render_tile,
    };
    use dualtile::puzzle::definition::{
        LinePath, PuzzleDefinition, PuzzleTile, TileContent, tile_id,
    };
    use dualtile::spatial::Tile;
    use image::{Rgb as ImageRgb, RgbImage, Rgba};
    use ndarray::array;
    use tempfile::TempDir;

    const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn color_puzzle() -> PuzzleDefinition {
        let colors = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
        ];
        PuzzleDefinition {
            id: "colors".to_string(),
            name: "a / b".to_string(),
            grid_size: 2,
            tiles: colors
                .iter()
                .enumerate()
                .map(|(i, &color)| PuzzleTile {
                    id: tile_id(i),
                    content: TileContent::Color(color),
                })
                .collect(),
            solution_a: (0..4).map(tile_id).collect(),
            solution_b: [3, 2, 1, 0].into_iter().map(tile_id).collect(),
            image_a_label: "a".to_string(),
            image_b_label: "b".to_string(),
        }
    }

    // Tests a saved PNG loads back as the same pixel grid
    // Verified by swapping x and y during conversion
    #[test]
    fn test_load_pixel_image() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("source.png");
        let img = RgbImage::from_fn(3, 2, |x, y| ImageRgb([x as u8 * 100, y as u8 * 100, 7]));
        img.save(&path).expect("write png");

        let loaded = load_pixel_image(&path, None).expect("readable png");
        assert_eq!(loaded.height(), 2);
        assert_eq!(loaded.width(), 3);
        assert_eq!(loaded.get(1, 2), Some(Rgb::new(200, 100, 7)));
        assert_eq!(pixel_image_to_rgb(&loaded), img);
    }

    // Tests loading a missing file reports the path
    // Verified by mapping open failures to Directory
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.png");
        assert!(matches!(
            load_pixel_image(&missing, None),
            Err(PuzzleError::Decode { path, .. }) if path == missing
        ));
    }

    // Tests downscaling keeps the aspect ratio and skips small images
    // Verified by scaling both sides to the limit
    #[test]
    fn test_downscale_to_fit() {
        let wide = RgbImage::new(100, 50);
        assert_eq!(downscale_to_fit(wide, 20).dimensions(), (20, 10));

        let small = RgbImage::new(8, 4);
        assert_eq!(downscale_to_fit(small, 20).dimensions(), (8, 4));

        let thin = RgbImage::new(400, 1);
        assert_eq!(downscale_to_fit(thin, 10).dimensions(), (10, 1));
    }

    // Tests an empty decoded image is rejected
    // Verified by allowing zero-sized grids
    #[test]
    fn test_empty_rgb_rejected() {
        assert!(pixel_image_from_rgb(&RgbImage::new(0, 0)).is_err());
    }

    // Tests pixel tiles scale by nearest neighbour
    // Verified by sampling rows with the column index
    #[test]
    fn test_render_pixels() {
        let tile: Tile = array![
            [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)],
            [Rgb::new(0, 0, 255), Rgb::new(9, 9, 9)]
        ];
        let rendered = render_tile(&TileContent::Pixels(tile), 4, false);
        assert_eq!(rendered.dimensions(), (4, 4));
        assert_eq!(rendered.get_pixel(3, 0), &Rgba([0, 255, 0, 255]));
        assert_eq!(rendered.get_pixel(0, 3), &Rgba([0, 0, 255, 255]));
        assert_eq!(rendered.get_pixel(2, 2), &Rgba([9, 9, 9, 255]));
    }

    // Tests strokes are drawn over a transparent background
    // Verified by ignoring the stroke width
    #[test]
    fn test_render_lines() {
        let content = TileContent::Lines(vec![LinePath {
            color: Rgb::new(10, 20, 30),
            width: 0.1,
            points: vec![[0.0, 0.5], [1.0, 0.5]],
        }]);
        let rendered = render_tile(&content, 20, false);
        assert_eq!(rendered.get_pixel(10, 10), &Rgba([10, 20, 30, 255]));
        assert_eq!(rendered.get_pixel(10, 0), &TRANSPARENT);
        assert_eq!(rendered.get_pixel(10, 19), &TRANSPARENT);
    }

    // Tests double-sided tiles render the face for the flip state
    // Verified by always rendering the front
    #[test]
    fn test_render_double_sided() {
        let content = TileContent::double_sided(
            TileContent::Color(Rgb::new(1, 1, 1)),
            TileContent::Color(Rgb::new(2, 2, 2)),
        );
        assert_eq!(render_tile(&content, 2, false).get_pixel(0, 0), &Rgba([1, 1, 1, 255]));
        assert_eq!(render_tile(&content, 2, true).get_pixel(0, 0), &Rgba([2, 2, 2, 255]));
    }

    // Tests tiles land at their arrangement positions
    // Verified by placing tiles in tile order
    #[test]
    fn test_render_arrangement() {
        let puzzle = color_puzzle();
        let canvas = render_arrangement(&puzzle, &puzzle.solution_b, 4).expect("valid arrangement");
        assert_eq!(canvas.dimensions(), (8, 8));
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([255, 255, 0, 255]));
        assert_eq!(canvas.get_pixel(7, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.get_pixel(7, 7), &Rgba([255, 0, 0, 255]));
    }

    // Tests malformed arrangements are rejected
    // Verified by skipping unknown ids
    #[test]
    fn test_render_arrangement_errors() {
        let puzzle = color_puzzle();
        let short: Vec<String> = (0..3).map(tile_id).collect();
        assert!(render_arrangement(&puzzle, &short, 4).is_err());

        let unknown: Vec<String> = [0, 1, 2, 7].into_iter().map(tile_id).collect();
        assert!(render_arrangement(&puzzle, &unknown, 4).is_err());

        let empty = PuzzleDefinition::empty("e", "a", "b");
        assert!(render_arrangement(&empty, &[], 4).is_err());
    }

    // Tests export creates missing directories and writes a readable PNG
    // Verified by removing directory creation
    #[test]
    fn test_export_arrangement_as_png() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("out.png");
        let puzzle = color_puzzle();

        export_arrangement_as_png(&puzzle, &puzzle.solution_a, 3, &path).expect("export");
        let loaded = load_pixel_image(&path, None).expect("readable png");
        assert_eq!(loaded.width(), 6);
        assert_eq!(loaded.get(0, 0), Some(Rgb::new(255, 0, 0)));
        assert_eq!(loaded.get(5, 5), Some(Rgb::new(255, 255, 0)));
    }
}

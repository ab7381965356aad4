//! Tests for cutting images into tiles and reassembling them

#[cfg(test)]
mod tests {
    use dualtile::PuzzleError;
    use dualtile::color::Rgb;
    use dualtile::spatial::PixelImage;
    use dualtile::spatial::tiles::{assemble_tiles, extract_tiles, tile_dimensions};
    use ndarray::Array2;

    fn gradient(height: usize, width: usize) -> PixelImage {
        let pixels = Array2::from_shape_fn((height, width), |(row, col)| {
            Rgb::new(row as u8, col as u8, 0)
        });
        PixelImage::new(pixels).expect("non-empty gradient")
    }

    // Tests tiles come out in row-major order with the right origin
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_extract_tiles_row_major() {
        let tiles = extract_tiles(&gradient(4, 6), 2).unwrap_or_default();
        assert_eq!(tiles.len(), 4);

        let origins: Vec<Option<Rgb>> = tiles.iter().map(|t| t.get((0, 0)).copied()).collect();
        assert_eq!(
            origins,
            vec![
                Some(Rgb::new(0, 0, 0)),
                Some(Rgb::new(0, 3, 0)),
                Some(Rgb::new(2, 0, 0)),
                Some(Rgb::new(2, 3, 0)),
            ]
        );
        assert!(tiles.iter().all(|t| t.dim() == (2, 3)));
    }

    // Tests leftover pixels at the bottom and right are dropped
    // Verified by rounding tile size up
    #[test]
    fn test_extract_tiles_truncates_remainder() {
        let image = gradient(7, 5);
        assert_eq!(tile_dimensions(&image, 3).ok(), Some((2, 1)));

        let tiles = extract_tiles(&image, 3).unwrap_or_default();
        assert_eq!(tiles.len(), 9);
        let last = tiles.last().and_then(|t| t.get((1, 0)).copied());
        assert_eq!(last, Some(Rgb::new(5, 2, 0)));
    }

    // Tests invalid grid sizes are rejected
    // Verified by removing the zero-dimension check
    #[test]
    fn test_tile_dimensions_rejects_invalid_grid() {
        let image = gradient(4, 4);
        for grid_size in [0, 5, 17] {
            assert!(matches!(
                tile_dimensions(&image, grid_size),
                Err(PuzzleError::InvalidParameter { .. })
            ));
        }
        assert_eq!(tile_dimensions(&image, 4).ok(), Some((1, 1)));
    }

    // Tests extraction followed by identity assembly reproduces the image
    // Verified by swapping row and column offsets in assembly
    #[test]
    fn test_assemble_identity_restores_image() {
        let image = gradient(6, 6);
        let tiles = extract_tiles(&image, 3).unwrap_or_default();
        let identity: Vec<usize> = (0..9).collect();
        assert_eq!(assemble_tiles(&tiles, &identity, 3).ok(), Some(image));
    }

    // Tests assembly places the named tile at each position
    // Verified by placing tiles by their own index
    #[test]
    fn test_assemble_follows_arrangement() {
        let tiles = extract_tiles(&gradient(2, 2), 2).unwrap_or_default();
        let rebuilt = assemble_tiles(&tiles, &[3, 2, 1, 0], 2).expect("valid arrangement");
        assert_eq!(rebuilt.get(0, 0), Some(Rgb::new(1, 1, 0)));
        assert_eq!(rebuilt.get(1, 1), Some(Rgb::new(0, 0, 0)));
    }

    // Tests malformed arrangements are rejected
    // Verified by skipping the length check
    #[test]
    fn test_assemble_rejects_bad_arrangement() {
        let tiles = extract_tiles(&gradient(2, 2), 2).unwrap_or_default();
        assert!(assemble_tiles(&tiles, &[0, 1, 2], 2).is_err());
        assert!(assemble_tiles(&tiles, &[0, 1, 2, 9], 2).is_err());
    }
}

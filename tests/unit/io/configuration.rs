//! Tests for algorithm constants and their relationships

#[cfg(test)]
mod tests {
    use dualtile::io::configuration::{
        ANALYSIS_GRID_SIZE, BLEND_THRESHOLD, DEFAULT_BLEND_WEIGHT, DEFAULT_GRID_SIZE,
        DEFAULT_PALETTE_SIZE, HISTOGRAM_BINS, KMEANS_ITERATIONS, LUMINANCE_BLUE, LUMINANCE_GREEN,
        LUMINANCE_RED, MAX_GRID_SIZE, SHUFFLED_SUFFIX, SIMILARITY_NORMALIZER, SOLUTION_A_SUFFIX,
        SOLUTION_B_SUFFIX,
    };

    // Tests the normalizer approximates the largest RGB distance
    // Verified by using 255 as the normalizer
    #[test]
    fn test_similarity_normalizer() {
        let max_distance = (3.0f64 * 255.0 * 255.0).sqrt();
        assert!((SIMILARITY_NORMALIZER - max_distance).abs() < 0.01);
    }

    // Tests luminance weights form a weighted average
    // Verified by changing the green weight
    #[test]
    fn test_luminance_weights_sum_to_one() {
        assert!((LUMINANCE_RED + LUMINANCE_GREEN + LUMINANCE_BLUE - 1.0).abs() < 1e-12);
    }

    // Tests blending parameters stay inside the unit interval
    // Verified by raising the threshold above one
    #[test]
    fn test_blend_parameters() {
        assert!((0.0..=1.0).contains(&BLEND_THRESHOLD));
        assert!((0.0..=1.0).contains(&DEFAULT_BLEND_WEIGHT));
    }

    // Tests grid defaults fall within the allowed range
    // Verified by setting the default above the maximum
    #[test]
    fn test_grid_sizes() {
        assert!((1..=MAX_GRID_SIZE).contains(&DEFAULT_GRID_SIZE));
        assert!((1..=MAX_GRID_SIZE).contains(&ANALYSIS_GRID_SIZE));
    }

    // Tests normalization constants
    // Verified by changing bin count
    #[test]
    fn test_normalization_constants() {
        assert_eq!(HISTOGRAM_BINS, 256);
        assert_eq!(KMEANS_ITERATIONS, 10);
        assert_eq!(DEFAULT_PALETTE_SIZE, 8);
    }

    // Tests output suffixes are distinct
    // Verified by reusing one suffix for both solutions
    #[test]
    fn test_output_suffixes_distinct() {
        assert_ne!(SOLUTION_A_SUFFIX, SOLUTION_B_SUFFIX);
        assert_ne!(SOLUTION_A_SUFFIX, SHUFFLED_SUFFIX);
        assert_ne!(SOLUTION_B_SUFFIX, SHUFFLED_SUFFIX);
    }
}

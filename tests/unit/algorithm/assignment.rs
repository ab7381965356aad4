//! Tests for greedy assignment and permutation helpers

#[cfg(test)]
mod tests {
    use dualtile::PuzzleError;
    use dualtile::algorithm::assignment::{
        AssignmentSolver, GreedyAssignment, inverse_permutation, is_permutation,
        total_similarity, validate_permutation,
    };
    use ndarray::{Array2, array};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Tests a strict diagonal maximum yields the identity
    // Verified by sorting scores ascending
    #[test]
    fn test_identity_favoring_matrix() {
        let matrix = array![[1.0, 0.1, 0.1], [0.1, 1.0, 0.1], [0.1, 0.1, 1.0]];
        let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
        assert_eq!(assignment, vec![0, 1, 2]);
    }

    // Tests the solver commits the best pair first even when that is not optimal
    // Verified by solving with the optimal pairing
    #[test]
    fn test_greedy_is_not_optimal() {
        let matrix = array![[0.9, 0.8], [0.85, 0.1]];
        let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
        assert_eq!(assignment, vec![0, 1]);
        assert!((total_similarity(&matrix, &assignment) - 1.0).abs() < 1e-12);
        assert!(total_similarity(&matrix, &[1, 0]) > total_similarity(&matrix, &assignment));
    }

    // Tests equal scores resolve by row then column
    // Verified by breaking ties on the column first
    #[test]
    fn test_ties_resolve_by_position() {
        let matrix = Array2::from_elem((3, 3), 0.5);
        let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
        assert_eq!(assignment, vec![0, 1, 2]);

        let matrix = array![[0.2, 0.7, 0.7], [0.7, 0.7, 0.2], [0.1, 0.1, 0.1]];
        let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
        assert_eq!(assignment, vec![1, 0, 2]);
    }

    // Tests random matrices always yield a permutation
    // Verified by committing pairs without checking used columns
    #[test]
    fn test_random_matrices_yield_permutations() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=9 {
            let matrix = Array2::from_shape_fn((n, n), |_| rng.random::<f64>());
            let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
            assert_eq!(assignment.len(), n);
            assert!(is_permutation(&assignment));
        }
    }

    // Tests NaN scores don't break bijectivity and rank below real scores
    // Verified by ranking with total_cmp alone, which puts NaN first
    #[test]
    fn test_nan_scores_still_permute() {
        let matrix = array![[f64::NAN, 0.5], [0.5, f64::NAN]];
        let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
        assert!(is_permutation(&assignment));
        assert_eq!(assignment, vec![1, 0]);

        let matrix = array![[f64::NAN, -0.25], [f64::NAN, f64::NAN]];
        let assignment = GreedyAssignment::new().solve(&matrix).expect("square matrix");
        assert_eq!(assignment, vec![1, 0]);
    }

    // Tests non-square matrices are rejected
    // Verified by sizing the result from the row count
    #[test]
    fn test_non_square_rejected() {
        let matrix = Array2::from_elem((2, 3), 0.5);
        assert!(matches!(
            GreedyAssignment::new().solve(&matrix),
            Err(PuzzleError::InvalidParameter { .. })
        ));
    }

    // Tests an empty matrix yields an empty assignment
    // Verified by indexing the first row unconditionally
    #[test]
    fn test_empty_matrix() {
        let matrix = Array2::<f64>::zeros((0, 0));
        assert_eq!(GreedyAssignment::new().solve(&matrix).ok(), Some(Vec::new()));
    }

    // Tests permutation checks catch repeats and out-of-range entries
    // Verified by only checking the range
    #[test]
    fn test_permutation_validation() {
        assert!(is_permutation(&[2, 0, 1]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 3, 1]));
        assert!(validate_permutation(&[]).is_ok());
        assert!(matches!(
            validate_permutation(&[1, 1]),
            Err(PuzzleError::InvalidPermutation { .. })
        ));
    }

    // Tests the inverse maps each value back to its position
    // Verified by returning the input unchanged
    #[test]
    fn test_inverse_permutation() {
        assert_eq!(inverse_permutation(&[2, 0, 1]).ok(), Some(vec![1, 2, 0]));
        assert!(inverse_permutation(&[0, 2]).is_err());
    }
}

//! Bijective assignment of image A tiles to image B tiles
//!
//! Solvers turn a square similarity matrix into a permutation where
//! `assignment[i] = j` pairs row `i` with column `j`. Only bijectivity is
//! guaranteed by the contract; how close the total comes to the optimum is a
//! property of the individual solver.

use crate::algorithm::bitset::IndexBitset;
use crate::analysis::similarity::SimilarityMatrix;
use crate::io::error::{PuzzleError, Result, invalid_parameter};
use std::cmp::Ordering;

/// Strategy producing a row-to-column permutation from a similarity matrix
pub trait AssignmentSolver {
    /// Pair every row with a distinct column
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the matrix is not square
    fn solve(&self, matrix: &SimilarityMatrix) -> Result<Vec<usize>>;
}

/// Greedy approximation of the maximum-weight perfect matching
///
/// All `(row, col, score)` triples are ranked by score descending, then row
/// ascending, then column ascending, and each pair is committed when both its
/// row and column are still free. NaN scores rank below every real score, so
/// NaN pairs are only committed once no scored pair remains.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssignment;

impl GreedyAssignment {
    /// Create the greedy solver
    pub const fn new() -> Self {
        Self
    }
}

impl AssignmentSolver for GreedyAssignment {
    fn solve(&self, matrix: &SimilarityMatrix) -> Result<Vec<usize>> {
        let n = square_size(matrix)?;

        let mut candidates: Vec<(usize, usize, f64)> = matrix
            .indexed_iter()
            .map(|((row, col), &score)| (row, col, score))
            .collect();
        candidates.sort_by(|a, b| rank_candidates(*a, *b));

        let mut assignment = vec![0usize; n];
        let mut rows_assigned = IndexBitset::new(n);
        let mut cols_used = IndexBitset::new(n);

        for (row, col, _) in candidates {
            if cols_used.is_full() {
                break;
            }
            if rows_assigned.contains(row) || cols_used.contains(col) {
                continue;
            }
            rows_assigned.insert(row);
            cols_used.insert(col);
            if let Some(slot) = assignment.get_mut(row) {
                *slot = col;
            }
        }

        Ok(assignment)
    }
}

fn rank_score(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

fn rank_candidates(a: (usize, usize, f64), b: (usize, usize, f64)) -> Ordering {
    rank_score(b.2)
        .total_cmp(&rank_score(a.2))
        .then_with(|| a.0.cmp(&b.0))
        .then_with(|| a.1.cmp(&b.1))
}

fn square_size(matrix: &SimilarityMatrix) -> Result<usize> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(invalid_parameter(
            "matrix",
            &format!("{rows}x{cols}"),
            &"similarity matrix must be square",
        ));
    }
    Ok(rows)
}

/// Whether `order` contains every index of `0..order.len()` exactly once
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = IndexBitset::new(order.len());
    order.iter().all(|&index| seen.insert(index))
}

/// Check that `order` is a permutation, naming the first violation
///
/// # Errors
///
/// Returns `InvalidPermutation` on an out-of-range or repeated index
pub fn validate_permutation(order: &[usize]) -> Result<()> {
    let mut seen = IndexBitset::new(order.len());
    for (position, &index) in order.iter().enumerate() {
        if index >= order.len() {
            return Err(PuzzleError::InvalidPermutation {
                reason: format!(
                    "index {index} at position {position} is outside 0..{}",
                    order.len()
                ),
            });
        }
        if !seen.insert(index) {
            return Err(PuzzleError::InvalidPermutation {
                reason: format!("index {index} repeats at position {position}"),
            });
        }
    }
    Ok(())
}

/// Inverse of a permutation: `inverse[order[i]] = i`
///
/// # Errors
///
/// Returns `InvalidPermutation` if `order` is not a permutation
pub fn inverse_permutation(order: &[usize]) -> Result<Vec<usize>> {
    validate_permutation(order)?;
    let mut inverse = vec![0usize; order.len()];
    for (position, &index) in order.iter().enumerate() {
        if let Some(slot) = inverse.get_mut(index) {
            *slot = position;
        }
    }
    Ok(inverse)
}

/// Sum of the matrix entries selected by an assignment
///
/// Pairs falling outside the matrix contribute nothing.
pub fn total_similarity(matrix: &SimilarityMatrix, assignment: &[usize]) -> f64 {
    assignment
        .iter()
        .enumerate()
        .filter_map(|(row, &col)| matrix.get((row, col)))
        .sum()
}

//! Arrangement helpers for the game layer
//!
//! An arrangement lists the tile id at each board position. Helpers here never
//! mutate their inputs; they return new arrangements.

use crate::io::configuration::MAX_SHUFFLE_ATTEMPTS;
use crate::io::error::{Result, invalid_parameter};
use crate::puzzle::definition::{PuzzleDefinition, SolutionSide};
use rand::seq::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};

/// Whether `current` matches `solution` position by position
pub fn is_solved<T: PartialEq>(current: &[T], solution: &[T]) -> bool {
    current.len() == solution.len() && current.iter().zip(solution).all(|(a, b)| a == b)
}

/// The solution side an arrangement currently satisfies, A checked first
///
/// An empty puzzle is never reported as solved.
pub fn solved_side(current: &[String], puzzle: &PuzzleDefinition) -> Option<SolutionSide> {
    if puzzle.is_empty() {
        return None;
    }
    [SolutionSide::A, SolutionSide::B]
        .into_iter()
        .find(|&side| is_solved(current, puzzle.solution(side)))
}

/// A copy of `arrangement` with the entries at `first` and `second` exchanged
///
/// # Errors
///
/// Returns `InvalidParameter` if either position is out of range
pub fn swap_positions<T: Clone>(arrangement: &[T], first: usize, second: usize) -> Result<Vec<T>> {
    for position in [first, second] {
        if position >= arrangement.len() {
            return Err(invalid_parameter(
                "position",
                &position,
                &format!("arrangement has {} positions", arrangement.len()),
            ));
        }
    }

    let mut swapped = arrangement.to_vec();
    swapped.swap(first, second);
    Ok(swapped)
}

/// Seeded random permutation of a puzzle's tile ids
///
/// Reshuffles up to `MAX_SHUFFLE_ATTEMPTS` times to avoid handing out an
/// arrangement that already solves either side. Puzzles with fewer than two
/// tiles are returned in tile order.
pub fn shuffle_arrangement(puzzle: &PuzzleDefinition, seed: u64) -> Vec<String> {
    let mut arrangement = puzzle.tile_ids();
    if arrangement.len() < 2 {
        return arrangement;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..MAX_SHUFFLE_ATTEMPTS {
        arrangement.shuffle(&mut rng);
        if solved_side(&arrangement, puzzle).is_none() {
            break;
        }
    }
    arrangement
}

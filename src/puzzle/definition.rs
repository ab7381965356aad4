//! Puzzle definitions handed to the game layer
//!
//! A definition fixes the physical tiles and the two orderings of their ids
//! that solve the puzzle. The game layer only ever reorders ids; tile content
//! and solutions are immutable once built.

use crate::algorithm::assignment::validate_permutation;
use crate::algorithm::matcher::MatchResult;
use crate::color::Rgb;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::Tile;
use std::collections::HashMap;

/// A polyline drawn on a tile, coordinates in the unit square
#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    /// Stroke color
    pub color: Rgb,
    /// Stroke width as a fraction of the tile edge
    pub width: f32,
    /// Vertices as `[x, y]` with `(0, 0)` at the top-left corner
    pub points: Vec<[f32; 2]>,
}

/// Renderable content of one physical tile
#[derive(Debug, Clone, PartialEq)]
pub enum TileContent {
    /// A single flat color
    Color(Rgb),
    /// Vector strokes over a transparent background
    Lines(Vec<LinePath>),
    /// A pixel grid scaled to the tile
    Pixels(Tile),
    /// A tile with distinct faces, shown one at a time
    DoubleSided {
        /// Face shown by default
        front: Box<TileContent>,
        /// Face shown when the tile is flipped
        back: Box<TileContent>,
    },
}

impl TileContent {
    /// Build a two-sided tile
    pub fn double_sided(front: Self, back: Self) -> Self {
        Self::DoubleSided {
            front: Box::new(front),
            back: Box::new(back),
        }
    }

    /// The face visible for a flip state
    ///
    /// Single-sided content shows the same face either way.
    pub fn face(&self, flipped: bool) -> &Self {
        match self {
            Self::DoubleSided { front, back } => {
                if flipped {
                    back.face(false)
                } else {
                    front.face(false)
                }
            }
            Self::Color(_) | Self::Lines(_) | Self::Pixels(_) => self,
        }
    }
}

/// One physical game piece
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleTile {
    /// Stable identifier referenced by the solutions
    pub id: String,
    /// What the tile shows
    pub content: TileContent,
}

/// Which of the two target images an ordering depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolutionSide {
    /// The ordering that depicts image A
    A,
    /// The ordering that depicts image B
    B,
}

/// A dual-solution puzzle
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleDefinition {
    /// Puzzle identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Tiles per side
    pub grid_size: usize,
    /// Physical tiles
    pub tiles: Vec<PuzzleTile>,
    /// Tile ids by position that depict image A
    pub solution_a: Vec<String>,
    /// Tile ids by position that depict image B
    pub solution_b: Vec<String>,
    /// Label of image A
    pub image_a_label: String,
    /// Label of image B
    pub image_b_label: String,
}

/// Identifier of the tile cut from position `index` of image A
pub fn tile_id(index: usize) -> String {
    format!("t{index}")
}

/// Display name for a puzzle built from two labelled images
pub fn puzzle_name(label_a: &str, label_b: &str) -> String {
    format!("{label_a} / {label_b}")
}

impl PuzzleDefinition {
    /// A puzzle with no tiles and empty solutions
    ///
    /// Stands in for a puzzle whose generation failed so the game layer always
    /// has something to show.
    pub fn empty(id: &str, label_a: &str, label_b: &str) -> Self {
        Self {
            id: id.to_string(),
            name: puzzle_name(label_a, label_b),
            grid_size: 0,
            tiles: Vec::new(),
            solution_a: Vec::new(),
            solution_b: Vec::new(),
            image_a_label: label_a.to_string(),
            image_b_label: label_b.to_string(),
        }
    }

    /// Whether the puzzle has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile ids in tile order
    pub fn tile_ids(&self) -> Vec<String> {
        self.tiles.iter().map(|tile| tile.id.clone()).collect()
    }

    /// Look up a tile by id
    pub fn tile(&self, id: &str) -> Option<&PuzzleTile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// The ordering for one side
    pub fn solution(&self, side: SolutionSide) -> &[String] {
        match side {
            SolutionSide::A => &self.solution_a,
            SolutionSide::B => &self.solution_b,
        }
    }

    /// Tile indices (into `tiles`) for a side's solution
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if the solution names an unknown id
    pub fn solution_indices(&self, side: SolutionSide) -> Result<Vec<usize>> {
        let index_of: HashMap<&str, usize> = self
            .tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (tile.id.as_str(), index))
            .collect();

        self.solution(side)
            .iter()
            .map(|id| {
                index_of
                    .get(id.as_str())
                    .copied()
                    .ok_or_else(|| PuzzleError::InvalidPermutation {
                        reason: format!("solution names unknown tile '{id}'"),
                    })
            })
            .collect()
    }

    /// Check the tile-count and solution invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidPermutation` if the tile count isn't `grid_size²`, tile
    /// ids repeat, or either solution isn't a permutation of the tile ids
    pub fn validate(&self) -> Result<()> {
        let expected = self.grid_size * self.grid_size;
        if self.tiles.len() != expected {
            return Err(PuzzleError::InvalidPermutation {
                reason: format!(
                    "{} tiles for a {}x{} grid",
                    self.tiles.len(),
                    self.grid_size,
                    self.grid_size
                ),
            });
        }

        let mut ids: Vec<&str> = self.tiles.iter().map(|tile| tile.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.tiles.len() {
            return Err(PuzzleError::InvalidPermutation {
                reason: "tile ids repeat".to_string(),
            });
        }

        for side in [SolutionSide::A, SolutionSide::B] {
            let indices = self.solution_indices(side)?;
            if indices.len() != self.tiles.len() {
                return Err(PuzzleError::InvalidPermutation {
                    reason: format!(
                        "solution {side:?} has {} entries for {} tiles",
                        indices.len(),
                        self.tiles.len()
                    ),
                });
            }
            validate_permutation(&indices)?;
        }

        Ok(())
    }
}

/// Turn a match result into a puzzle definition with pixel-grid tiles
///
/// Tile `i` gets id `t{i}`; solution index orderings become id orderings.
pub fn create_puzzle_from_match(
    result: &MatchResult,
    label_a: &str,
    label_b: &str,
    id: &str,
) -> PuzzleDefinition {
    let tiles = result
        .tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| PuzzleTile {
            id: tile_id(index),
            content: TileContent::Pixels(tile.clone()),
        })
        .collect();

    PuzzleDefinition {
        id: id.to_string(),
        name: puzzle_name(label_a, label_b),
        grid_size: result.grid_size,
        tiles,
        solution_a: result.solution_a.iter().map(|&i| tile_id(i)).collect(),
        solution_b: result.solution_b.iter().map(|&i| tile_id(i)).collect(),
        image_a_label: label_a.to_string(),
        image_b_label: label_b.to_string(),
    }
}

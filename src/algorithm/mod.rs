/// Greedy bijective assignment over similarity matrices
pub mod assignment;
/// Index bitset for tracking committed rows and columns
pub mod bitset;
/// Per-pixel blending of matched tile pairs
pub mod blend;
/// Image pair matching and quality analysis
pub mod matcher;

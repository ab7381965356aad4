//! Command-line interface for building a dual-solution puzzle from two PNG files

use crate::algorithm::matcher::{ImageMatcher, MatcherConfig, QualityReport};
use crate::analysis::normalization::{NormalizationMethod, NormalizationOptions};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_MAX_TILE_PIXELS, DEFAULT_SEED, DEFAULT_TILE_RENDER_SIZE,
    SHUFFLED_SUFFIX, SOLUTION_A_SUFFIX, SOLUTION_B_SUFFIX,
};
use crate::io::error::Result;
use crate::io::image::{export_arrangement_as_png, load_pixel_image};
use crate::io::progress::ProgressManager;
use crate::puzzle::arrangement::shuffle_arrangement;
use crate::puzzle::definition::{PuzzleDefinition, create_puzzle_from_match};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "dualtile")]
#[command(
    author,
    version,
    about = "Build a tile puzzle that solves to either of two images"
)]
/// Command-line arguments for the puzzle generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image shown by the first solution
    #[arg(value_name = "IMAGE_A")]
    pub image_a: PathBuf,

    /// Image shown by the second solution
    #[arg(value_name = "IMAGE_B")]
    pub image_b: PathBuf,

    /// Tiles per side of the puzzle grid
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Color normalization applied before matching
    #[arg(short, long, value_enum, default_value_t = NormalizationMethod::None)]
    pub method: NormalizationMethod,

    /// Palette size for palette normalization
    #[arg(short, long)]
    pub palette_size: Option<usize>,

    /// Compare normalization methods and use the best-scoring one
    #[arg(short, long)]
    pub recommend: bool,

    /// Output path prefix (defaults to `<a>_<b>` next to the first image)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Edge length in pixels of each rendered tile
    #[arg(short, long, default_value_t = DEFAULT_TILE_RENDER_SIZE)]
    pub tile_size: u32,

    /// Downscale inputs so each source tile is at most this many pixels wide
    #[arg(long, default_value_t = DEFAULT_MAX_TILE_PIXELS)]
    pub max_tile_pixels: u32,

    /// Also render a shuffled starting arrangement
    #[arg(long)]
    pub shuffle: bool,

    /// Random seed for the shuffled arrangement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Label for the first image (defaults to its file stem)
    #[arg(long)]
    pub label_a: Option<String>,

    /// Label for the second image (defaults to its file stem)
    #[arg(long)]
    pub label_b: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Normalization requested on the command line
    pub const fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            method: self.method,
            palette_size: self.palette_size,
        }
    }

    /// Largest input dimension before downscaling
    pub const fn max_dimension(&self) -> u32 {
        (self.grid_size as u32).saturating_mul(self.max_tile_pixels)
    }

    /// Label for image A
    pub fn label_a(&self) -> String {
        self.label_a
            .clone()
            .unwrap_or_else(|| file_stem(&self.image_a))
    }

    /// Label for image B
    pub fn label_b(&self) -> String {
        self.label_b
            .clone()
            .unwrap_or_else(|| file_stem(&self.image_b))
    }

    /// Prefix that output file suffixes are appended to
    pub fn output_prefix(&self) -> PathBuf {
        if let Some(ref output) = self.output {
            return output.clone();
        }
        let name = format!("{}_{}", file_stem(&self.image_a), file_stem(&self.image_b));
        self.image_a
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_owned();
    name.push(suffix);
    name.push(".png");
    PathBuf::from(name)
}

/// What a processing run produced
#[derive(Debug, Clone)]
pub struct ProcessSummary {
    /// The generated puzzle
    pub puzzle: PuzzleDefinition,
    /// Normalization actually applied
    pub method: NormalizationMethod,
    /// Mean similarity of the matched pairs
    pub total_similarity: f64,
    /// Strategy comparison, when one was requested
    pub quality: Option<QualityReport>,
    /// Files written, in order
    pub outputs: Vec<PathBuf>,
}

/// Orchestrates loading, matching and rendering for one image pair
pub struct PuzzleProcessor {
    cli: Cli,
    progress: ProgressManager,
}

impl PuzzleProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };
        Self { cli, progress }
    }

    /// Run the full pipeline and write the renders
    ///
    /// # Errors
    ///
    /// Returns an error if an image can't be loaded, the grid doesn't fit the
    /// images, or a render can't be written
    pub fn process(&mut self) -> Result<ProcessSummary> {
        let result = self.run();
        match result {
            Ok(summary) => {
                self.progress.finish();
                self.report(&summary);
                Ok(summary)
            }
            Err(error) => {
                self.progress.abandon();
                Err(error)
            }
        }
    }

    fn run(&mut self) -> Result<ProcessSummary> {
        self.progress.start_stage("loading images");
        let max_dimension = Some(self.cli.max_dimension());
        let image_a = load_pixel_image(&self.cli.image_a, max_dimension)?;
        let image_b = load_pixel_image(&self.cli.image_b, max_dimension)?;

        let matcher = ImageMatcher::new(MatcherConfig::new(self.cli.grid_size))?;

        self.progress.start_stage("comparing normalizations");
        let mut options = self.cli.normalization();
        let quality = if self.cli.recommend {
            let report = matcher.analyze_quality(&image_a, &image_b, options.palette_size)?;
            options.method = report.recommended_method;
            Some(report)
        } else {
            None
        };

        self.progress.start_stage("matching tiles");
        let result = matcher.match_with_normalization(&image_a, &image_b, &options)?;

        self.progress.start_stage("building puzzle");
        let label_a = self.cli.label_a();
        let label_b = self.cli.label_b();
        let prefix = self.cli.output_prefix();
        let id = file_stem(&prefix);
        let puzzle = create_puzzle_from_match(&result, &label_a, &label_b, &id);
        puzzle.validate()?;

        self.progress.start_stage("rendering");
        let mut outputs = Vec::new();
        let mut renders = vec![
            (SOLUTION_A_SUFFIX, puzzle.solution_a.clone()),
            (SOLUTION_B_SUFFIX, puzzle.solution_b.clone()),
        ];
        if self.cli.shuffle {
            renders.push((SHUFFLED_SUFFIX, shuffle_arrangement(&puzzle, self.cli.seed)));
        }
        for (suffix, arrangement) in renders {
            let path = with_suffix(&prefix, suffix);
            export_arrangement_as_png(&puzzle, &arrangement, self.cli.tile_size, &path)?;
            outputs.push(path);
        }

        Ok(ProcessSummary {
            puzzle,
            method: options.method,
            total_similarity: result.total_similarity,
            quality,
            outputs,
        })
    }

    // Allow print for the user-facing summary
    #[allow(clippy::print_stderr)]
    fn report(&self, summary: &ProcessSummary) {
        if self.cli.quiet {
            return;
        }

        if let Some(quality) = summary.quality {
            eprintln!(
                "Similarity: none {:.3}, histogram {:.3}, palette {:.3} (recommended: {})",
                quality.raw_similarity,
                quality.histogram_similarity,
                quality.palette_similarity,
                quality.recommended_method
            );
        }
        eprintln!(
            "{}: {} tiles, method {}, mean similarity {:.3}",
            summary.puzzle.name,
            summary.puzzle.tiles.len(),
            summary.method,
            summary.total_similarity
        );
        for path in &summary.outputs {
            eprintln!("Wrote {}", path.display());
        }
    }
}

//! Stage-by-stage progress display for the puzzle pipeline

use crate::io::configuration::{PIPELINE_STAGES, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks the pipeline through its stages on one progress bar
///
/// A hidden manager accepts the same calls but draws nothing, so callers don't
/// need to branch on quiet mode.
pub struct ProgressManager {
    bar: ProgressBar,
    stage: Option<&'static str>,
    completed: u64,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a visible manager for `PIPELINE_STAGES` stages
    pub fn new() -> Self {
        let bar = ProgressBar::new(PIPELINE_STAGES);
        bar.set_style(STAGE_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self {
            bar,
            stage: None,
            completed: 0,
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            stage: None,
            completed: 0,
        }
    }

    /// Begin a named stage, completing the previous one
    pub fn start_stage(&mut self, name: &'static str) {
        if self.stage.is_some() {
            self.complete_stage();
        }
        self.stage = Some(name);
        self.bar.set_message(name);
    }

    /// Mark the current stage as done
    pub fn complete_stage(&mut self) {
        if self.stage.take().is_some() {
            self.completed += 1;
            self.bar.set_position(self.completed);
        }
    }

    /// Name of the stage in progress
    pub const fn current_stage(&self) -> Option<&'static str> {
        self.stage
    }

    /// Number of completed stages
    pub const fn completed_stages(&self) -> u64 {
        self.completed
    }

    /// Complete any open stage and close the display
    pub fn finish(&mut self) {
        self.complete_stage();
        self.bar.finish_with_message("done");
    }

    /// Close the display after a failure in the current stage
    pub fn abandon(&mut self) {
        let message = self
            .stage
            .map_or_else(|| "failed".to_string(), |stage| format!("failed during {stage}"));
        self.bar.abandon_with_message(message);
    }
}

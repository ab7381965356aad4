/// Command-line interface and pipeline orchestration
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG loading, tile rendering and arrangement export
pub mod image;
/// Stage progress display
pub mod progress;

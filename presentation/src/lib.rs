//! Presentation layer for feedback-triage
//!
//! This crate contains CLI definitions, output formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, HistoryArgs, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, OutputFormatter, formatter_for};
pub use output::history::{render_history, render_stats};
pub use progress::reporter::{ProgressMode, ProgressReporter, SimpleProgress};

//! Presentation layer for votegraph
//!
//! This crate contains CLI definitions, the run summary formatter
//! and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, FormatArg, OrientationArg};
pub use config::{DisplayConfig, ProgressMode};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};

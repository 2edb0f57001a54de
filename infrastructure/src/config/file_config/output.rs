//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use votegraph_domain::{Orientation, OutputFormat};

// Re-export domain value objects for convenience
pub use votegraph_domain::Orientation as FileOrientation;
pub use votegraph_domain::OutputFormat as FileOutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory the artifacts are written to
    pub directory: PathBuf,
    /// Artifact serialization (uses domain type)
    pub format: OutputFormat,
    /// Graph orientation (uses domain type)
    pub orientation: Orientation,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            format: OutputFormat::default(),
            orientation: Orientation::default(),
            color: true,
        }
    }
}

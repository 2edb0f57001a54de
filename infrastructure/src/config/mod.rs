//! Configuration file loading for votegraph
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VOTEGRAPH_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./votegraph.toml` or `./.votegraph.toml`
//! 4. Global: `$XDG_CONFIG_HOME/votegraph/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileApiConfig, FileConfig, FileOrientation,
    FileOutputConfig, FileOutputFormat, FileTabularConfig, Severity, parse_delimiter,
};
pub use loader::{ConfigLoader, ENV_PREFIX};

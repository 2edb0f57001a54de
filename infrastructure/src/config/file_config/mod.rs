//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod api;
mod output;
mod tabular;

pub use api::FileApiConfig;
pub use output::{FileOrientation, FileOutputConfig, FileOutputFormat};
pub use tabular::{FileTabularConfig, parse_delimiter};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote open-data API settings
    pub api: FileApiConfig,
    /// Tabular export settings
    pub tabular: FileTabularConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// A single problem found in a configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("{field} must be greater than 0")]
    Zero { field: &'static str },

    #[error("{field} is {value}, above the maximum of {max}")]
    TooLarge {
        field: &'static str,
        max: u64,
        value: u64,
    },

    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },

    #[error("tabular.delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(String),

    #[error("api.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),
}

/// How serious a [`ConfigIssue`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work.
    Error,
    /// The configuration works but a value was adjusted.
    Warning,
}

/// A detected issue in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    pub fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.api.validate();
        issues.extend(self.tabular.validate());
        issues
    }
}

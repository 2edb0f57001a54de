//! Infrastructure layer for votegraph
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod camara;
pub mod config;
pub mod output;
pub mod tabular;

// Re-export commonly used types
pub use camara::{CamaraApiClient, CamaraClientConfig};
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileApiConfig, FileConfig,
    FileOutputConfig, FileOutputFormat, FileTabularConfig, Severity,
};
pub use output::FileGraphEmitter;
pub use tabular::{CsvLayout, CsvTabularReader};

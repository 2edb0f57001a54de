//! Graph emitter port
//!
//! Serializes a finalized [`AgreementGraph`] into its two artifacts. The
//! emitter only formats; ordering is already fixed by the aggregator.

use std::path::PathBuf;
use thiserror::Error;
use votegraph_domain::{AgreementGraph, OutputFormat};

/// Errors while writing output artifacts
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Could not serialize graph: {0}")]
    Serialize(String),

    #[error("Could not write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Where and how to write the artifacts of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub directory: PathBuf,
    /// Prefix shared by both artifacts, e.g. `votacaoVotos-2023-01-01`.
    pub base_name: String,
    pub format: OutputFormat,
}

impl OutputTarget {
    pub fn new(directory: impl Into<PathBuf>, base_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            base_name: base_name.into(),
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// Paths written by an emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedArtifacts {
    pub graph: PathBuf,
    pub participation: PathBuf,
}

/// Writes the graph record and the participation record.
///
/// Implementations must leave no artifact behind when they fail.
pub trait GraphEmitter: Send + Sync {
    fn emit(
        &self,
        graph: &AgreementGraph,
        target: &OutputTarget,
    ) -> Result<EmittedArtifacts, EmitError>;
}

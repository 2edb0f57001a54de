//! Build Agreement Graph use case
//!
//! Orchestrates one run: load the complete vote set from a
//! [`VoteRecordSource`], group it by roll-call and choice, fold every group
//! into an [`AgreementAggregator`], then hand the finalized graph to a
//! [`GraphEmitter`].
//!
//! A run is all-or-nothing. Any source failure returns before aggregation
//! starts, and nothing is emitted unless the whole graph was built.

use crate::ports::graph_emitter::{EmitError, EmittedArtifacts, GraphEmitter, OutputTarget};
use crate::ports::progress::{BuildProgressNotifier, NoProgress, Stage};
use crate::ports::vote_source::{SourceError, VoteRecordSource};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use votegraph_domain::{
    AgreementAggregator, AgreementGraph, DataQualityReport, Orientation, RollCallGrouper,
};

/// Errors that can occur while building a graph
#[derive(Error, Debug)]
pub enum BuildGraphError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl BuildGraphError {
    /// Name of the failing stage: `discovery`, `fetch`, `parse` or `emit`.
    pub fn stage(&self) -> &'static str {
        match self {
            BuildGraphError::Source(e) => e.stage(),
            BuildGraphError::Emit(_) => "emit",
        }
    }
}

/// Input for the [`BuildGraphUseCase`]
#[derive(Debug, Clone)]
pub struct BuildGraphInput {
    pub orientation: Orientation,
    pub target: OutputTarget,
}

impl BuildGraphInput {
    pub fn new(orientation: Orientation, target: OutputTarget) -> Self {
        Self {
            orientation,
            target,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct BuildGraphOutput {
    /// Description of the vote source the graph was built from
    pub source: String,
    pub graph: AgreementGraph,
    pub quality: DataQualityReport,
    pub artifacts: EmittedArtifacts,
}

/// Use case for building and emitting an agreement graph
pub struct BuildGraphUseCase {
    emitter: Arc<dyn GraphEmitter>,
}

impl BuildGraphUseCase {
    pub fn new(emitter: Arc<dyn GraphEmitter>) -> Self {
        Self { emitter }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        source: &dyn VoteRecordSource,
        input: BuildGraphInput,
    ) -> Result<BuildGraphOutput, BuildGraphError> {
        self.execute_with_progress(source, input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        source: &dyn VoteRecordSource,
        input: BuildGraphInput,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<BuildGraphOutput, BuildGraphError> {
        let description = source.describe();
        info!(
            "Building {} agreement graph from {}",
            input.orientation, description
        );

        let (graph, quality) = Self::build(source, input.orientation, progress).await?;

        progress.on_stage_start(Stage::Emission, Some(2));
        let artifacts = self.emitter.emit(&graph, &input.target)?;
        progress.on_step(Stage::Emission, &artifacts.graph.display().to_string());
        progress.on_step(Stage::Emission, &artifacts.participation.display().to_string());
        progress.on_stage_complete(Stage::Emission);

        info!(
            "Wrote {} and {}",
            artifacts.graph.display(),
            artifacts.participation.display()
        );

        Ok(BuildGraphOutput {
            source: description,
            graph,
            quality,
            artifacts,
        })
    }

    /// Load, group and aggregate without emitting anything.
    pub async fn build(
        source: &dyn VoteRecordSource,
        orientation: Orientation,
        progress: &dyn BuildProgressNotifier,
    ) -> Result<(AgreementGraph, DataQualityReport), SourceError> {
        let stream = source.load(progress).await?;
        let mut quality = stream.quality;

        progress.on_stage_start(Stage::Aggregation, None);

        let mut grouper = RollCallGrouper::new();
        for record in stream.records {
            grouper.push(record);
        }
        quality.record_duplicates(grouper.duplicate_votes());
        let roll_calls = grouper.finish();

        let mut aggregator = AgreementAggregator::new(orientation);
        for roll_call in &roll_calls {
            aggregator.fold(roll_call);
        }
        let graph = aggregator.finish();

        progress.on_step(
            Stage::Aggregation,
            &format!("{} roll-calls", graph.roll_call_count),
        );
        progress.on_stage_complete(Stage::Aggregation);

        info!(
            "Aggregated {} roll-call(s): {} node(s), {} edge(s)",
            graph.roll_call_count,
            graph.node_count(),
            graph.edge_count()
        );
        if graph.is_empty() {
            warn!("No counted votes found; the graph is empty");
        }
        if !quality.is_clean() {
            warn!(
                "Data quality: {} excluded vote(s), {} duplicate(s), {} unnamed, {} name collision(s)",
                quality.excluded_total(),
                quality.duplicate_votes,
                quality.unnamed_voters,
                quality.name_collisions.len()
            );
        }

        Ok((graph, quality))
    }
}

//! Progress notification port
//!
//! Defines the interface for reporting progress while a graph is built.

use std::fmt;

/// Stages of a run, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Reading the total page count from the first listing response
    Discovery,
    /// Walking listing pages 1..=N
    Listing,
    /// Fetching the votes of each roll-call
    Votes,
    /// Reading a tabular export
    Loading,
    /// Grouping and pair counting
    Aggregation,
    /// Writing artifacts
    Emission,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Discovery => "discovery",
            Stage::Listing => "listing",
            Stage::Votes => "votes",
            Stage::Loading => "loading",
            Stage::Aggregation => "aggregation",
            Stage::Emission => "emission",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait BuildProgressNotifier: Send + Sync {
    /// Called when a stage starts. `total` is the number of steps if known.
    fn on_stage_start(&self, stage: Stage, total: Option<usize>);

    /// Called when one step of a stage completes
    fn on_step(&self, stage: Stage, label: &str);

    /// Called when a stage completes
    fn on_stage_complete(&self, stage: Stage);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl BuildProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage, _total: Option<usize>) {}
    fn on_step(&self, _stage: Stage, _label: &str) {}
    fn on_stage_complete(&self, _stage: Stage) {}
}

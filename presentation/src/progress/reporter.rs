//! Progress reporting for graph builds

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use votegraph_application::{BuildProgressNotifier, Stage};

/// Reports progress with one indicatif bar per stage
pub struct ProgressReporter {
    multi: MultiProgress,
    stage_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            stage_bar: Mutex::new(None),
        }
    }

    fn stage_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub(crate) fn stage_display_name(stage: Stage) -> &'static str {
        match stage {
            Stage::Discovery => "Discovering pages",
            Stage::Listing => "Listing roll-calls",
            Stage::Votes => "Fetching votes",
            Stage::Loading => "Reading export",
            Stage::Aggregation => "Aggregating",
            Stage::Emission => "Writing files",
        }
    }

    /// Drop a bar left open by a failed stage.
    pub fn abandon(&self) {
        if let Ok(mut bar) = self.stage_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.abandon_with_message("failed".red().to_string());
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildProgressNotifier for ProgressReporter {
    fn on_stage_start(&self, stage: Stage, total: Option<usize>) {
        let pb = match total {
            Some(total) => {
                let pb = self.multi.add(ProgressBar::new(total as u64));
                pb.set_style(Self::stage_style());
                pb
            }
            None => {
                let pb = self.multi.add(ProgressBar::new_spinner());
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            }
        };
        pb.set_prefix(Self::stage_display_name(stage));
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.stage_bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_step(&self, _stage: Stage, label: &str) {
        if let Ok(bar) = self.stage_bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(label.to_string());
            pb.inc(1);
        }
    }

    fn on_stage_complete(&self, stage: Stage) {
        if let Ok(mut bar) = self.stage_bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} done", stage.as_str().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl BuildProgressNotifier for SimpleProgress {
    fn on_stage_start(&self, stage: Stage, total: Option<usize>) {
        let name = ProgressReporter::stage_display_name(stage);
        match total {
            Some(total) => eprintln!("{} {} ({} steps)", "->".cyan(), name.bold(), total),
            None => eprintln!("{} {}", "->".cyan(), name.bold()),
        }
    }

    fn on_step(&self, stage: Stage, label: &str) {
        if stage != Stage::Votes {
            eprintln!("  {} {}", "v".green(), label);
        }
    }

    fn on_stage_complete(&self, _stage: Stage) {}
}

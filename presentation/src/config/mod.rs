//! Presentation-level configuration
//!
//! How a run is displayed: progress style, colors and summary format.

/// How stage progress is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    /// indicatif bars (interactive terminals)
    Bars,
    /// One plain line per stage and step
    Plain,
    /// Nothing
    Off,
}

/// Display configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub progress: ProgressMode,
    /// Enable colored terminal output
    pub color: bool,
    /// Print the summary as JSON instead of text
    pub json_summary: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            progress: ProgressMode::Bars,
            color: true,
            json_summary: false,
        }
    }
}

impl DisplayConfig {
    /// Resolve display settings from flags, the config file and the terminal.
    pub fn resolve(
        quiet: bool,
        no_color: bool,
        json_summary: bool,
        config_color: bool,
        interactive: bool,
    ) -> Self {
        let progress = if quiet || json_summary {
            ProgressMode::Off
        } else if interactive {
            ProgressMode::Bars
        } else {
            ProgressMode::Plain
        };
        Self {
            progress,
            color: config_color && !no_color && interactive,
            json_summary,
        }
    }
}

//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use votegraph_domain::{Orientation, OutputFormat};

/// Graph orientation as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrientationArg {
    /// Every agreeing pair listed in both directions
    #[value(alias = "d")]
    Directed,
    /// One edge per agreeing pair
    #[value(alias = "u")]
    Undirected,
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Directed => Orientation::Directed,
            OrientationArg::Undirected => Orientation::Undirected,
        }
    }
}

/// Artifact format as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `"<nodes> <edges>"` header, then one `"<a> <b> <weight>"` line per edge
    Text,
    /// Pretty-printed JSON documents
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Where the votes come from
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch roll-calls and votes from the Câmara open-data API
    Api {
        /// First day of the range (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        start: String,

        /// Last day of the range (YYYY-MM-DD); open-ended if omitted
        #[arg(long, value_name = "DATE")]
        end: Option<String>,

        /// Roll-call vote requests in flight at once (1 = sequential)
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,
    },

    /// Read a pre-exported vote table (e.g. votacoesVotos-2023.csv)
    File {
        /// Path to the export
        path: PathBuf,

        /// Field separator (single character, default ';')
        #[arg(long, value_name = "CHAR")]
        delimiter: Option<String>,
    },
}

/// CLI arguments for votegraph
#[derive(Parser, Debug)]
#[command(name = "votegraph")]
#[command(author, version, about = "Legislator agreement graphs from roll-call votes")]
#[command(long_about = r#"
votegraph builds a weighted agreement graph among legislators: two
legislators share an edge whose weight is the number of roll-calls on which
both cast the same vote (Yes, No or Abstain). It also counts how many
roll-calls each legislator voted on.

Two files are written:
  <base>-<orientation>-graph.<ext>          node/edge counts and the edge list
  <base>-<orientation>-participation.<ext>  roll-calls voted per legislator

Configuration files are loaded from (in priority order):
1. VOTEGRAPH_* environment variables (e.g. VOTEGRAPH_API__PAGE_SIZE=100)
2. --config <path>          Explicit config file
3. ./votegraph.toml         Project-level config
4. ~/.config/votegraph/config.toml   Global config

Example:
  votegraph api --start 2023-01-01
  votegraph -d api --start 2023-01-01 --end 2023-06-30 --concurrency 4
  votegraph --format json file votacoesVotos-2023.csv
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Graph orientation
    #[arg(long, value_enum, global = true)]
    pub orientation: Option<OrientationArg>,

    /// Shorthand for --orientation directed
    #[arg(short = 'd', long, global = true, conflicts_with = "orientation")]
    pub directed: bool,

    /// Artifact format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Directory for the output files
    #[arg(short, long, value_name = "DIR", global = true)]
    pub output_dir: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Orientation requested on the command line, if any.
    pub fn orientation_override(&self) -> Option<Orientation> {
        if self.directed {
            Some(Orientation::Directed)
        } else {
            self.orientation.map(Into::into)
        }
    }

    pub fn format_override(&self) -> Option<OutputFormat> {
        self.format.map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_command() {
        let cli = Cli::try_parse_from([
            "votegraph",
            "api",
            "--start",
            "2023-01-01",
            "--concurrency",
            "4",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Some(Command::Api {
                start: "2023-01-01".to_string(),
                end: None,
                concurrency: Some(4),
            })
        );
        assert_eq!(cli.orientation_override(), None);
    }

    #[test]
    fn test_file_command_with_global_flags_after() {
        let cli = Cli::try_parse_from([
            "votegraph",
            "file",
            "votes.csv",
            "--delimiter",
            ",",
            "-d",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(matches!(
            cli.command,
            Some(Command::File { ref path, .. }) if path == &PathBuf::from("votes.csv")
        ));
        assert_eq!(cli.orientation_override(), Some(Orientation::Directed));
        assert_eq!(cli.format_override(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_orientation_alias() {
        let cli =
            Cli::try_parse_from(["votegraph", "--orientation", "u", "file", "v.csv"]).unwrap();
        assert_eq!(cli.orientation_override(), Some(Orientation::Undirected));
    }

    #[test]
    fn test_directed_conflicts_with_orientation() {
        let result = Cli::try_parse_from([
            "votegraph",
            "-d",
            "--orientation",
            "undirected",
            "file",
            "v.csv",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["votegraph", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["votegraph", "-vv", "file", "v.csv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_api_requires_start() {
        assert!(Cli::try_parse_from(["votegraph", "api"]).is_err());
    }
}

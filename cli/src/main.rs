//! CLI entrypoint for votegraph
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use votegraph_application::{
    BuildGraphError, BuildGraphInput, BuildGraphOutput, BuildGraphUseCase, OutputTarget,
    RemoteVoteSource, TabularVoteSource, VoteRecordSource,
};
use votegraph_domain::ListingQuery;
use votegraph_infrastructure::{
    CamaraApiClient, ConfigLoader, CsvTabularReader, FileConfig, FileGraphEmitter, Severity,
};
use votegraph_presentation::{
    Cli, Command, ConsoleFormatter, DisplayConfig, ProgressMode, ProgressReporter, SimpleProgress,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error("setup", &format!("{:#}", e)));
            return ExitCode::FAILURE;
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let stage = e
                .downcast_ref::<BuildGraphError>()
                .map(BuildGraphError::stage)
                .unwrap_or("setup");
            eprintln!("{}", ConsoleFormatter::format_error(stage, &format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level, unless `RUST_LOG` is set.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder
                .with_ansi(false)
                .with_writer(std::io::stderr.and(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("no vote source given; use `votegraph api --start <DATE>` or `votegraph file <PATH>`");
    };

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    check_config(&config)?;

    let display = DisplayConfig::resolve(
        cli.quiet,
        cli.no_color,
        cli.json,
        config.output.color,
        std::io::stderr().is_terminal(),
    );
    if !display.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let (source, base_name) = build_source(&command, &config)?;
    let use_case = BuildGraphUseCase::new(Arc::new(FileGraphEmitter::new()));
    let input = BuildGraphInput::new(
        config.output.orientation,
        OutputTarget::new(config.output.directory.clone(), base_name)
            .with_format(config.output.format),
    );

    info!("Starting votegraph ({})", source.describe());

    let output = execute(&use_case, source.as_ref(), input, display.progress).await?;

    if display.json_summary {
        println!("{}", ConsoleFormatter::format_json(&output));
    } else {
        println!("{}", ConsoleFormatter::format(&output));
    }

    Ok(())
}

/// Command-line flags take precedence over every configuration layer.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(orientation) = cli.orientation_override() {
        config.output.orientation = orientation;
    }
    if let Some(format) = cli.format_override() {
        config.output.format = format;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if let Some(Command::Api {
        concurrency: Some(n),
        ..
    }) = &cli.command
    {
        config.api.max_concurrent_requests = *n;
    }
    if let Some(Command::File {
        delimiter: Some(d), ..
    }) = &cli.command
    {
        config.tabular.delimiter = d.clone();
    }
}

fn check_config(config: &FileConfig) -> Result<()> {
    let mut errors = Vec::new();
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => warn!("config: {}", issue),
            Severity::Error => errors.push(issue.to_string()),
        }
    }
    if !errors.is_empty() {
        bail!("invalid configuration: {}", errors.join("; "));
    }
    Ok(())
}

fn build_source(
    command: &Command,
    config: &FileConfig,
) -> Result<(Box<dyn VoteRecordSource>, String)> {
    match command {
        Command::Api { start, end, .. } => {
            let query = ListingQuery::parse(start, end.as_deref())?;
            let client = CamaraApiClient::new(config.api.to_client_config())
                .context("cannot create HTTP client")?;
            let base_name = format!("votacaoVotos-{}", query.label());
            let source = RemoteVoteSource::new(Arc::new(client), query)
                .with_params(config.api.to_source_params());
            Ok((Box::new(source), base_name))
        }
        Command::File { path, .. } => {
            let reader = CsvTabularReader::new(config.tabular.to_layout()?);
            let source = TabularVoteSource::new(Arc::new(reader), path.clone());
            Ok((Box::new(source), file_base_name(path)))
        }
    }
}

/// Artifacts of a tabular run are named after the input file.
fn file_base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| "votes".to_string())
}

async fn execute(
    use_case: &BuildGraphUseCase,
    source: &dyn VoteRecordSource,
    input: BuildGraphInput,
    progress: ProgressMode,
) -> Result<BuildGraphOutput, BuildGraphError> {
    match progress {
        ProgressMode::Bars => {
            let reporter = ProgressReporter::new();
            let result = use_case
                .execute_with_progress(source, input, &reporter)
                .await;
            if result.is_err() {
                reporter.abandon();
            }
            result
        }
        ProgressMode::Plain => {
            use_case
                .execute_with_progress(source, input, &SimpleProgress)
                .await
        }
        ProgressMode::Off => use_case.execute(source, input).await,
    }
}

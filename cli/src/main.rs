//! CLI entrypoint for feedback-triage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use triage_application::{
    CoordinatorError, QueryHistoryUseCase, TriageFeedbackUseCase, TriageRecorder,
};
use triage_domain::{Category, HistoryQuery, OutputFormat, UrgencyScore};
use triage_infrastructure::{
    ConfigLoader, FileConfig, JsonlTriageHistory, JsonlTriageRecorder, build_classifier,
};
use triage_presentation::{
    Cli, Command, ConsoleFormatter, HistoryArgs, OutputFormatter, ProgressMode, formatter_for,
    render_history, render_stats,
};

/// Rejected input (empty, too short or long, unknown category).
const EXIT_INVALID_INPUT: u8 = 2;
/// The provider call failed or timed out.
const EXIT_UPSTREAM_UNAVAILABLE: u8 = 3;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive until exit so buffered file logs are flushed
    let _log_guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter());

    let Some(path) = log_file else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("--log-file {} has no file name", path.display()))?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("could not create log directory {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(filter());

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);
    check_config(&config)?;

    ConsoleFormatter::set_color_enabled(config.output.color && std::io::stdout().is_terminal());

    match &cli.command {
        Some(Command::History(args)) => return show_history(&config, &cli, args),
        Some(Command::Stats) => return show_stats(&config, &cli),
        None => {}
    }

    let raw_text = match &cli.text {
        Some(text) => text.clone(),
        None => read_stdin()?,
    };

    let submission = match config
        .triage
        .to_validator()
        .validate(&raw_text, cli.category.as_deref())
    {
        Ok(submission) => submission,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    // === Dependency Injection ===
    let params = config.triage.to_params();
    let classifier = build_classifier(&config.providers.to_provider_config(), params.timeout)?;

    let progress = ProgressMode::detect(cli.quiet, std::io::stderr().is_terminal()).notifier();

    let mut use_case = TriageFeedbackUseCase::new(classifier, params).with_progress(progress);
    if let Some(recorder) = history_recorder(&config, cli.no_history) {
        use_case = use_case.with_recorder(recorder);
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, cancelling triage");
            ctrl_c.cancel();
        }
    });

    info!(provider = use_case.provider_name(), "Starting feedback triage");
    let result = match use_case.execute_with_cancel(&submission, &cancel).await {
        Ok(result) => result,
        Err(e @ CoordinatorError::UpstreamUnavailable { .. }) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e.user_message());
            eprintln!("  {}", e);
            return Ok(ExitCode::from(EXIT_UPSTREAM_UNAVAILABLE));
        }
        Err(e @ CoordinatorError::Cancelled) => {
            eprintln!("{}", e.user_message());
            return Ok(ExitCode::FAILURE);
        }
    };

    println!(
        "{}",
        formatter_for(output_format(&config, &cli)).format(submission.text(), &result)
    );

    Ok(ExitCode::SUCCESS)
}

fn output_format(config: &FileConfig, cli: &Cli) -> OutputFormat {
    cli.output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default()
}

fn history_use_case(config: &FileConfig) -> QueryHistoryUseCase {
    let path = config.history.resolved_path();
    debug!("Reading triage history from {}", path.display());
    QueryHistoryUseCase::new(Arc::new(JsonlTriageHistory::new(path)))
}

fn show_history(config: &FileConfig, cli: &Cli, args: &HistoryArgs) -> Result<ExitCode> {
    let category = match args.category.as_deref().map(str::parse::<Category>).transpose() {
        Ok(category) => category,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };
    let query = HistoryQuery {
        limit: args.limit,
        offset: args.offset,
        category,
        urgency: args.urgency.and_then(UrgencyScore::new),
    };

    let page = history_use_case(config).page(&query)?;
    print!("{}", with_newline(render_history(&page, output_format(config, cli))));
    Ok(ExitCode::SUCCESS)
}

fn show_stats(config: &FileConfig, cli: &Cli) -> Result<ExitCode> {
    let stats = history_use_case(config).stats()?;
    print!("{}", with_newline(render_stats(&stats, output_format(config, cli))));
    Ok(ExitCode::SUCCESS)
}

/// Text renderings end in a newline already; JSON does not.
fn with_newline(mut rendered: String) -> String {
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    rendered
}

/// CLI flags take precedence over every configuration source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(provider) = &cli.provider {
        config.providers.default = Some(provider.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.triage.timeout_seconds = timeout;
    }
}

fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_fatal()) {
        warn!("{}", issue.message);
    }

    let fatal: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_fatal())
        .map(|i| i.message.as_str())
        .collect();
    if !fatal.is_empty() {
        bail!("invalid configuration:\n  {}", fatal.join("\n  "));
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    if std::io::stdin().is_terminal() {
        eprintln!("Enter feedback, then press Ctrl-D:");
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("could not read feedback from stdin")?;
    Ok(text)
}

fn history_recorder(config: &FileConfig, disabled: bool) -> Option<Arc<dyn TriageRecorder>> {
    if disabled || !config.history.enabled {
        return None;
    }
    let path = config.history.resolved_path();
    match JsonlTriageRecorder::new(&path) {
        Some(recorder) => {
            debug!("Recording triage history to {}", recorder.path().display());
            Some(Arc::new(recorder))
        }
        None => {
            warn!("Triage history disabled: could not open {}", path.display());
            None
        }
    }
}

//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for triage results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON response (`feedback_text`, `category`, `urgency_score`)
    Json,
}

impl From<OutputFormat> for triage_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => triage_domain::OutputFormat::Text,
            OutputFormat::Json => triage_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for feedback-triage
#[derive(Parser, Debug)]
#[command(name = "feedback-triage")]
#[command(author, version, about = "Classify user feedback by category and urgency with an LLM")]
#[command(long_about = r#"
Feedback Triage sends a piece of user feedback to an LLM provider and reports
its category (Bug Report, Feature Request, Praise, General Inquiry, Complaint)
and urgency on a 1-5 scale.

Supported providers: openai, anthropic, azure_openai, groq.
API keys are read from OPENAI_API_KEY, ANTHROPIC_API_KEY, AZURE_OPENAI_API_KEY
or GROQ_API_KEY. LLM_API_KEY and LLM_MODEL apply to openai and anthropic;
GROQ_MODEL applies to groq.

Configuration files are loaded from (in priority order):
1. TRIAGE_* environment variables
2. --config <path>     Explicit config file
3. ./triage.toml       Project-level config
4. ~/.config/feedback-triage/config.toml   Global config

Example:
  feedback-triage "The app crashes when I try to upload files"
  feedback-triage --provider groq -o json "Please add a dark mode"
  echo "Support never replied" | feedback-triage --category Complaint
  feedback-triage history --category "Bug Report" --limit 5
  feedback-triage stats -o json
"#)]
pub struct Cli {
    /// Browse recorded triages instead of classifying new feedback
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Feedback text (read from stdin when omitted)
    pub text: Option<String>,

    /// Pin the category and only ask for urgency
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Provider to use (overrides providers.default)
    #[arg(short, long, value_name = "NAME")]
    pub provider: Option<String>,

    /// Provider call timeout in seconds (overrides triage.timeout_seconds)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Do not append the result to the triage history file
    #[arg(long)]
    pub no_history: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Read-only views over the triage history file
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List recorded triages, newest first
    History(HistoryArgs),
    /// Summarize recorded triages by category and urgency
    Stats,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct HistoryArgs {
    /// Maximum number of entries to show
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,

    /// Number of matching entries to skip
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Only show this category
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only show this urgency score
    #[arg(short, long, value_name = "1-5", value_parser = clap::value_parser!(u8).range(1..=5))]
    pub urgency: Option<u8>,
}

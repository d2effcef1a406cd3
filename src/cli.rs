use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadmap")]
#[command(about = "Lead conversion likelihood analyzer for CRM exports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score leads for conversion likelihood
    Analyze {
        /// Leads CSV to analyze
        leads: PathBuf,

        /// Output format (defaults to the config file's choice, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./leadmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Scorers to run (defaults to all)
        #[arg(long, value_enum, value_delimiter = ',')]
        scorers: Option<Vec<ScorerKind>>,

        /// Rows in the head-of-table summary
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Disable parallel row scoring
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of threads to use (0 = all available cores)
        #[arg(long, default_value = "0")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Score chat messages and classify potential leads
    Sentiment {
        /// Messages CSV to analyze
        messages: PathBuf,

        /// Output format (defaults to the config file's choice, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./leadmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Classification policy override
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Raw-polarity threshold override
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,

        /// Rows in the head-of-table summary
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Disable parallel message scoring
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of threads to use (0 = all available cores)
        #[arg(long, default_value = "0")]
        jobs: usize,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Append a chat conversation to the history and score its potential
    Record {
        /// Messages of the conversation, in order
        #[arg(required = true)]
        messages: Vec<String>,

        /// History CSV accumulating recorded conversations
        #[arg(long, default_value = "chat_history.csv")]
        history: PathBuf,

        /// Configuration file (defaults to ./leadmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Raw-polarity threshold override
        #[arg(long, allow_negative_numbers = true)]
        threshold: Option<f64>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Terminal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScorerKind {
    Geo,
    Lifecycle,
    Engagement,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    Raw,
    Normalized,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Csv => crate::io::output::OutputFormat::Csv,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

impl From<PolicyArg> for crate::config::SentimentPolicy {
    fn from(p: PolicyArg) -> Self {
        match p {
            PolicyArg::Raw => crate::config::SentimentPolicy::Raw,
            PolicyArg::Normalized => crate::config::SentimentPolicy::Normalized,
        }
    }
}

/// Resolve the `--scorers` list into a selection; no list means all.
pub fn resolve_selection(scorers: &Option<Vec<ScorerKind>>) -> crate::scoring::ScorerSelection {
    match scorers {
        None => crate::scoring::ScorerSelection::all(),
        Some(kinds) => crate::scoring::ScorerSelection {
            geographic: kinds.contains(&ScorerKind::Geo),
            lifecycle: kinds.contains(&ScorerKind::Lifecycle),
            engagement: kinds.contains(&ScorerKind::Engagement),
        },
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

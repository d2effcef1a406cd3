use anyhow::Result;
use clap::Parser;
use leadmap::cli::{Cli, Commands};
use leadmap::commands;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            leads,
            format,
            output,
            config,
            scorers,
            top,
            no_parallel,
            jobs,
            verbosity,
        } => commands::handle_analyze(commands::AnalyzeConfig {
            leads,
            format,
            output,
            config,
            selection: leadmap::cli::resolve_selection(&scorers),
            top,
            parallel: !no_parallel,
            jobs,
            verbosity,
        }),
        Commands::Sentiment {
            messages,
            format,
            output,
            config,
            policy,
            threshold,
            top,
            no_parallel,
            jobs,
            verbosity,
        } => commands::handle_sentiment(commands::SentimentRunConfig {
            messages,
            format,
            output,
            config,
            policy,
            threshold,
            top,
            parallel: !no_parallel,
            jobs,
            verbosity,
        }),
        Commands::Record {
            messages,
            history,
            config,
            threshold,
        } => commands::handle_record(commands::RecordConfig {
            history,
            messages,
            config,
            threshold,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

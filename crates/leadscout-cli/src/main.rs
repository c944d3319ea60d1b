mod pipeline;
mod run;
mod sink;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::run::{QueryArgs, RunArgs};

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Find remote job postings and keep the ones an LLM judge accepts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search, classify, and write accepted leads (the default)
    Run(RunArgs),
    /// Print the search query for a role profile
    Query(QueryArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let config = leadscout_core::load_app_config_from_env()?;
            init_tracing(&config.log_level)?;
            tracing::debug!(?config, "configuration loaded");
            run::run_leads(&config, args).await
        }
        Commands::Query(args) => {
            init_tracing(&leadscout_core::load_log_level_from_env())?;
            run::print_query(&args)
        }
    }
}

/// `RUST_LOG` wins; otherwise `default_level`. Logs go to stderr so stdout
/// stays clean for the summary line and `query` output.
fn init_tracing(default_level: &str) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

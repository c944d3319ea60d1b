//! Command handlers for the CLI.
//!
//! Called from `main` once configuration has loaded. Both handlers print a
//! one-line human summary to stdout; structured detail goes to the log.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use leadscout_core::config::validate_result_count;
use leadscout_core::{load_profile, AppConfig, RoleProfile};
use leadscout_judge::{Classifier, GeminiClient};
use leadscout_search::{build_query, SerperClient};

use crate::pipeline::run_pipeline;

/// Arguments for `leadscout run`.
#[derive(Debug, Default, Args)]
pub struct RunArgs {
    /// Role profile YAML (defaults to `LEADSCOUT_PROFILE_PATH`, then the built-in profile)
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Where to write accepted leads (defaults to `LEADSCOUT_OUTPUT_PATH`)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of search results to request, 1-100
    #[arg(long, value_parser = parse_result_count)]
    pub num: Option<u32>,

    /// Print the search query and exit without calling any provider
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `leadscout query`.
#[derive(Debug, Default, Args)]
pub struct QueryArgs {
    /// Role profile YAML (defaults to the built-in profile)
    #[arg(long, env = "LEADSCOUT_PROFILE_PATH")]
    pub profile: Option<PathBuf>,
}

pub(crate) fn parse_result_count(raw: &str) -> Result<u32, String> {
    let count: u32 = raw
        .parse()
        .map_err(|e| format!("expected a positive integer: {e}"))?;
    validate_result_count(count)?;
    Ok(count)
}

/// Load the role profile at `path`, or the built-in default when unset.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation.
pub(crate) fn resolve_profile(path: Option<&Path>) -> anyhow::Result<RoleProfile> {
    let Some(path) = path else {
        tracing::info!("no role profile configured; using built-in default");
        return Ok(RoleProfile::default());
    };
    let profile = load_profile(path)?;
    tracing::info!(path = %path.display(), role = %profile.role, "loaded role profile");
    Ok(profile)
}

/// Fetch, classify, and persist leads.
///
/// With `dry_run`, prints the query and target path and returns before any
/// network or file I/O.
///
/// # Errors
///
/// Returns an error if the profile is invalid, a provider client cannot be
/// built, or the artifact cannot be written. Search and per-lead judge
/// failures are logged and do not abort the run.
pub(crate) async fn run_leads(config: &AppConfig, args: RunArgs) -> anyhow::Result<()> {
    let profile = resolve_profile(args.profile.as_deref().or(config.profile_path.as_deref()))?;
    let result_count = args.num.unwrap_or(config.result_count);
    let output = args.output.unwrap_or_else(|| config.output_path.clone());
    let today = Utc::now().date_naive();

    if args.dry_run {
        println!(
            "dry-run: would request {result_count} results for: {}",
            build_query(&profile, today)
        );
        println!("dry-run: accepted leads would be written to {}", output.display());
        return Ok(());
    }

    let search = SerperClient::with_base_url(
        config.search_api_key.as_deref(),
        config.request_timeout_secs,
        &config.user_agent,
        &config.search_url,
    )?;
    let judge = GeminiClient::with_base_url(
        &config.judge_api_key,
        &config.judge_model,
        config.request_timeout_secs,
        &config.user_agent,
        &config.judge_base_url,
    )?;
    let classifier = Classifier::new(judge, Duration::from_millis(config.judge_delay_ms))
        .with_concurrency(config.judge_concurrency);

    let summary = run_pipeline(&search, &classifier, &profile, result_count, today, &output).await?;

    if summary.failed > 0 {
        tracing::warn!(
            failed = summary.failed,
            total = summary.fetched,
            "some leads could not be judged"
        );
    }

    println!(
        "lead run complete: {} fetched, {} accepted, {} rejected, {} skipped, {} failed; wrote {}",
        summary.fetched,
        summary.accepted,
        summary.rejected,
        summary.skipped,
        summary.failed,
        output.display()
    );
    Ok(())
}

/// Print the search query a run would issue today.
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded.
pub(crate) fn print_query(args: &QueryArgs) -> anyhow::Result<()> {
    let profile = resolve_profile(args.profile.as_deref())?;
    println!("{}", build_query(&profile, Utc::now().date_naive()));
    Ok(())
}

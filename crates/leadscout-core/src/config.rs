use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SEARCH_URL: &str = "https://google.serper.dev/search";
pub const DEFAULT_JUDGE_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_JUDGE_MODEL: &str = "gemini-2.0-flash";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Largest result count the search provider accepts in a single request.
pub const MAX_RESULT_COUNT: u32 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Read only the log level (`LEADSCOUT_LOG_LEVEL`, default `info`).
///
/// For commands that never touch a provider and so must not fail on a
/// missing API key.
#[must_use]
pub fn load_log_level_from_env() -> String {
    log_level_with(|key| std::env::var(key))
}

fn log_level_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("LEADSCOUT_LOG_LEVEL")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // Blank values count as missing so an empty `KEY=` line in `.env` fails fast.
    let non_blank = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let require = |var: &str| -> Result<String, ConfigError> {
        non_blank(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { non_blank(var).unwrap_or_else(|| default.to_string()) };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let judge_api_key = require("GEMINI_API_KEY")?;
    let search_api_key = non_blank("SERPER_API_KEY");

    let search_url = or_default("LEADSCOUT_SEARCH_URL", DEFAULT_SEARCH_URL);
    let judge_base_url = or_default("LEADSCOUT_JUDGE_BASE_URL", DEFAULT_JUDGE_BASE_URL);
    let judge_model = or_default("LEADSCOUT_JUDGE_MODEL", DEFAULT_JUDGE_MODEL);

    let result_count = parse_u32("LEADSCOUT_RESULT_COUNT", "25")?;
    validate_result_count(result_count).map_err(|reason| ConfigError::InvalidEnvVar {
        var: "LEADSCOUT_RESULT_COUNT".to_string(),
        reason,
    })?;

    let judge_delay_ms = parse_u64("LEADSCOUT_JUDGE_DELAY_MS", "500")?;

    let judge_concurrency = parse_usize("LEADSCOUT_JUDGE_CONCURRENCY", "1")?;
    if judge_concurrency == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADSCOUT_JUDGE_CONCURRENCY".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let request_timeout_secs = parse_u64("LEADSCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("LEADSCOUT_USER_AGENT", "leadscout/0.1 (job-discovery)");
    let profile_path = non_blank("LEADSCOUT_PROFILE_PATH").map(PathBuf::from);
    let output_path = PathBuf::from(or_default("LEADSCOUT_OUTPUT_PATH", "jobs.json"));
    let log_level = log_level_with(&lookup);

    Ok(AppConfig {
        judge_api_key,
        search_api_key,
        search_url,
        judge_base_url,
        judge_model,
        result_count,
        judge_delay_ms,
        judge_concurrency,
        request_timeout_secs,
        user_agent,
        profile_path,
        output_path,
        log_level,
    })
}

/// Checks that a requested result count is within what the search provider serves.
///
/// # Errors
///
/// Returns a human-readable reason when `count` is zero or above
/// [`MAX_RESULT_COUNT`].
pub fn validate_result_count(count: u32) -> Result<(), String> {
    if count == 0 || count > MAX_RESULT_COUNT {
        return Err(format!("must be between 1 and {MAX_RESULT_COUNT}, got {count}"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

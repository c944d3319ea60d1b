//! Source → classifier → sink orchestration for one run.

use std::path::Path;

use chrono::NaiveDate;
use leadscout_core::RoleProfile;
use leadscout_judge::{Classifier, JudgeProvider};
use leadscout_search::{fetch_leads, SearchProvider};

use crate::sink::{write_leads, SinkError};

/// Counts from one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub fetched: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Run the full pipeline and write the artifact to `output`.
///
/// Source and per-lead classification failures are absorbed upstream, so
/// the artifact is always written; an unreachable search provider produces
/// `[]`.
///
/// # Errors
///
/// Returns [`SinkError`] if the artifact cannot be written.
pub(crate) async fn run_pipeline<S, J>(
    search: &S,
    classifier: &Classifier<J>,
    profile: &RoleProfile,
    result_count: u32,
    today: NaiveDate,
    output: &Path,
) -> Result<RunSummary, SinkError>
where
    S: SearchProvider,
    J: JudgeProvider,
{
    let leads = fetch_leads(search, profile, result_count, today).await;
    let report = classifier.classify_with_report(&leads, profile).await;

    let summary = RunSummary {
        fetched: leads.len(),
        accepted: report.accepted_count(),
        rejected: report.rejected_count(),
        skipped: report.skipped_count(),
        failed: report.failed_count(),
    };

    write_leads(output, &report.into_accepted())?;
    Ok(summary)
}

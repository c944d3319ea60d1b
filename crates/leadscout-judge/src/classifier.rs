//! Per-lead classification against a role profile.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use leadscout_core::{AcceptedLead, RawLead, RoleProfile, DEFAULT_COMPANY, DEFAULT_SCORE};
use thiserror::Error;

use crate::error::JudgeError;
use crate::prompt::render_prompt;
use crate::provider::JudgeProvider;
use crate::throttle::Throttle;
use crate::verdict::{parse_verdict, Verdict, VerdictError};

/// Why a single lead could not be judged.
#[derive(Debug, Error)]
pub enum JudgeFailure {
    /// The provider call itself failed (network, timeout, quota, empty reply).
    #[error("judge call failed: {0}")]
    Transport(#[from] JudgeError),

    /// The reply was empty or held no decodable JSON object.
    #[error("judge reply could not be decoded: {0}")]
    Decode(VerdictError),

    /// The reply decoded but did not carry a boolean `match`.
    #[error("judge reply did not match the verdict schema: {0}")]
    Schema(VerdictError),
}

impl From<VerdictError> for JudgeFailure {
    fn from(err: VerdictError) -> Self {
        if err.is_schema_mismatch() {
            Self::Schema(err)
        } else {
            Self::Decode(err)
        }
    }
}

/// Result of classifying one lead.
#[derive(Debug)]
pub enum LeadOutcome {
    Accepted(AcceptedLead),
    /// The judge answered and said no.
    Rejected,
    /// The lead had no URL, so it was never sent to the judge.
    Skipped,
    Failed(JudgeFailure),
}

/// Outcomes of one classification pass, in input order.
#[derive(Debug, Default)]
pub struct ClassificationReport {
    pub outcomes: Vec<LeadOutcome>,
}

impl ClassificationReport {
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.count(|o| matches!(o, LeadOutcome::Accepted(_)))
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.count(|o| matches!(o, LeadOutcome::Rejected))
    }

    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.count(|o| matches!(o, LeadOutcome::Skipped))
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, LeadOutcome::Failed(_)))
    }

    /// Consumes the report, keeping only accepted leads.
    #[must_use]
    pub fn into_accepted(self) -> Vec<AcceptedLead> {
        self.outcomes
            .into_iter()
            .filter_map(|o| match o {
                LeadOutcome::Accepted(lead) => Some(lead),
                _ => None,
            })
            .collect()
    }

    fn count(&self, pred: impl Fn(&LeadOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Classifies raw leads with a judge provider.
///
/// Every lead is judged independently: a provider error or garbage reply
/// for one lead has no effect on any other. Judge calls are spaced by a
/// shared [`Throttle`] and at most `concurrency` are in flight at once.
pub struct Classifier<J> {
    judge: J,
    throttle: Throttle,
    concurrency: usize,
}

impl<J: JudgeProvider> Classifier<J> {
    /// Creates a sequential classifier that idles `min_interval` after each
    /// judge call before starting the next.
    pub fn new(judge: J, min_interval: Duration) -> Self {
        Self {
            judge,
            throttle: Throttle::new(min_interval),
            concurrency: 1,
        }
    }

    /// Allows up to `concurrency` judge calls in flight. Values below 1 are
    /// treated as 1. Above 1, the flat per-call delay becomes a cap of one
    /// call start per interval across all in-flight calls.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        let interval = self.throttle.interval();
        self.throttle = if self.concurrency > 1 {
            Throttle::rate_cap(interval)
        } else {
            Throttle::new(interval)
        };
        self
    }

    /// Classify `leads` and return only the accepted ones, in input order.
    ///
    /// Never fails; per-lead problems are logged and the lead is dropped.
    pub async fn classify(&self, leads: &[RawLead], profile: &RoleProfile) -> Vec<AcceptedLead> {
        self.classify_with_report(leads, profile)
            .await
            .into_accepted()
    }

    /// Classify `leads`, returning one [`LeadOutcome`] per input in input order.
    pub async fn classify_with_report(
        &self,
        leads: &[RawLead],
        profile: &RoleProfile,
    ) -> ClassificationReport {
        let outcomes: Vec<LeadOutcome> = stream::iter(leads)
            .map(|lead| self.judge_lead(lead, profile))
            .buffered(self.concurrency)
            .collect()
            .await;

        let report = ClassificationReport { outcomes };
        tracing::info!(
            total = leads.len(),
            accepted = report.accepted_count(),
            rejected = report.rejected_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
            concurrency = self.concurrency,
            delay = ?self.throttle.interval(),
            "classification complete"
        );
        report
    }

    /// Classify a single lead.
    pub async fn judge_lead(&self, lead: &RawLead, profile: &RoleProfile) -> LeadOutcome {
        if lead.url.is_empty() {
            tracing::debug!(title = %lead.title, "skipping lead without url");
            return LeadOutcome::Skipped;
        }

        match self.verdict_for(lead, profile).await {
            Ok(verdict) if verdict.is_match => {
                tracing::debug!(url = %lead.url, score = ?verdict.score, "lead accepted");
                LeadOutcome::Accepted(accept(lead, verdict))
            }
            Ok(_) => {
                tracing::debug!(url = %lead.url, "lead rejected");
                LeadOutcome::Rejected
            }
            Err(failure) => {
                tracing::warn!(url = %lead.url, error = %failure, "lead could not be judged");
                LeadOutcome::Failed(failure)
            }
        }
    }

    async fn verdict_for(
        &self,
        lead: &RawLead,
        profile: &RoleProfile,
    ) -> Result<Verdict, JudgeFailure> {
        let prompt = render_prompt(lead, profile);
        self.throttle.wait().await;
        let reply = self.judge.complete(&prompt).await;
        self.throttle.finish().await;
        Ok(parse_verdict(&reply?)?)
    }
}

/// Build the persisted record for an accepted lead, filling defaults.
fn accept(lead: &RawLead, verdict: Verdict) -> AcceptedLead {
    AcceptedLead {
        title: lead.title.clone(),
        url: lead.url.clone(),
        score: verdict.score.unwrap_or(DEFAULT_SCORE),
        company: verdict
            .company
            .unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
        experience_band: verdict.experience_band,
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;

//! Lead source abstraction.

use std::future::Future;

use chrono::NaiveDate;
use leadscout_core::{RawLead, RoleProfile};

use crate::error::SearchError;
use crate::query::build_query;

/// A keyword search backend returning title/snippet/link records.
///
/// [`SerperClient`](crate::SerperClient) is the production implementation;
/// tests substitute in-memory providers.
pub trait SearchProvider {
    /// Runs `query`, asking for at most `num` results.
    fn search(
        &self,
        query: &str,
        num: u32,
    ) -> impl Future<Output = Result<Vec<RawLead>, SearchError>> + Send;
}

/// Fetch raw leads for a role profile.
///
/// Issues exactly one search request for up to `result_count` results.
/// Results are passed through unfiltered and in provider order.
///
/// Never fails: any provider error is logged and yields an empty `Vec`, so
/// the rest of the pipeline runs to completion and writes an empty artifact.
pub async fn fetch_leads<P: SearchProvider>(
    provider: &P,
    profile: &RoleProfile,
    result_count: u32,
    today: NaiveDate,
) -> Vec<RawLead> {
    let query = build_query(profile, today);
    tracing::debug!(query = %query, result_count, "issuing search");

    match provider.search(&query, result_count).await {
        Ok(leads) => {
            tracing::info!(count = leads.len(), "search returned leads");
            leads
        }
        Err(e) => {
            tracing::warn!(error = %e, "search failed; continuing with no leads");
            Vec::new()
        }
    }
}

//! Search query construction.

use chrono::{Days, NaiveDate};
use leadscout_core::RoleProfile;

/// Builds the boolean search query for a role profile.
///
/// Shape: `(site:a OR site:b) ("kw1" OR "kw2") "required"`, followed by
/// `after:YYYY-MM-DD` when the profile sets a recency bound. The date is
/// computed from `today` so the query is deterministic for a given day.
#[must_use]
pub fn build_query(profile: &RoleProfile, today: NaiveDate) -> String {
    let sites = profile
        .sites
        .iter()
        .map(|s| format!("site:{}", s.trim()))
        .collect::<Vec<_>>()
        .join(" OR ");

    let keywords = profile
        .title_keywords
        .iter()
        .map(|k| quote(k))
        .collect::<Vec<_>>()
        .join(" OR ");

    let mut parts = vec![format!("({sites})"), format!("({keywords})")];
    parts.extend(profile.required_terms.iter().map(|t| quote(t)));

    if let Some(days) = profile.recency_days {
        if let Some(since) = today.checked_sub_days(Days::new(u64::from(days))) {
            parts.push(format!("after:{}", since.format("%Y-%m-%d")));
        }
    }

    parts.join(" ")
}

/// Wraps a term in double quotes for exact-phrase matching. Embedded quotes
/// are dropped since the search syntax has no escape for them.
fn quote(term: &str) -> String {
    format!("\"{}\"", term.trim().replace('"', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn default_profile_query() {
        let query = build_query(&RoleProfile::default(), day("2026-10-19"));
        assert_eq!(
            query,
            r#"(site:lever.co OR site:greenhouse.io OR site:ashbyhq.com) ("Data Analyst" OR "Business Intelligence" OR "Data Analytics") "Remote""#
        );
    }

    #[test]
    fn recency_appends_after_date() {
        let profile = RoleProfile {
            recency_days: Some(7),
            ..RoleProfile::default()
        };
        let query = build_query(&profile, day("2026-10-19"));
        assert!(query.ends_with(" after:2026-10-12"), "got: {query}");
    }

    #[test]
    fn recency_crosses_month_boundary() {
        let profile = RoleProfile {
            recency_days: Some(30),
            ..RoleProfile::default()
        };
        let query = build_query(&profile, day("2026-03-10"));
        assert!(query.ends_with(" after:2026-02-08"), "got: {query}");
    }

    #[test]
    fn single_site_and_keyword_without_required_terms() {
        let profile = RoleProfile {
            title_keywords: vec!["Analytics Engineer".to_string()],
            sites: vec!["ashbyhq.com".to_string()],
            required_terms: vec![],
            ..RoleProfile::default()
        };
        let query = build_query(&profile, day("2026-10-19"));
        assert_eq!(query, r#"(site:ashbyhq.com) ("Analytics Engineer")"#);
    }

    #[test]
    fn embedded_quotes_are_dropped() {
        let profile = RoleProfile {
            title_keywords: vec![r#"BI "Lead""#.to_string()],
            ..RoleProfile::default()
        };
        let query = build_query(&profile, day("2026-10-19"));
        assert!(query.contains(r#"("BI Lead")"#), "got: {query}");
    }

    #[test]
    fn exclusions_are_not_part_of_the_query() {
        let profile = RoleProfile {
            exclusions: vec!["intern".to_string()],
            ..RoleProfile::default()
        };
        let query = build_query(&profile, day("2026-10-19"));
        assert!(!query.contains("intern"), "got: {query}");
    }
}

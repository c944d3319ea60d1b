//! Normalization of search provider records into [`RawLead`]s.

use leadscout_core::RawLead;

use crate::types::OrganicResult;

/// Collapses every run of whitespace (including newlines) to a single space
/// and trims both ends.
#[must_use]
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Converts one organic search hit into a [`RawLead`].
///
/// Missing fields become empty strings. No filtering happens here: a hit
/// without a link still yields a lead, and the classifier decides what to do
/// with it.
#[must_use]
pub fn normalize_result(result: OrganicResult) -> RawLead {
    RawLead {
        title: collapse_whitespace(result.title.as_deref().unwrap_or_default()),
        snippet: collapse_whitespace(result.snippet.as_deref().unwrap_or_default()),
        url: result.link.as_deref().map(str::trim).unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_joins_lines() {
        assert_eq!(
            collapse_whitespace("  5+ years\n\n remote \t only "),
            "5+ years remote only"
        );
    }

    #[test]
    fn collapse_whitespace_empty() {
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn normalize_full_result() {
        let lead = normalize_result(OrganicResult {
            title: Some("Senior Data Analyst - Acme".to_string()),
            snippet: Some("5+ years,\nremote".to_string()),
            link: Some(" https://jobs.lever.co/acme/1 ".to_string()),
        });
        assert_eq!(lead.title, "Senior Data Analyst - Acme");
        assert_eq!(lead.snippet, "5+ years, remote");
        assert_eq!(lead.url, "https://jobs.lever.co/acme/1");
    }

    #[test]
    fn normalize_missing_fields_become_empty() {
        let lead = normalize_result(OrganicResult::default());
        assert_eq!(lead, RawLead::default());
    }
}

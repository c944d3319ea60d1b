use serde::{Deserialize, Serialize};

/// Score assigned when the judge accepts a lead without rating it.
pub const DEFAULT_SCORE: u8 = 80;

/// Company name used when the judge accepts a lead without naming an employer.
pub const DEFAULT_COMPANY: &str = "Tech Company";

/// A single search result before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLead {
    pub title: String,
    pub snippet: String,
    /// Empty when the search provider omitted the link.
    pub url: String,
}

/// A lead the judge accepted.
///
/// Field names are the contract with the dashboard that reads the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedLead {
    pub title: String,
    pub url: String,
    pub score: u8,
    pub company: String,
    #[serde(
        rename = "experienceBand",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_band: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_lead_omits_missing_experience_band() {
        let lead = AcceptedLead {
            title: "Senior Data Analyst".to_string(),
            url: "https://a.co/1".to_string(),
            score: 92,
            company: "Acme".to_string(),
            experience_band: None,
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Senior Data Analyst",
                "url": "https://a.co/1",
                "score": 92,
                "company": "Acme"
            })
        );
    }

    #[test]
    fn accepted_lead_uses_camel_case_experience_band() {
        let lead = AcceptedLead {
            title: "BI Engineer".to_string(),
            url: "https://b.co/2".to_string(),
            score: 75,
            company: "Initech".to_string(),
            experience_band: Some("3-5 years".to_string()),
        };
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["experienceBand"], "3-5 years");
        assert!(json.get("experience_band").is_none());
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Search and acceptance criteria for one run.
///
/// Drives both the search query (keywords, sites, required terms, recency)
/// and the judge prompt (role description, keywords, seniority, exclusions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleProfile {
    /// Short role-family label shown to the judge, e.g. `Data/BI`.
    pub role: String,
    /// Job titles to search for; OR-ed together in the query.
    pub title_keywords: Vec<String>,
    /// Applicant-tracking hosts to restrict the search to, e.g. `lever.co`.
    pub sites: Vec<String>,
    /// Terms every result must mention, e.g. `Remote`.
    #[serde(default)]
    pub required_terms: Vec<String>,
    /// Terms that disqualify a posting, e.g. `intern`.
    #[serde(default)]
    pub exclusions: Vec<String>,
    /// Only include postings indexed within this many days.
    #[serde(default)]
    pub recency_days: Option<u32>,
    /// Free-text seniority or experience band, e.g. `mid-level, 3-7 years`.
    #[serde(default)]
    pub seniority: Option<String>,
}

impl Default for RoleProfile {
    fn default() -> Self {
        Self {
            role: "Data/BI".to_string(),
            title_keywords: vec![
                "Data Analyst".to_string(),
                "Business Intelligence".to_string(),
                "Data Analytics".to_string(),
            ],
            sites: vec![
                "lever.co".to_string(),
                "greenhouse.io".to_string(),
                "ashbyhq.com".to_string(),
            ],
            required_terms: vec!["Remote".to_string()],
            exclusions: Vec::new(),
            recency_days: None,
            seniority: None,
        }
    }
}

/// Load and validate a role profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_profile(path: &Path) -> Result<RoleProfile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ProfileFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_profile(&content)
}

/// Parse and validate a role profile from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_profile(yaml: &str) -> Result<RoleProfile, ConfigError> {
    let profile: RoleProfile = serde_yaml::from_str(yaml)?;
    validate_profile(&profile)?;
    Ok(profile)
}

fn validate_profile(profile: &RoleProfile) -> Result<(), ConfigError> {
    if profile.role.trim().is_empty() {
        return Err(ConfigError::Validation(
            "role must be non-empty".to_string(),
        ));
    }

    if profile.title_keywords.is_empty() {
        return Err(ConfigError::Validation(
            "at least one title keyword is required".to_string(),
        ));
    }

    if profile.sites.is_empty() {
        return Err(ConfigError::Validation(
            "at least one site is required".to_string(),
        ));
    }

    let lists = [
        ("title_keywords", &profile.title_keywords),
        ("sites", &profile.sites),
        ("required_terms", &profile.required_terms),
        ("exclusions", &profile.exclusions),
    ];
    for (field, values) in lists {
        if values.iter().any(|v| v.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "{field} must not contain blank entries"
            )));
        }
    }

    // Sites are bare hosts; the query builder adds the `site:` operator itself.
    if let Some(site) = profile
        .sites
        .iter()
        .find(|s| s.contains(char::is_whitespace) || s.starts_with("site:"))
    {
        return Err(ConfigError::Validation(format!(
            "site '{site}' must be a bare host such as 'lever.co'"
        )));
    }

    if profile.recency_days == Some(0) {
        return Err(ConfigError::Validation(
            "recency_days must be at least 1 when set".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;

//! Judge prompt rendering.

use leadscout_core::{RawLead, RoleProfile};

/// Render the classification prompt for one lead.
///
/// The reply contract is fixed: `{"match": false}` to reject, or
/// `{"match": true, "score": N, "co": "...", "exp": "..."}` to accept.
/// Empty titles and snippets are rendered as placeholders so the judge never
/// sees a dangling label.
#[must_use]
pub fn render_prompt(lead: &RawLead, profile: &RoleProfile) -> String {
    let title = if lead.title.is_empty() {
        "Unknown"
    } else {
        lead.title.as_str()
    };
    let snippet = if lead.snippet.is_empty() {
        "(no snippet)"
    } else {
        lead.snippet.as_str()
    };

    let mut criteria = format!(
        "- Role family: {}\n- Relevant titles: {}\n",
        profile.role,
        profile.title_keywords.join(", ")
    );
    if let Some(seniority) = &profile.seniority {
        criteria.push_str(&format!("- Seniority: {seniority}\n"));
    }
    if !profile.exclusions.is_empty() {
        criteria.push_str(&format!(
            "- Reject postings that are: {}\n",
            profile.exclusions.join(", ")
        ));
    }

    format!(
        "Role: {title}\n\
         Snippet: {snippet}\n\
         \n\
         Criteria:\n\
         {criteria}\
         \n\
         Task: Is this a {role} role that meets the criteria? \
         If yes, return ONLY JSON: \
         {{\"match\": true, \"score\": <integer 0-100>, \"co\": \"<company name>\", \"exp\": \"<experience band, omit if unknown>\"}}. \
         If no, return ONLY: {{\"match\": false}}. \
         Do not add any other text.\n",
        role = profile.role,
    )
}

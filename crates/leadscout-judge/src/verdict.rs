//! Verdict schema and validation.
//!
//! | Key | Required | Type | On bad value |
//! |---|---|---|---|
//! | `match` | yes | boolean | [`VerdictError::MissingMatch`] / [`VerdictError::InvalidMatch`] |
//! | `score` | no | number, rounded and clamped to 0-100 | treated as absent (including numbers too large to decode) |
//! | `co` (alias `company`) | no | non-blank string | treated as absent |
//! | `exp` (alias `experience`) | no | non-blank string | treated as absent |

use serde_json::{Map, Value};
use thiserror::Error;

use crate::extract::{extract_json_object, sanitize_response};

/// A structured judgment decoded from the judge's reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub is_match: bool,
    pub score: Option<u8>,
    pub company: Option<String>,
    pub experience_band: Option<String>,
}

/// Why a judge reply could not be turned into a [`Verdict`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerdictError {
    #[error("judge reply was empty")]
    Empty,

    #[error("no JSON object found in judge reply")]
    NoJsonObject,

    #[error("verdict is missing the `match` field")]
    MissingMatch,

    #[error("verdict `match` field must be a boolean, found {found}")]
    InvalidMatch { found: &'static str },
}

impl VerdictError {
    /// `true` when the reply decoded as JSON but had the wrong shape, as
    /// opposed to not decoding at all.
    #[must_use]
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::MissingMatch | Self::InvalidMatch { .. })
    }
}

/// Sanitize, extract, and validate a raw judge reply.
///
/// # Errors
///
/// Returns [`VerdictError`] when the reply is empty, contains no decodable
/// JSON object, or the object lacks a boolean `match`.
pub fn parse_verdict(raw: &str) -> Result<Verdict, VerdictError> {
    let cleaned = sanitize_response(raw);
    if cleaned.is_empty() {
        return Err(VerdictError::Empty);
    }

    let object = extract_json_object(cleaned).ok_or(VerdictError::NoJsonObject)?;
    verdict_from_object(&object)
}

fn verdict_from_object(object: &Map<String, Value>) -> Result<Verdict, VerdictError> {
    let is_match = match object.get("match") {
        None => return Err(VerdictError::MissingMatch),
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(VerdictError::InvalidMatch {
                found: json_type_name(other),
            })
        }
    };

    Ok(Verdict {
        is_match,
        score: object.get("score").and_then(parse_score),
        company: text_field(object, &["co", "company"]),
        experience_band: text_field(object, &["exp", "experience"]),
    })
}

fn parse_score(value: &Value) -> Option<u8> {
    let n = value.as_f64()?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = n.round().clamp(0.0, 100.0) as u8;
    Some(score)
}

/// First non-blank string among `keys`, trimmed.
fn text_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| object.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

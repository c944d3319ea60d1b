//! Lead classifier for leadscout.
//!
//! Renders a per-lead prompt from a [`RoleProfile`], asks an LLM judge
//! (Gemini by default) whether the posting fits, and validates the reply
//! into a [`Verdict`]. Replies are sanitized before decoding since judges
//! often wrap JSON in code fences or prose. A lead whose judge call or reply
//! fails is dropped without affecting its siblings.
//!
//! [`RoleProfile`]: leadscout_core::RoleProfile

pub mod classifier;
pub mod client;
pub mod error;
pub mod extract;
pub mod prompt;
pub mod provider;
pub mod throttle;
pub mod types;
pub mod verdict;

pub use classifier::{ClassificationReport, Classifier, JudgeFailure, LeadOutcome};
pub use client::GeminiClient;
pub use error::JudgeError;
pub use extract::{extract_json_object, sanitize_response};
pub use prompt::render_prompt;
pub use provider::JudgeProvider;
pub use throttle::Throttle;
pub use verdict::{parse_verdict, Verdict, VerdictError};

//! Judge provider abstraction.

use std::future::Future;

use crate::error::JudgeError;

/// A text-completion backend asked for one relevance verdict per lead.
///
/// Implementations return the provider's raw text. No structure is assumed;
/// the classifier does all validation. [`GeminiClient`](crate::GeminiClient)
/// is the production implementation.
pub trait JudgeProvider {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String, JudgeError>> + Send;
}

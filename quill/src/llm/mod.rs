//! Completion client abstraction for the drafting stages.
//!
//! Stage nodes depend on a callable that turns one prompt into one completion;
//! this module defines the trait, the error taxonomy, an OpenAI-compatible
//! implementation, the bounded-retry [`Completer`] wrapper, and a scripted
//! mock for tests.

mod mock;
mod openai;
mod retry;

pub use mock::MockCompleter;
pub use openai::OpenAiClient;
pub use retry::{Completer, Completion, DEFAULT_MAX_TRIES, EXHAUSTED_SENTINEL, POLICY_SENTINEL};

use async_trait::async_trait;
use thiserror::Error;

/// API error body marker for a prompt that exceeded the model's context window.
const CONTEXT_LENGTH_MARKER: &str = "maximum context length";

/// API error body marker for a content-policy rejection.
const CONTENT_POLICY_MARKER: &str = "triggering";

/// Error from a single completion call.
///
/// `ContextLength` is terminal and propagates through the whole pipeline;
/// `ContentPolicy` is recovered locally by [`Completer`] as a sentinel; the
/// remaining variants are transient and retried.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The prompt exceeded the model's context window. Terminal.
    #[error("context length exceeded: {0}")]
    ContextLength(String),

    /// The provider rejected the request on content-policy grounds.
    #[error("content policy rejection: {0}")]
    ContentPolicy(String),

    /// Non-success HTTP status from the API with its error body.
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure (connect, timeout, TLS).
    #[error("http error: {0}")]
    Http(String),

    /// Response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl LlmError {
    /// Classifies a non-success API response by its error body.
    ///
    /// The context-length and content-policy markers take precedence over the
    /// generic `Api` variant so callers can route on them.
    pub fn from_api_failure(status: u16, message: &str) -> Self {
        if message.contains(CONTEXT_LENGTH_MARKER) {
            LlmError::ContextLength(message.to_string())
        } else if message.contains(CONTENT_POLICY_MARKER) {
            LlmError::ContentPolicy(message.to_string())
        } else {
            LlmError::Api {
                status,
                message: message.to_string(),
            }
        }
    }

    /// True for failures that must propagate rather than be retried or substituted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LlmError::ContextLength(_))
    }
}

/// One raw completion call: prompt in, text out.
///
/// Implementations perform a single attempt; retry and sentinel substitution
/// live in [`Completer`]. Implementations: [`OpenAiClient`] (real API),
/// [`MockCompleter`] (scripted responses for tests).
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Performs one completion attempt for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: An error body mentioning the context window classifies as terminal.
    #[test]
    fn api_failure_with_context_marker_is_context_length() {
        let err = LlmError::from_api_failure(
            400,
            "This model's maximum context length is 128000 tokens",
        );
        assert!(matches!(err, LlmError::ContextLength(_)));
        assert!(err.is_terminal());
    }

    /// **Scenario**: An error body with the policy marker classifies as ContentPolicy.
    #[test]
    fn api_failure_with_policy_marker_is_content_policy() {
        let err = LlmError::from_api_failure(400, "prompt flagged as triggering our policies");
        assert!(matches!(err, LlmError::ContentPolicy(_)));
        assert!(!err.is_terminal());
    }

    /// **Scenario**: Any other error body stays a generic retryable Api error.
    #[test]
    fn api_failure_without_markers_is_generic() {
        let err = LlmError::from_api_failure(500, "internal server error");
        match err {
            LlmError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Api, got {other:?}"),
        }
    }
}

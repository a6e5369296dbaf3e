//! Bounded-retry wrapper over a [`CompletionClient`].
//!
//! Up to `max_tries` attempts per prompt, no backoff. Terminal failures
//! propagate; policy rejections and exhausted retries become explicit
//! [`Completion`] variants so the caller decides how to substitute them.

use std::sync::Arc;

use super::{CompletionClient, LlmError};

/// Default retry bound for one completion.
pub const DEFAULT_MAX_TRIES: usize = 10;

/// Text substituted when the provider rejected the prompt on policy grounds.
pub const POLICY_SENTINEL: &str = "Trigger OpenAI's content management policy";

/// Text substituted when every attempt failed.
pub const EXHAUSTED_SENTINEL: &str = "Max tries. Failed.";

/// Outcome of a retried completion.
///
/// Distinguishes success from the two locally-recovered failures instead of
/// hiding them in the returned string; `into_text` performs the sentinel
/// substitution where the pipeline wants the historical behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The model answered.
    Text(String),
    /// Content-policy rejection; short-circuits the retry loop.
    PolicyBlocked,
    /// All attempts failed with transient errors.
    Exhausted,
}

impl Completion {
    /// The completion as text, substituting the fixed sentinels for the
    /// failure variants.
    pub fn into_text(self) -> String {
        match self {
            Completion::Text(text) => text,
            Completion::PolicyBlocked => POLICY_SENTINEL.to_string(),
            Completion::Exhausted => EXHAUSTED_SENTINEL.to_string(),
        }
    }
}

/// Retrying completer: the one place the pipeline talks to the model.
///
/// Clones share the underlying client. Errors other than context-length are
/// logged and retried up to the bound; exhausting the bound yields
/// [`Completion::Exhausted`] rather than an error.
#[derive(Clone)]
pub struct Completer {
    client: Arc<dyn CompletionClient>,
    max_tries: usize,
}

impl Completer {
    pub fn new(client: Arc<dyn CompletionClient>, max_tries: usize) -> Self {
        Self { client, max_tries }
    }

    /// Creates a completer with the default retry bound.
    pub fn with_default_tries(client: Arc<dyn CompletionClient>) -> Self {
        Self::new(client, DEFAULT_MAX_TRIES)
    }

    /// Completes `prompt`, retrying transient failures.
    ///
    /// Returns `Err` only for terminal failures (context length exceeded).
    pub async fn complete(&self, prompt: &str) -> Result<Completion, LlmError> {
        for attempt in 1..=self.max_tries {
            match self.client.complete(prompt).await {
                Ok(text) => return Ok(Completion::Text(text)),
                Err(e) if e.is_terminal() => return Err(e),
                Err(LlmError::ContentPolicy(message)) => {
                    tracing::warn!(%message, "content policy rejection, substituting sentinel");
                    return Ok(Completion::PolicyBlocked);
                }
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_tries = self.max_tries,
                        error = %e,
                        "completion failed, retrying"
                    );
                }
            }
        }
        tracing::warn!(max_tries = self.max_tries, "completion retries exhausted");
        Ok(Completion::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockCompleter;

    #[test]
    fn into_text_substitutes_sentinels() {
        assert_eq!(Completion::Text("ok".into()).into_text(), "ok");
        assert_eq!(Completion::PolicyBlocked.into_text(), POLICY_SENTINEL);
        assert_eq!(Completion::Exhausted.into_text(), EXHAUSTED_SENTINEL);
    }

    /// **Scenario**: 9 transient failures then a success on the 10th attempt
    /// returns the 10th response, not a sentinel.
    #[tokio::test]
    async fn succeeds_on_tenth_attempt_after_nine_failures() {
        let mut responses: Vec<Result<String, LlmError>> = (0..9)
            .map(|i| {
                Err(LlmError::Api {
                    status: 500,
                    message: format!("failure {i}"),
                })
            })
            .collect();
        responses.push(Ok("tenth time lucky".to_string()));
        let mock = MockCompleter::new(responses);
        let completer = Completer::new(Arc::new(mock), 10);

        let completion = completer.complete("p").await.unwrap();
        assert_eq!(completion, Completion::Text("tenth time lucky".to_string()));
    }

    /// **Scenario**: 10 transient failures exhaust the bound and yield Exhausted.
    #[tokio::test]
    async fn exhausts_after_max_tries() {
        let responses: Vec<Result<String, LlmError>> = (0..10)
            .map(|_| Err(LlmError::Http("connection reset".to_string())))
            .collect();
        let mock = MockCompleter::new(responses);
        let completer = Completer::new(Arc::new(mock), 10);

        let completion = completer.complete("p").await.unwrap();
        assert_eq!(completion, Completion::Exhausted);
    }

    /// **Scenario**: A context-length failure propagates immediately with no retry.
    #[tokio::test]
    async fn context_length_is_terminal_and_immediate() {
        let mock = MockCompleter::new(vec![
            Err(LlmError::ContextLength("too long".to_string())),
            Ok("never reached".to_string()),
        ]);
        let completer = Completer::new(Arc::new(mock.clone()), 10);

        let err = completer.complete("p").await.unwrap_err();
        assert!(matches!(err, LlmError::ContextLength(_)));
        assert_eq!(mock.prompts().len(), 1);
    }

    /// **Scenario**: A policy rejection short-circuits as PolicyBlocked.
    #[tokio::test]
    async fn policy_rejection_short_circuits() {
        let mock = MockCompleter::new(vec![
            Err(LlmError::ContentPolicy("flagged".to_string())),
            Ok("never reached".to_string()),
        ]);
        let completer = Completer::new(Arc::new(mock.clone()), 10);

        let completion = completer.complete("p").await.unwrap();
        assert_eq!(completion, Completion::PolicyBlocked);
        assert_eq!(mock.prompts().len(), 1);
    }
}

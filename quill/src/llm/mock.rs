//! Scripted completion client for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{CompletionClient, LlmError};

/// Mock client: returns scripted responses in order and records every prompt.
///
/// Clones share the same script and recorded prompts, so a test can hand one
/// clone to a [`Completer`](super::Completer) and inspect calls on another.
/// Running past the script is an error, which keeps call-count assertions
/// honest.
#[derive(Clone)]
pub struct MockCompleter {
    inner: Arc<Inner>,
}

struct Inner {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockCompleter {
    /// Creates a mock with the given scripted results, consumed in order.
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            inner: Arc::new(Inner {
                responses: Mutex::new(responses.into()),
                prompts: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Creates a mock that answers each call with the next text in `texts`.
    pub fn with_texts(texts: Vec<&str>) -> Self {
        Self::new(texts.into_iter().map(|t| Ok(t.to_string())).collect())
    }

    /// Every prompt the mock has received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.prompts().len()
    }
}

#[async_trait]
impl CompletionClient for MockCompleter {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        if let Ok(mut prompts) = self.inner.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let next = self
            .inner
            .responses
            .lock()
            .ok()
            .and_then(|mut r| r.pop_front());
        match next {
            Some(result) => result,
            None => Err(LlmError::Http("mock: no scripted response left".to_string())),
        }
    }
}

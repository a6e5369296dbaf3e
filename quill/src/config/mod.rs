//! Runtime configuration, built once at startup from the environment.
//!
//! `.env` is loaded first (existing env wins), then [`QuillConfig::from_env`]
//! reads the credential and the tunables into one explicit struct that is
//! passed into the client and runner constructors. No process-wide mutable
//! configuration exists after startup.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default OpenAI-compatible endpoint base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model name.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion token budget.
pub const DEFAULT_MAX_TOKENS: u32 = 16384;

/// Fixed per-call network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Error building configuration at startup. Fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API credential is absent from the environment.
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    /// A numeric override could not be parsed.
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Everything the pipeline needs from the environment.
#[derive(Debug, Clone)]
pub struct QuillConfig {
    /// API credential (required).
    pub api_key: String,
    /// Endpoint base, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
    /// Model name sent with each completion.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token budget per call.
    pub max_tokens: u32,
    /// Per-call network timeout.
    pub timeout: Duration,
    /// Retry bound for one completion.
    pub max_tries: usize,
    /// Prompt templates directory; `None` uses `PROMPTS_DIR` env or the default.
    pub prompts_dir: Option<PathBuf>,
}

impl QuillConfig {
    /// Builds config from the process environment, loading `.env` first.
    ///
    /// Missing `OPENAI_API_KEY` is fatal. Overrides: `OPENAI_API_BASE`,
    /// `QUILL_MODEL`, `QUILL_TEMPERATURE`, `QUILL_MAX_TOKENS`,
    /// `QUILL_MAX_TRIES`, `PROMPTS_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds config from an arbitrary lookup. Used by `from_env` and tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_base = lookup("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let model = lookup("QUILL_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = parse_or(&lookup, "QUILL_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        let max_tokens = parse_or(&lookup, "QUILL_MAX_TOKENS", DEFAULT_MAX_TOKENS)?;
        let max_tries = parse_or(&lookup, "QUILL_MAX_TRIES", crate::llm::DEFAULT_MAX_TRIES)?;
        let prompts_dir = lookup("PROMPTS_DIR").map(PathBuf::from);

        Ok(Self {
            api_key,
            api_base,
            model,
            temperature,
            max_tokens,
            timeout: DEFAULT_TIMEOUT,
            max_tries,
            prompts_dir,
        })
    }
}

/// Parses an env override, keeping the default when the key is absent.
fn parse_or<T: std::str::FromStr>(
    lookup: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    /// **Scenario**: Missing credential is a fatal configuration error.
    #[test]
    fn missing_api_key_is_fatal() {
        let result = QuillConfig::from_lookup(env(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn empty_api_key_is_fatal() {
        let result = QuillConfig::from_lookup(env(&[("OPENAI_API_KEY", "")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = QuillConfig::from_lookup(env(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
        assert_eq!(config.max_tries, 10);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.prompts_dir.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = QuillConfig::from_lookup(env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("QUILL_MODEL", "gpt-4o-mini"),
            ("QUILL_MAX_TOKENS", "2048"),
            ("QUILL_MAX_TRIES", "3"),
            ("PROMPTS_DIR", "/tmp/prompts"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 2048);
        assert_eq!(config.max_tries, 3);
        assert_eq!(config.prompts_dir.as_deref(), Some(std::path::Path::new("/tmp/prompts")));
    }

    #[test]
    fn invalid_numeric_override_is_rejected() {
        let result = QuillConfig::from_lookup(env(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("QUILL_MAX_TOKENS", "many"),
        ]));
        match result {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "QUILL_MAX_TOKENS");
                assert_eq!(value, "many");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}

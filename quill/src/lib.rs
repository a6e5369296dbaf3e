//! # Quill
//!
//! Automated drafting of an academic document with a **state-in, state-out**
//! design: one shared [`DraftState`] flows through a three-stage pipeline
//! (plan → write → edit) driven by a compiled [`StateGraph`], calling an
//! LLM completion endpoint behind a bounded-retry [`Completer`].
//!
//! ## Design principles
//!
//! - **Single state type**: the whole pipeline reads and writes one
//!   [`DraftState`]; each node is a total function over it.
//! - **One authoritative state machine**: the graph is built in one place
//!   ([`DraftRunner`]) — planner once, writer looped until the plan is
//!   exhausted, editor exactly once before termination.
//! - **Explicit failure substitution**: the retry wrapper returns a
//!   [`Completion`] distinguishing success, policy block, and exhausted
//!   retries; sentinel text is substituted where the document wants it,
//!   not hidden inside the client.
//! - **Sequential, one-shot**: no persistence, no concurrency; the only
//!   network calls are the completion endpoint and the doi.org citation
//!   fetch.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`] —
//!   build and run the state machine.
//! - [`agent::draft`]: [`PlanNode`], [`WriteNode`], [`EditNode`],
//!   [`DraftRunner`].
//! - [`state`]: [`DraftState`].
//! - [`llm`]: [`CompletionClient`], [`OpenAiClient`], [`Completer`],
//!   [`MockCompleter`].
//! - [`prompts`]: [`DraftTemplates`] and YAML loading with embedded defaults.
//! - [`output`]: document and bibliography writers.
//! - [`bibliography`]: DOI extraction and citation fetch.
//! - [`config`]: [`QuillConfig`], built once from the environment.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quill::{Completer, DraftRunner, DraftTemplates, MockCompleter};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mock = MockCompleter::with_texts(vec!["outline line", "section text", "edited text"]);
//! let completer = Completer::with_default_tries(Arc::new(mock));
//! let runner = DraftRunner::new(completer, DraftTemplates::default())?;
//! let state = runner.invoke("Write a short review of natural zeolites").await?;
//! println!("{}", state.final_text());
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod bibliography;
pub mod config;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod output;
pub mod prompts;
pub mod state;

pub use agent::draft::{DraftRunner, EditNode, PlanNode, RunError, WriteNode};
pub use config::{ConfigError, QuillConfig};
pub use error::AgentError;
pub use graph::{
    CompilationError, CompiledStateGraph, Next, Node, StateGraph, END, START,
};
pub use llm::{
    Completer, Completion, CompletionClient, LlmError, MockCompleter, OpenAiClient,
    EXHAUSTED_SENTINEL, POLICY_SENTINEL,
};
pub use message::Message;
pub use prompts::DraftTemplates;
pub use state::DraftState;

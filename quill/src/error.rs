//! Crate-level error for stage and graph execution.

use thiserror::Error;

use crate::llm::LlmError;

/// Error from running a node or a compiled graph.
///
/// Stage nodes return this from `Node::run`; the graph runner propagates it
/// unchanged from `CompiledStateGraph::invoke`.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The completion client failed terminally (e.g. context length exceeded).
    #[error("llm error: {0}")]
    Llm(#[from] LlmError),

    /// The graph could not make progress (e.g. next node id resolves to nothing).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

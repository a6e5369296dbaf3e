//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns updated `S` and [`Next`] (continue, jump, or
//! end). State-in, state-out: a node is a total function over the state.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::AgentError;

use super::Next;

/// One step in a graph: state in, (state out, next step).
///
/// The runner uses `Next` to choose the next node (`Continue` = follow edges,
/// `Node(id)` = jump, `End` = stop). Implemented by the drafting stage nodes;
/// see `StateGraph::add_node` and `CompiledStateGraph::invoke`.
#[async_trait]
pub trait Node<S>: Send + Sync
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Node id (e.g. `"planner"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, (state out, next step).
    async fn run(&self, state: S) -> Result<(S, Next), AgentError>;
}

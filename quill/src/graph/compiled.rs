//! Compiled state graph: sequential invoke from the entry node to END.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Instant;

use crate::error::AgentError;

use super::conditional::NextEntry;
use super::logging::{log_graph_complete, log_graph_start, log_node_complete, log_node_start};
use super::next::Next;
use super::node::Node;
use super::state_graph::END;

/// Executable graph produced by `StateGraph::compile`.
///
/// Immutable after compilation. `invoke` runs nodes one at a time, resolving
/// the next node after each step from the node's [`Next`] and the graph's
/// edges, until END. There is no persistence between invocations; each run
/// starts from the state the caller passes in.
pub struct CompiledStateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    first_node_id: String,
    next_map: HashMap<String, NextEntry<S>>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    pub(super) fn new(
        nodes: HashMap<String, Arc<dyn Node<S>>>,
        first_node_id: String,
        next_map: HashMap<String, NextEntry<S>>,
    ) -> Self {
        Self {
            nodes,
            first_node_id,
            next_map,
        }
    }

    /// Entry node id (the single edge from START).
    pub fn first_node_id(&self) -> &str {
        &self.first_node_id
    }

    /// Runs the graph to completion and returns the final state.
    ///
    /// Node errors propagate immediately. A `Next::Continue` from a node with
    /// no outgoing edge, or a jump to an unregistered node, is an
    /// `AgentError::ExecutionFailed`.
    pub async fn invoke(&self, state: S) -> Result<S, AgentError> {
        let run_started = Instant::now();
        log_graph_start(&self.first_node_id);

        let mut current = self.first_node_id.clone();
        let mut state = state;
        let mut step = 0usize;

        loop {
            let node = self.nodes.get(&current).ok_or_else(|| {
                AgentError::ExecutionFailed(format!("unknown node id: {current}"))
            })?;
            step += 1;
            log_node_start(&current, step);
            let node_started = Instant::now();
            let (new_state, next) = node.run(state).await?;
            log_node_complete(&current, step, node_started.elapsed());
            state = new_state;

            let next_id = match next {
                Next::End => break,
                Next::Node(id) => id,
                Next::Continue => match self.next_map.get(&current) {
                    Some(NextEntry::Unconditional(to)) => to.clone(),
                    Some(NextEntry::Conditional(router)) => router.resolve(&state),
                    None => {
                        return Err(AgentError::ExecutionFailed(format!(
                            "no outgoing edge from node: {current}"
                        )))
                    }
                },
            };
            if next_id == END {
                break;
            }
            current = next_id;
        }

        log_graph_complete(step, run_started.elapsed());
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::error::AgentError;
    use crate::graph::{Next, Node, StateGraph, END, START};

    /// Counter state: records the order nodes ran in.
    #[derive(Clone, Debug, Default)]
    struct TraceState {
        visits: Vec<String>,
    }

    struct TraceNode(&'static str);

    #[async_trait]
    impl Node<TraceState> for TraceNode {
        fn id(&self) -> &str {
            self.0
        }
        async fn run(&self, mut state: TraceState) -> Result<(TraceState, Next), AgentError> {
            state.visits.push(self.0.to_string());
            Ok((state, Next::Continue))
        }
    }

    struct FailingNode;

    #[async_trait]
    impl Node<TraceState> for FailingNode {
        fn id(&self) -> &str {
            "fail"
        }
        async fn run(&self, _state: TraceState) -> Result<(TraceState, Next), AgentError> {
            Err(AgentError::ExecutionFailed("boom".to_string()))
        }
    }

    /// **Scenario**: Linear chain a → b → END visits both nodes in order.
    #[tokio::test]
    async fn invoke_runs_linear_chain_in_order() {
        let mut graph = StateGraph::<TraceState>::new();
        graph.add_node("a", Arc::new(TraceNode("a")));
        graph.add_node("b", Arc::new(TraceNode("b")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "b");
        graph.add_edge("b", END);
        let compiled = graph.compile().unwrap();
        let state = compiled.invoke(TraceState::default()).await.unwrap();
        assert_eq!(state.visits, vec!["a", "b"]);
    }

    /// **Scenario**: Conditional self-loop runs the node until the router says END.
    #[tokio::test]
    async fn invoke_follows_conditional_self_loop_until_end() {
        let mut graph = StateGraph::<TraceState>::new();
        graph.add_node("loop", Arc::new(TraceNode("loop")));
        graph.add_edge(START, "loop");
        graph.add_conditional_edges(
            "loop",
            Arc::new(|s: &TraceState| {
                if s.visits.len() < 3 {
                    "again".to_string()
                } else {
                    END.to_string()
                }
            }),
            Some(
                [
                    ("again".to_string(), "loop".to_string()),
                    (END.to_string(), END.to_string()),
                ]
                .into_iter()
                .collect(),
            ),
        );
        let compiled = graph.compile().unwrap();
        let state = compiled.invoke(TraceState::default()).await.unwrap();
        assert_eq!(state.visits.len(), 3);
    }

    /// **Scenario**: A node error propagates out of invoke.
    #[tokio::test]
    async fn invoke_propagates_node_error() {
        let mut graph = StateGraph::<TraceState>::new();
        graph.add_node("fail", Arc::new(FailingNode));
        graph.add_edge(START, "fail");
        graph.add_edge("fail", END);
        let compiled = graph.compile().unwrap();
        let err = compiled.invoke(TraceState::default()).await.unwrap_err();
        assert!(matches!(err, AgentError::ExecutionFailed(_)));
    }
}

//! Drafting graph runner: build, compile, invoke.
//!
//! Graph: START → planner → writer → [should_continue] → writer | editor;
//! editor → END. The editor is always visited before termination, even when
//! nothing requested an edit.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::Completer;
use crate::prompts::DraftTemplates;
use crate::state::DraftState;

use super::edit_node::EditNode;
use super::plan_node::PlanNode;
use super::write_node::WriteNode;

/// Node id of the planner stage.
pub const PLANNER_NODE: &str = "planner";
/// Node id of the writer stage.
pub const WRITER_NODE: &str = "writer";
/// Node id of the editor stage.
pub const EDITOR_NODE: &str = "editor";

/// Routing after the writer: keep writing, or hand off to the editor.
///
/// Both the "edit" and "editor" keys route to the editor; the fall-through
/// key exists so the editor is always visited before END.
fn should_continue(state: &DraftState) -> &'static str {
    if !state.done {
        "continue"
    } else if state.needs_editing {
        "edit"
    } else {
        "editor"
    }
}

/// Error from building or running the drafting graph.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("compilation failed: {0}")]
    Compilation(#[from] CompilationError),
    #[error("execution failed: {0}")]
    Execution(#[from] AgentError),
}

/// The one authoritative drafting state machine.
///
/// Built once from a [`Completer`] and templates; `invoke` creates a fresh
/// [`DraftState`] per run and drives it through the compiled graph.
pub struct DraftRunner {
    compiled: CompiledStateGraph<DraftState>,
}

impl DraftRunner {
    /// Builds and compiles the drafting graph.
    pub fn new(
        completer: Completer,
        templates: DraftTemplates,
    ) -> Result<Self, CompilationError> {
        let templates = Arc::new(templates);

        let path_map: HashMap<String, String> = [
            ("continue".to_string(), WRITER_NODE.to_string()),
            ("edit".to_string(), EDITOR_NODE.to_string()),
            ("editor".to_string(), EDITOR_NODE.to_string()),
        ]
        .into_iter()
        .collect();

        let mut graph = StateGraph::<DraftState>::new();
        graph
            .add_node(
                PLANNER_NODE,
                Arc::new(PlanNode::new(completer.clone(), Arc::clone(&templates))),
            )
            .add_node(
                WRITER_NODE,
                Arc::new(WriteNode::new(completer.clone(), Arc::clone(&templates))),
            )
            .add_node(
                EDITOR_NODE,
                Arc::new(EditNode::new(completer, Arc::clone(&templates))),
            )
            .add_edge(START, PLANNER_NODE)
            .add_edge(PLANNER_NODE, WRITER_NODE)
            .add_conditional_edges(
                WRITER_NODE,
                Arc::new(|state: &DraftState| should_continue(state).to_string()),
                Some(path_map),
            )
            .add_edge(EDITOR_NODE, END);

        Ok(Self {
            compiled: graph.compile()?,
        })
    }

    /// Creates the initial state for a prompt.
    pub fn build_initial_state(prompt: &str) -> DraftState {
        DraftState::new(prompt)
    }

    /// Runs the full pipeline for one prompt and returns the final state.
    pub async fn invoke(&self, prompt: &str) -> Result<DraftState, RunError> {
        let state = Self::build_initial_state(prompt);
        Ok(self.compiled.invoke(state).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(done: bool, needs_editing: bool) -> DraftState {
        DraftState {
            done,
            needs_editing,
            ..DraftState::new("p")
        }
    }

    /// **Scenario**: Not done → keep writing; done → editor, whether or not
    /// an edit was requested.
    #[test]
    fn should_continue_routes_writer_loop_and_editor() {
        assert_eq!(should_continue(&state(false, false)), "continue");
        assert_eq!(should_continue(&state(false, true)), "continue");
        assert_eq!(should_continue(&state(true, true)), "edit");
        assert_eq!(should_continue(&state(true, false)), "editor");
    }
}

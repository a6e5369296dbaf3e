//! Plan node: expand the writing prompt into an ordered list of steps.
//!
//! Reads `state.prompt`, calls the completer with the plan template, splits
//! the response on line breaks (blank lines discarded), and resets the cursor
//! and flags for a fresh write loop.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::Completer;
use crate::message::Message;
use crate::prompts::DraftTemplates;
use crate::state::DraftState;

pub struct PlanNode {
    completer: Completer,
    templates: Arc<DraftTemplates>,
}

impl PlanNode {
    pub fn new(completer: Completer, templates: Arc<DraftTemplates>) -> Self {
        Self {
            completer,
            templates,
        }
    }
}

/// Splits a raw plan response into steps: one per non-blank line, trimmed.
fn parse_steps(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[async_trait]
impl Node<DraftState> for PlanNode {
    fn id(&self) -> &str {
        super::PLANNER_NODE
    }

    async fn run(&self, state: DraftState) -> Result<(DraftState, Next), AgentError> {
        let prompt = self.templates.render_plan(&state.prompt);
        let response = self.completer.complete(&prompt).await?.into_text();
        let steps = parse_steps(&response);
        tracing::info!(step_count = steps.len(), "plan ready");

        let mut messages = state.messages;
        messages.push(Message::user(prompt));
        messages.push(Message::assistant(response.clone()));

        let new_state = DraftState {
            messages,
            prompt: state.prompt,
            plan: Some(response),
            steps,
            current_step_index: 0,
            text: state.text,
            edited_text: state.edited_text,
            references: state.references,
            done: false,
            needs_editing: false,
        };
        Ok((new_state, Next::Continue))
    }
}

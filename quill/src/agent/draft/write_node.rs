//! Write node: execute the current plan step, append to the draft, advance.
//!
//! Invoked once per step by the graph's writer self-loop. When no step
//! remains it flags completion and requests editing without calling the
//! model.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::Completer;
use crate::message::Message;
use crate::prompts::DraftTemplates;
use crate::state::DraftState;

pub struct WriteNode {
    completer: Completer,
    templates: Arc<DraftTemplates>,
}

impl WriteNode {
    pub fn new(completer: Completer, templates: Arc<DraftTemplates>) -> Self {
        Self {
            completer,
            templates,
        }
    }
}

#[async_trait]
impl Node<DraftState> for WriteNode {
    fn id(&self) -> &str {
        super::WRITER_NODE
    }

    async fn run(&self, state: DraftState) -> Result<(DraftState, Next), AgentError> {
        let step = match state.next_step() {
            Some(step) => step.to_string(),
            None => {
                // Plan exhausted (or empty): no model call, hand off to the editor.
                let mut state = state;
                state.done = true;
                state.needs_editing = true;
                return Ok((state, Next::Continue));
            }
        };

        let plan = state.plan.clone().unwrap_or_default();
        let prompt = self
            .templates
            .render_write(&state.prompt, &plan, &state.text, &step);
        let reply = self.completer.complete(&prompt).await?.into_text();

        let mut text = state.text;
        if !text.is_empty() {
            text.push_str("\n\n");
        }
        text.push_str(&reply);

        let next_index = state.current_step_index + 1;
        let exhausted = next_index >= state.steps.len();
        tracing::info!(
            step = state.current_step_index,
            of = state.steps.len(),
            "section written"
        );

        let mut messages = state.messages;
        messages.push(Message::user(prompt));
        messages.push(Message::assistant(reply));

        let new_state = DraftState {
            messages,
            prompt: state.prompt,
            plan: state.plan,
            steps: state.steps,
            current_step_index: next_index,
            text,
            edited_text: state.edited_text,
            references: state.references,
            done: exhausted,
            needs_editing: exhausted,
        };
        Ok((new_state, Next::Continue))
    }
}

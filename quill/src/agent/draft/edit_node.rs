//! Edit node: one polishing pass over the accumulated text.
//!
//! Pass-through when `needs_editing` is false, so a repeated visit can never
//! overwrite an earlier edit.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::Completer;
use crate::message::Message;
use crate::prompts::DraftTemplates;
use crate::state::DraftState;

pub struct EditNode {
    completer: Completer,
    templates: Arc<DraftTemplates>,
}

impl EditNode {
    pub fn new(completer: Completer, templates: Arc<DraftTemplates>) -> Self {
        Self {
            completer,
            templates,
        }
    }
}

#[async_trait]
impl Node<DraftState> for EditNode {
    fn id(&self) -> &str {
        super::EDITOR_NODE
    }

    async fn run(&self, state: DraftState) -> Result<(DraftState, Next), AgentError> {
        if !state.needs_editing {
            return Ok((state, Next::Continue));
        }

        let prompt = self.templates.render_edit(&state.text);
        let reply = self.completer.complete(&prompt).await?.into_text();
        tracing::info!("draft edited");

        let mut messages = state.messages;
        messages.push(Message::user(prompt));
        messages.push(Message::assistant(reply.clone()));

        let new_state = DraftState {
            messages,
            prompt: state.prompt,
            plan: state.plan,
            steps: state.steps,
            current_step_index: state.current_step_index,
            text: state.text,
            edited_text: Some(reply),
            references: state.references,
            done: state.done,
            needs_editing: false,
        };
        Ok((new_state, Next::Continue))
    }
}

//! State for the drafting pipeline.
//!
//! One record, [`DraftState`], flows through the graph: the planner fills the
//! plan and steps, the writer appends text one step at a time, the editor sets
//! the edited text. Created per run, discarded after output; nothing persists
//! across runs.

use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Shared state threaded through planner → writer → editor.
///
/// Invariants:
/// - `current_step_index` stays within `[0, steps.len()]`.
/// - `done` is true exactly when the cursor has reached `steps.len()`.
/// - `edited_text` is set at most once; once set, `needs_editing` is false.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftState {
    /// Conversation history; each stage appends the assistant reply it received.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// The original writing prompt.
    pub prompt: String,
    /// Raw planner response; `None` until the planner has run.
    #[serde(default)]
    pub plan: Option<String>,
    /// Ordered step descriptions parsed from the plan.
    #[serde(default)]
    pub steps: Vec<String>,
    /// Step cursor: index of the step the writer will execute next.
    #[serde(default)]
    pub current_step_index: usize,
    /// Accumulated draft text, append-only until editing.
    #[serde(default)]
    pub text: String,
    /// Polished text; set once by the editor.
    #[serde(default)]
    pub edited_text: Option<String>,
    /// BibTeX entries collected from the final text, when any DOI resolved.
    #[serde(default)]
    pub references: Option<String>,
    /// True when every step has been written.
    #[serde(default)]
    pub done: bool,
    /// True when the editor still has to run.
    #[serde(default)]
    pub needs_editing: bool,
}

impl DraftState {
    /// Creates the initial state for a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// The step the writer will execute next, or `None` when the plan is exhausted.
    pub fn next_step(&self) -> Option<&str> {
        self.steps.get(self.current_step_index).map(String::as_str)
    }

    /// The edited text when present, otherwise the accumulated text.
    pub fn final_text(&self) -> &str {
        self.edited_text.as_deref().unwrap_or(&self.text)
    }
}

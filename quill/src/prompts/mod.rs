//! Drafting prompt templates and placeholder substitution.
//!
//! Three templates (plan / write / edit) with placeholder tokens substituted
//! verbatim before each model call: `$INST$` (the writing prompt), `$PLAN$`
//! (the raw plan), `$TEXT$` (text accumulated so far), `$STEP$` (current
//! step). Default text lives in `quill/prompts/draft.yaml`, embedded at
//! compile time; see [`load`] to override from a directory.

mod load;

pub use load::{load, load_or_default, LoadError};

/// Placeholder for the original writing prompt.
pub const INST_TOKEN: &str = "$INST$";
/// Placeholder for the raw plan text.
pub const PLAN_TOKEN: &str = "$PLAN$";
/// Placeholder for the accumulated draft text.
pub const TEXT_TOKEN: &str = "$TEXT$";
/// Placeholder for the current step description.
pub const STEP_TOKEN: &str = "$STEP$";

/// The three stage templates.
///
/// Construct via [`load_or_default`] (directory override with embedded
/// fallback). The render methods substitute placeholders verbatim; tokens
/// appearing in the substituted values are left untouched because each token
/// is replaced in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftTemplates {
    pub plan: String,
    pub write: String,
    pub edit: String,
}

impl Default for DraftTemplates {
    fn default() -> Self {
        load::default_from_embedded()
    }
}

impl DraftTemplates {
    /// Renders the planning prompt for the original instruction.
    pub fn render_plan(&self, inst: &str) -> String {
        self.plan.replace(INST_TOKEN, inst)
    }

    /// Renders the writing prompt for one step.
    pub fn render_write(&self, inst: &str, plan: &str, text: &str, step: &str) -> String {
        self.write
            .replace(INST_TOKEN, inst)
            .replace(PLAN_TOKEN, plan)
            .replace(TEXT_TOKEN, text)
            .replace(STEP_TOKEN, step)
    }

    /// Renders the editing prompt for the accumulated text.
    pub fn render_edit(&self, text: &str) -> String {
        self.edit.replace(TEXT_TOKEN, text)
    }
}

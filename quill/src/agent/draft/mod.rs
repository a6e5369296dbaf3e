//! Drafting pipeline: plan → write (looped) → edit over a [`DraftState`].
//!
//! [`PlanNode`] expands the prompt into ordered steps, [`WriteNode`] executes
//! one step per visit, [`EditNode`] polishes the accumulated text once.
//! [`DraftRunner`] wires them into the compiled graph and runs it.
//!
//! [`DraftState`]: crate::state::DraftState

mod edit_node;
mod plan_node;
mod runner;
mod write_node;

pub use edit_node::EditNode;
pub use plan_node::PlanNode;
pub use runner::{DraftRunner, RunError, EDITOR_NODE, PLANNER_NODE, WRITER_NODE};
pub use write_node::WriteNode;

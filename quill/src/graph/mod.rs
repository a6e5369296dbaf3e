//! State graph: nodes + linear edges and optional conditional edges.
//!
//! Build with [`StateGraph`]: add nodes and edges (use [`START`] and [`END`]
//! for graph entry/exit), then `compile()` to get a [`CompiledStateGraph`]
//! and `invoke` it with an initial state.

mod compile_error;
mod compiled;
mod conditional;
mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use conditional::{ConditionalRouter, ConditionalRouterFn, NextEntry};
pub use logging::{log_graph_complete, log_graph_start, log_node_complete, log_node_start};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, END, START};

//! Tracing helpers for graph runs: start/complete of the graph and each node.

use std::time::Duration;

/// Logs the start of a graph run.
pub fn log_graph_start(first_node_id: &str) {
    tracing::debug!(first_node = first_node_id, "graph run start");
}

/// Logs the end of a graph run with total steps and elapsed time.
pub fn log_graph_complete(steps: usize, elapsed: Duration) {
    tracing::debug!(steps, elapsed_ms = elapsed.as_millis() as u64, "graph run complete");
}

/// Logs a node about to run.
pub fn log_node_start(node_id: &str, step: usize) {
    tracing::debug!(node = node_id, step, "node start");
}

/// Logs a node that completed, with its elapsed time.
pub fn log_node_complete(node_id: &str, step: usize, elapsed: Duration) {
    tracing::debug!(
        node = node_id,
        step,
        elapsed_ms = elapsed.as_millis() as u64,
        "node complete"
    );
}

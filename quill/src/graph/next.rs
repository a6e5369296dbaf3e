//! Routing decision returned by a node alongside its updated state.

/// What the graph runner should do after a node completes.
///
/// Most nodes return `Continue` and let the graph's edges (including
/// conditional edges) pick the next node. `Node(id)` jumps directly;
/// `End` stops the run regardless of edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Next {
    /// Follow the graph's edges from the current node.
    Continue,
    /// Jump to the named node.
    Node(String),
    /// Stop the run.
    End,
}

//! Conditional edges: route to the next node based on state.
//!
//! After the source node runs, a routing function `(state) -> key` is called;
//! the key is used as the next node id, or looked up in an optional path map.

use std::collections::HashMap;
use std::sync::Arc;

/// Routing function for conditional edges: reads the updated state, returns a key.
pub type ConditionalRouterFn<S> = Arc<dyn Fn(&S) -> String + Send + Sync>;

/// Router plus optional key → node-id map for one source node.
pub struct ConditionalRouter<S> {
    /// Called with the state after the source node ran.
    pub path: ConditionalRouterFn<S>,
    /// When present, the router's key is translated through this map;
    /// a missing key falls through as the node id itself.
    pub path_map: Option<HashMap<String, String>>,
}

impl<S> ConditionalRouter<S> {
    pub fn new(path: ConditionalRouterFn<S>, path_map: Option<HashMap<String, String>>) -> Self {
        Self { path, path_map }
    }

    /// Resolves the next node id for `state`.
    pub fn resolve(&self, state: &S) -> String {
        let key = (self.path)(state);
        match &self.path_map {
            Some(map) => map.get(&key).cloned().unwrap_or(key),
            None => key,
        }
    }
}

impl<S> Clone for ConditionalRouter<S> {
    fn clone(&self) -> Self {
        Self {
            path: Arc::clone(&self.path),
            path_map: self.path_map.clone(),
        }
    }
}

/// Outgoing routing for a node in a compiled graph.
pub enum NextEntry<S> {
    /// Single unconditional edge to the named node (or END).
    Unconditional(String),
    /// Conditional edges resolved from state at runtime.
    Conditional(ConditionalRouter<S>),
}

//! Agent patterns built on the state graph.

pub mod draft;

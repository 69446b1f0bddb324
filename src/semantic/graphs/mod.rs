//! The whole-program call graph, built from the resolution cache.

mod call_graph;

pub use call_graph::{CallGraph, CallableNode};

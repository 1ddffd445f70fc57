//! UI components.

pub mod adjacency_graph;

//! Interactive adjacency-list graph visualization component.
//!
//! Takes a validated adjacency list, places each node at a random position
//! at least a minimum distance from every other node, derives the edges
//! between placed nodes, and renders draggable markers on an HTML canvas.
//! One-way and reciprocal edges are drawn differently.
//!
//! # Example
//!
//! ```ignore
//! use adjacency_graph::{AdjacencyList, GraphCanvas};
//!
//! let adj = AdjacencyList::parse("[[1, 2, 3], [74, 0, 6, 9], [35, 2]]")?;
//!
//! view! { <GraphCanvas data=Signal::derive(move || adj.clone()) /> }
//! ```

mod adjacency;
mod component;
mod config;
mod edges;
mod placement;
mod render;
mod store;
mod theme;
mod types;

pub use adjacency::{AdjacencyList, FormatError};
pub use component::GraphCanvas;
pub use config::GraphConfig;
pub use edges::resolve;
pub use placement::{LayoutError, place_nodes};
pub use store::LayoutStore;
pub use theme::Theme;
pub use types::{Edge, NodeId, Position, PositionMap};

//! Edge derivation from the adjacency list and current node positions.
//!
//! Edges are transient: fully recomputed whenever the adjacency list or any
//! position changes, emitted in row-then-neighbor traversal order (which is
//! also the render stacking order).

use super::adjacency::AdjacencyList;
use super::store::LayoutStore;
use super::types::Edge;

/// Derive the drawable edges for the current positions.
///
/// One edge per (source, neighbor) pair whose endpoints are both placed;
/// pairs with a missing endpoint are silently dropped, so edges can be
/// transiently hidden before the first layout pass completes.
///
/// An edge `u -> v` is bidirectional iff `v`'s row also lists `u` as a
/// neighbor. Classification is by adjacency lookup, so two node pairs that
/// happen to share coordinates cannot be confused for each other.
pub fn resolve(adjacency: &AdjacencyList, store: &LayoutStore) -> Vec<Edge> {
	let mut edges = Vec::with_capacity(adjacency.neighbor_entry_count());
	for row in adjacency.rows() {
		let Some((source, neighbors)) = row.split_first() else {
			continue;
		};
		for target in neighbors {
			let (Some(from), Some(to)) = (store.position(source), store.position(target)) else {
				continue;
			};
			edges.push(Edge {
				x1: from.x,
				y1: from.y,
				x2: to.x,
				y2: to.y,
				bidirectional: adjacency.has_edge(target, source),
			});
		}
	}
	edges
}

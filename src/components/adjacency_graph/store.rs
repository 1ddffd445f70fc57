//! Mutable position state shared between the placement engine and the drag
//! interaction.
//!
//! The placement engine replaces the whole map on every layout pass; drag
//! events overwrite single entries without any separation check. Manual
//! positions are sticky until the next node-set or container-size change
//! invalidates everything.

use log::warn;
use rand::Rng;

use super::adjacency::AdjacencyList;
use super::config::GraphConfig;
use super::placement::{self, LayoutError};
use super::types::{NodeId, Position, PositionMap};

/// Current node positions. Owned by the graph component, written by layout
/// passes and drag gestures, read by edge resolution and rendering.
#[derive(Clone, Debug, Default)]
pub struct LayoutStore {
	positions: PositionMap,
}

impl LayoutStore {
	pub fn position(&self, node: &NodeId) -> Option<Position> {
		self.positions.get(node).copied()
	}

	/// Unconditional overwrite for drag interaction. Deliberately bypasses
	/// the minimum-separation invariant.
	pub fn set_position(&mut self, node: NodeId, position: Position) {
		self.positions.insert(node, position);
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Position)> {
		self.positions.iter()
	}

	/// Run a full layout pass, replacing every position.
	///
	/// Skipped entirely (previous positions retained) while the container is
	/// unmeasured, i.e. either dimension is zero. An infeasible layout keeps
	/// the partial packing and logs the nodes that did not fit.
	pub fn relayout<R: Rng>(
		&mut self,
		adjacency: &AdjacencyList,
		width: f64,
		height: f64,
		config: &GraphConfig,
		rng: &mut R,
	) {
		if width <= 0.0 || height <= 0.0 {
			return;
		}

		let nodes = adjacency.nodes();
		match placement::place_nodes(
			&nodes,
			width,
			height,
			config.min_separation(),
			config.max_attempts,
			rng,
		) {
			Ok(map) => self.positions = map,
			Err(LayoutError::Infeasible { placed, unplaced }) => {
				warn!(
					"adjacency-graph: container {width}x{height} too small, {} of {} node(s) unplaced: {unplaced:?}",
					unplaced.len(),
					nodes.len()
				);
				self.positions = placed;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn adjacency(raw: &str) -> AdjacencyList {
		AdjacencyList::parse(raw).unwrap()
	}

	#[test]
	fn relayout_places_all_nodes() {
		let adj = adjacency("[[1, 2, 3], [74, 0, 6, 9], [35, 2]]");
		let mut store = LayoutStore::default();
		let mut rng = SmallRng::seed_from_u64(1);
		store.relayout(&adj, 800.0, 600.0, &GraphConfig::default(), &mut rng);
		assert_eq!(store.len(), adj.nodes().len());
	}

	#[test]
	fn zero_sized_container_keeps_previous_positions() {
		let adj = adjacency("[[1, 2]]");
		let mut store = LayoutStore::default();
		let mut rng = SmallRng::seed_from_u64(2);
		store.relayout(&adj, 400.0, 300.0, &GraphConfig::default(), &mut rng);
		let before: Vec<_> = adj.nodes().iter().filter_map(|n| store.position(n)).collect();

		store.relayout(&adj, 0.0, 0.0, &GraphConfig::default(), &mut rng);
		let after: Vec<_> = adj.nodes().iter().filter_map(|n| store.position(n)).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn relayout_replaces_the_map_wholesale() {
		let one_node = adjacency("[[1]]");
		let mut store = LayoutStore::default();
		let mut rng = SmallRng::seed_from_u64(3);
		store.relayout(&one_node, 400.0, 300.0, &GraphConfig::default(), &mut rng);

		let other = adjacency("[[2, 3]]");
		store.relayout(&other, 400.0, 300.0, &GraphConfig::default(), &mut rng);
		assert!(store.position(&1.into()).is_none());
		assert!(store.position(&2.into()).is_some());
		assert!(store.position(&3.into()).is_some());
	}

	#[test]
	fn set_position_bypasses_separation() {
		let adj = adjacency("[[1, 2]]");
		let mut store = LayoutStore::default();
		let mut rng = SmallRng::seed_from_u64(4);
		store.relayout(&adj, 500.0, 500.0, &GraphConfig::default(), &mut rng);

		let target = store.position(&2.into()).unwrap();
		store.set_position(1.into(), target);
		assert_eq!(store.position(&1.into()), Some(target));
	}

	#[test]
	fn infeasible_relayout_keeps_partial_packing() {
		let adj = adjacency("[[1, 2, 3, 4, 5]]");
		let mut store = LayoutStore::default();
		let mut rng = SmallRng::seed_from_u64(5);
		store.relayout(&adj, 10.0, 10.0, &GraphConfig::default(), &mut rng);
		// Only one node fits a 10x10 box at 75px separation.
		assert_eq!(store.len(), 1);
	}
}

//! Random node placement with minimum-separation rejection sampling.
//!
//! Each node gets a uniform random candidate position inside the container;
//! candidates closer than `min_separation` to any already-placed node are
//! rejected and resampled. Sampling is capped per node so an infeasible
//! container (too many nodes for the area) terminates with an explicit
//! error instead of spinning forever.

use rand::Rng;
use thiserror::Error;

use super::types::{NodeId, Position, PositionMap};

/// Layout failed to place every node. `placed` still satisfies the
/// separation invariant and packs as many nodes as the sampler managed.
#[derive(Debug, Error)]
pub enum LayoutError {
	#[error("could not place {} node(s) after attempt cap: {unplaced:?}", unplaced.len())]
	Infeasible {
		placed: PositionMap,
		unplaced: Vec<NodeId>,
	},
}

/// Place `nodes` inside `[0, width) x [0, height)` so that no two positions
/// are closer than `min_separation`.
///
/// Nodes are visited in the order given; a node already present in the map
/// (duplicate identifier) is skipped, so the first occurrence wins. Each
/// node gets at most `max_attempts` samples; nodes that exhaust the cap are
/// collected into [`LayoutError::Infeasible`] and the remaining nodes are
/// still tried.
///
/// A zero-sized container yields an empty map; callers treat that as "not
/// yet measured" and keep their previous positions.
pub fn place_nodes<R: Rng>(
	nodes: &[NodeId],
	width: f64,
	height: f64,
	min_separation: f64,
	max_attempts: u32,
	rng: &mut R,
) -> Result<PositionMap, LayoutError> {
	let mut placed = PositionMap::new();
	if width <= 0.0 || height <= 0.0 {
		return Ok(placed);
	}

	let mut unplaced = Vec::new();
	for node in nodes {
		if placed.contains_key(node) {
			continue;
		}

		let mut accepted = None;
		for _ in 0..max_attempts {
			let candidate = Position::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
			if separated(candidate, &placed, min_separation) {
				accepted = Some(candidate);
				break;
			}
		}

		match accepted {
			Some(position) => {
				placed.insert(node.clone(), position);
			}
			None => unplaced.push(node.clone()),
		}
	}

	if unplaced.is_empty() {
		Ok(placed)
	} else {
		Err(LayoutError::Infeasible { placed, unplaced })
	}
}

fn separated(candidate: Position, placed: &PositionMap, min_separation: f64) -> bool {
	placed
		.values()
		.all(|&p| candidate.distance_to(p) >= min_separation)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn ids(ns: &[i64]) -> Vec<NodeId> {
		ns.iter().map(|&n| n.into()).collect()
	}

	#[test]
	fn places_every_node_exactly_once() {
		let nodes = ids(&[1, 2, 3, 74, 0, 6, 9, 35]);
		let mut rng = SmallRng::seed_from_u64(7);
		let map = place_nodes(&nodes, 800.0, 600.0, 75.0, 1000, &mut rng).unwrap();
		assert_eq!(map.len(), nodes.len());
		for node in &nodes {
			assert!(map.contains_key(node));
		}
	}

	#[test]
	fn respects_minimum_separation() {
		let nodes = ids(&[1, 2, 3, 4, 5, 6]);
		let mut rng = SmallRng::seed_from_u64(42);
		let map = place_nodes(&nodes, 500.0, 500.0, 75.0, 1000, &mut rng).unwrap();
		let positions: Vec<Position> = map.values().copied().collect();
		for (i, a) in positions.iter().enumerate() {
			for b in &positions[i + 1..] {
				assert!(a.distance_to(*b) >= 75.0);
			}
		}
	}

	#[test]
	fn positions_stay_inside_container() {
		let nodes = ids(&[1, 2, 3, 4]);
		let mut rng = SmallRng::seed_from_u64(3);
		let map = place_nodes(&nodes, 200.0, 100.0, 10.0, 1000, &mut rng).unwrap();
		for p in map.values() {
			assert!(p.x >= 0.0 && p.x < 200.0);
			assert!(p.y >= 0.0 && p.y < 100.0);
		}
	}

	#[test]
	fn duplicate_ids_keep_first_placement() {
		let nodes = ids(&[1, 2, 1, 1]);
		let mut rng = SmallRng::seed_from_u64(11);
		let map = place_nodes(&nodes, 400.0, 400.0, 50.0, 1000, &mut rng).unwrap();
		assert_eq!(map.len(), 2);
	}

	#[test]
	fn zero_sized_container_yields_empty_map() {
		let nodes = ids(&[1, 2]);
		let mut rng = SmallRng::seed_from_u64(5);
		let map = place_nodes(&nodes, 0.0, 0.0, 75.0, 1000, &mut rng).unwrap();
		assert!(map.is_empty());
	}

	#[test]
	fn infeasible_container_terminates_with_partial_packing() {
		// A 10x10 box cannot hold many nodes 75 apart.
		let nodes = ids(&[1, 2, 3, 4, 5]);
		let mut rng = SmallRng::seed_from_u64(9);
		let err = place_nodes(&nodes, 10.0, 10.0, 75.0, 200, &mut rng).unwrap_err();
		let LayoutError::Infeasible { placed, unplaced } = err;
		// First node always fits; the rest cannot.
		assert_eq!(placed.len(), 1);
		assert_eq!(unplaced.len(), 4);
		for p in placed.values() {
			for q in placed.values() {
				if p != q {
					assert!(p.distance_to(*q) >= 75.0);
				}
			}
		}
	}
}

//! Adjacency-list model: parses the user's textual input and answers
//! adjacency queries for edge derivation.
//!
//! A row `[u, v1, v2, ...]` means `u` has directed edges to each `vi`.
//! The derived node set is the union of every identifier appearing anywhere
//! in any row, ordered by first occurrence.

use serde_json::Value;
use thiserror::Error;

use super::types::NodeId;

/// Rejected adjacency input. The caller keeps its previous list on error.
#[derive(Debug, Error)]
pub enum FormatError {
	#[error("invalid adjacency input: {0}")]
	Syntax(#[from] serde_json::Error),
	#[error("top-level value is not an array")]
	NotAnArray,
	#[error("row {index} is not an array")]
	RowNotAnArray { index: usize },
}

/// A validated adjacency list. Replaced wholesale on every successful parse,
/// never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdjacencyList {
	rows: Vec<Vec<NodeId>>,
}

impl AdjacencyList {
	/// Parse a JSON array-of-arrays, e.g. `[[1, 2, 3], [74, 0, 6, 9], [35, 2]]`.
	///
	/// Element type, row length, and duplicates are unconstrained; an empty
	/// row contributes nothing and a 1-element row contributes an isolated
	/// node.
	pub fn parse(raw: &str) -> Result<Self, FormatError> {
		let value: Value = serde_json::from_str(raw)?;
		let Value::Array(raw_rows) = value else {
			return Err(FormatError::NotAnArray);
		};

		let mut rows = Vec::with_capacity(raw_rows.len());
		for (index, row) in raw_rows.iter().enumerate() {
			let Value::Array(items) = row else {
				return Err(FormatError::RowNotAnArray { index });
			};
			rows.push(items.iter().map(NodeId::from_value).collect());
		}
		Ok(Self { rows })
	}

	pub fn rows(&self) -> &[Vec<NodeId>] {
		&self.rows
	}

	/// Every identifier appearing in any row, deduplicated, in visiting
	/// order: outer row order, then in-row order, first occurrence wins.
	/// This is the order the placement engine walks.
	pub fn nodes(&self) -> Vec<NodeId> {
		let mut nodes = Vec::new();
		for row in &self.rows {
			for id in row {
				if !nodes.contains(id) {
					nodes.push(id.clone());
				}
			}
		}
		nodes
	}

	/// Total neighbor entries across all rows (upper bound on edge count).
	pub fn neighbor_entry_count(&self) -> usize {
		self.rows.iter().map(|row| row.len().saturating_sub(1)).sum()
	}

	/// True iff some row with source `u` lists `v` as a neighbor.
	pub fn has_edge(&self, u: &NodeId, v: &NodeId) -> bool {
		self.rows
			.iter()
			.any(|row| row.first() == Some(u) && row[1..].contains(v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_nested_integer_lists() {
		let adj = AdjacencyList::parse("[[1, 2, 3], [74, 0, 6, 9], [35, 2]]").unwrap();
		assert_eq!(adj.rows().len(), 3);
		assert_eq!(adj.rows()[1].len(), 4);
		assert_eq!(adj.neighbor_entry_count(), 7);
	}

	#[test]
	fn node_order_is_first_occurrence() {
		let adj = AdjacencyList::parse("[[1, 2], [2, 1, 3]]").unwrap();
		let nodes: Vec<NodeId> = adj.nodes();
		assert_eq!(nodes, vec![1.into(), 2.into(), 3.into()]);
	}

	#[test]
	fn rejects_non_json_input() {
		assert!(matches!(
			AdjacencyList::parse("not an array"),
			Err(FormatError::Syntax(_))
		));
	}

	#[test]
	fn rejects_scalar_top_level() {
		assert!(matches!(
			AdjacencyList::parse("42"),
			Err(FormatError::NotAnArray)
		));
	}

	#[test]
	fn rejects_non_array_row() {
		assert!(matches!(
			AdjacencyList::parse("[[1,2],\"x\"]"),
			Err(FormatError::RowNotAnArray { index: 1 })
		));
	}

	#[test]
	fn tolerates_empty_and_single_element_rows() {
		let adj = AdjacencyList::parse("[[], [7]]").unwrap();
		assert_eq!(adj.nodes(), vec![7.into()]);
		assert_eq!(adj.neighbor_entry_count(), 0);
	}

	#[test]
	fn admits_mixed_element_types() {
		let adj = AdjacencyList::parse("[[\"a\", 1, 2.5]]").unwrap();
		assert_eq!(
			adj.nodes(),
			vec!["a".into(), 1.into(), NodeId::Key("2.5".into())]
		);
	}

	#[test]
	fn has_edge_follows_row_direction() {
		let adj = AdjacencyList::parse("[[1, 2], [2, 1], [3, 1]]").unwrap();
		assert!(adj.has_edge(&1.into(), &2.into()));
		assert!(adj.has_edge(&2.into(), &1.into()));
		assert!(adj.has_edge(&3.into(), &1.into()));
		assert!(!adj.has_edge(&1.into(), &3.into()));
	}
}

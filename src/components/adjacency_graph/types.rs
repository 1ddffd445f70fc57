//! Core value types for the adjacency graph: node identifiers, positions,
//! and derived edges.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

/// Identifies a node in the graph. Identity is by value, not reference.
///
/// Adjacency input is JSON, so in practice identifiers are small integers,
/// but any JSON value is admitted: strings key as themselves, everything
/// else keys by its compact JSON text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
	/// Integer identifier (the common case).
	Int(i64),
	/// Any non-integer identifier, keyed by its textual form.
	Key(String),
}

impl NodeId {
	/// Convert a parsed JSON value into a node identifier.
	pub fn from_value(value: &Value) -> Self {
		match value {
			Value::Number(n) => match n.as_i64() {
				Some(i) => NodeId::Int(i),
				None => NodeId::Key(n.to_string()),
			},
			Value::String(s) => NodeId::Key(s.clone()),
			other => NodeId::Key(other.to_string()),
		}
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			NodeId::Int(n) => write!(f, "{n}"),
			NodeId::Key(s) => f.write_str(s),
		}
	}
}

impl From<i64> for NodeId {
	fn from(n: i64) -> Self {
		NodeId::Int(n)
	}
}

impl From<&str> for NodeId {
	fn from(s: &str) -> Self {
		NodeId::Key(s.to_string())
	}
}

/// A node's location in container coordinates. Non-negative, bounded by the
/// container extent when produced by the placement engine; drag overwrites
/// are taken as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to another position.
	pub fn distance_to(self, other: Position) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Node positions keyed by identifier. Rebuilt wholesale by every layout
/// pass; individual entries are overwritten by drag interaction.
pub type PositionMap = HashMap<NodeId, Position>;

/// A renderable line segment between two placed nodes, derived from one
/// (source, neighbor) pair of the adjacency list. Never stored: edges are
/// recomputed whenever the adjacency list or any position changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	/// True when the target's row also lists the source as a neighbor.
	pub bidirectional: bool,
}

impl Edge {
	/// Segment length.
	pub fn length(&self) -> f64 {
		let (dx, dy) = (self.x2 - self.x1, self.y2 - self.y1);
		(dx * dx + dy * dy).sqrt()
	}

	/// Orientation in degrees, `atan2(dy, dx)`, for rotating a segment
	/// anchored at its start point.
	pub fn angle_deg(&self) -> f64 {
		let (dx, dy) = (self.x2 - self.x1, self.y2 - self.y1);
		dy.atan2(dx).to_degrees()
	}
}

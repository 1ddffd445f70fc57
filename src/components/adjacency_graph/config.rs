//! Tunable layout and visual parameters, centralized so the component and
//! the pure layout/edge functions share one source of truth.

/// Layout and rendering configuration for the graph view.
#[derive(Clone, Debug)]
pub struct GraphConfig {
	/// Node visual size unit (the reference width the separation factor
	/// multiplies). Default 5.0, matching a 5x5 marker footprint.
	pub node_size: f64,
	/// Minimum-separation multiplier applied to `node_size`. The threshold
	/// conflates visual diameter with padding; kept configurable rather
	/// than second-guessed.
	pub separation_factor: f64,
	/// Per-node cap on rejection-sampling attempts before the layout pass
	/// reports the node as unplaceable.
	pub max_attempts: u32,
	/// Marker radius in pixels when drawn on the canvas.
	pub node_radius: f64,
	/// Cursor-to-center distance within which a mousedown grabs a node.
	pub hit_radius: f64,
	/// Edge segment thickness in pixels.
	pub edge_thickness: f64,
}

impl GraphConfig {
	/// Minimum pairwise distance enforced by the placement engine.
	pub fn min_separation(&self) -> f64 {
		self.separation_factor * self.node_size
	}
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			node_size: 5.0,
			separation_factor: 15.0,
			max_attempts: 1000,
			node_radius: 14.0,
			hit_radius: 18.0,
			edge_thickness: 5.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_separation_is_factor_times_size() {
		let config = GraphConfig::default();
		assert_eq!(config.min_separation(), 75.0);
	}
}

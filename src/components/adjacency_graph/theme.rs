//! Colors for the graph view.

/// RGB color with a CSS string form.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Visual style for the graph view.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub node_fill: Color,
	pub node_label: Color,
	/// One-way edges, drawn with an arrowhead at the target.
	pub edge: Color,
	/// Reciprocal edges, drawn dashed without arrowheads.
	pub edge_bidirectional: Color,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(17, 24, 39),
			node_fill: Color::rgb(34, 197, 94),
			node_label: Color::rgb(255, 255, 255),
			edge: Color::rgb(255, 165, 0),
			edge_bidirectional: Color::rgb(56, 189, 248),
		}
	}
}

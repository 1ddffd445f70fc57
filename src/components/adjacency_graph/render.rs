//! Canvas rendering for the adjacency graph.
//!
//! Draws in two passes for z-ordering: edges first, then node markers on
//! top. Edge endpoints are trimmed by the node radius so segments meet the
//! marker border instead of piercing it.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::config::GraphConfig;
use super::store::LayoutStore;
use super::theme::Theme;
use super::types::Edge;

/// Render the full graph view: background, edges, then nodes.
pub fn render(
	ctx: &CanvasRenderingContext2d,
	store: &LayoutStore,
	edges: &[Edge],
	config: &GraphConfig,
	theme: &Theme,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, width, height);

	for edge in edges {
		draw_edge(ctx, edge, config, theme);
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());

	for (node, position) in store.iter() {
		ctx.begin_path();
		let _ = ctx.arc(position.x, position.y, config.node_radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&theme.node_fill.to_css());
		ctx.fill();

		ctx.set_fill_style_str(&theme.node_label.to_css());
		ctx.set_font("bold 12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(&node.to_string(), position.x, position.y);
	}
}

fn draw_edge(ctx: &CanvasRenderingContext2d, edge: &Edge, config: &GraphConfig, theme: &Theme) {
	let dist = edge.length();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = ((edge.x2 - edge.x1) / dist, (edge.y2 - edge.y1) / dist);
	let trim = config.node_radius;

	if edge.bidirectional {
		ctx.set_stroke_style_str(&theme.edge_bidirectional.to_css());
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(8.0),
			&JsValue::from_f64(4.0),
		));
	} else {
		ctx.set_stroke_style_str(&theme.edge.to_css());
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}
	ctx.set_line_width(config.edge_thickness);

	ctx.begin_path();
	ctx.move_to(edge.x1 + ux * trim, edge.y1 + uy * trim);
	ctx.line_to(edge.x2 - ux * trim, edge.y2 - uy * trim);
	ctx.stroke();

	if !edge.bidirectional {
		draw_arrowhead(ctx, edge, config, theme, ux, uy);
	}
}

fn draw_arrowhead(
	ctx: &CanvasRenderingContext2d,
	edge: &Edge,
	config: &GraphConfig,
	theme: &Theme,
	ux: f64,
	uy: f64,
) {
	let size = config.edge_thickness * 2.0;
	let (tip_x, tip_y) = (
		edge.x2 - ux * config.node_radius,
		edge.y2 - uy * config.node_radius,
	);
	let (back_x, back_y) = (tip_x - ux * size, tip_y - uy * size);
	let (px, py) = (-uy * size * 0.6, ux * size * 0.6);

	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_fill_style_str(&theme.edge.to_css());
	ctx.begin_path();
	ctx.move_to(tip_x, tip_y);
	ctx.line_to(back_x + px, back_y + py);
	ctx.line_to(back_x - px, back_y - py);
	ctx.close_path();
	ctx.fill();
}

//! Leptos component wrapping the adjacency graph canvas.
//!
//! The component owns all graph state behind an `Rc<RefCell<...>>` and
//! recomputes synchronously inside the handler of whichever event fired:
//! adjacency replacement and window resize trigger a full layout pass
//! (every position reshuffles), a drag move overwrites one position and
//! re-derives the edges. There is no animation loop; the view only changes
//! when one of those events does.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::adjacency::AdjacencyList;
use super::config::GraphConfig;
use super::edges;
use super::render;
use super::store::LayoutStore;
use super::theme::Theme;
use super::types::{Edge, NodeId, Position};

/// Tracks an in-progress node drag gesture.
#[derive(Clone, Debug, Default)]
struct DragState {
	active: bool,
	node: Option<NodeId>,
	/// Offset from the cursor to the grabbed node's center, so the marker
	/// does not jump to the cursor on the first move.
	grab_dx: f64,
	grab_dy: f64,
}

/// Bundles graph state with the drawing context and configuration.
struct GraphContext {
	adjacency: AdjacencyList,
	store: LayoutStore,
	edges: Vec<Edge>,
	drag: DragState,
	config: GraphConfig,
	theme: Theme,
	rng: SmallRng,
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl GraphContext {
	/// Full layout pass plus edge re-derivation and redraw. Skips layout
	/// while the container is unmeasured, so previous positions survive.
	fn relayout(&mut self) {
		self.store.relayout(
			&self.adjacency,
			self.width,
			self.height,
			&self.config,
			&mut self.rng,
		);
		self.refresh_edges();
	}

	/// Re-derive edges from current positions and redraw.
	fn refresh_edges(&mut self) {
		self.edges = edges::resolve(&self.adjacency, &self.store);
		render::render(
			&self.ctx,
			&self.store,
			&self.edges,
			&self.config,
			&self.theme,
			self.width,
			self.height,
		);
	}

	/// The placed node under the cursor, if any.
	fn node_at(&self, x: f64, y: f64) -> Option<NodeId> {
		let mut found = None;
		for (node, position) in self.store.iter() {
			if position.distance_to(Position::new(x, y)) < self.config.hit_radius {
				found = Some(node.clone());
			}
		}
		found
	}
}

fn cursor_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Renders an interactive adjacency-list graph on a canvas element.
///
/// Pass the parsed adjacency list via the reactive `data` signal; every
/// change re-runs the full layout. The component sizes itself to its parent
/// container unless explicit `width`/`height` are given, and re-lays-out on
/// window resize. Node markers are draggable.
#[component]
pub fn GraphCanvas(
	#[prop(into)] data: Signal<AdjacencyList>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<GraphContext>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, resize_cb_init) = (context.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let adjacency = data.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = measure(&canvas, width, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut graph = GraphContext {
			adjacency,
			store: LayoutStore::default(),
			edges: Vec::new(),
			drag: DragState::default(),
			config: GraphConfig::default(),
			theme: Theme::default(),
			rng: SmallRng::from_entropy(),
			ctx,
			width: w,
			height: h,
		};
		graph.relayout();
		*context_init.borrow_mut() = Some(graph);

		if resize_cb_init.borrow().is_none() {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let (nw, nh) = measure(&canvas_resize, width, height);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.width = nw;
					c.height = nh;
					c.relayout();
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = cursor_position(&canvas, &ev);

		if let Some(ref mut c) = *context_md.borrow_mut() {
			if let Some(node) = c.node_at(x, y) {
				let position = c.store.position(&node).unwrap_or_default();
				c.drag.active = true;
				c.drag.grab_dx = position.x - x;
				c.drag.grab_dy = position.y - y;
				c.drag.node = Some(node);
			}
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let (x, y) = cursor_position(&canvas, &ev);

		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.drag.active {
				if let Some(node) = c.drag.node.clone() {
					let position = Position::new(x + c.drag.grab_dx, y + c.drag.grab_dy);
					c.store.set_position(node, position);
					c.refresh_edges();
				}
			}
		}
	};

	let context_mu = context.clone();
	let end_drag = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.drag.active = false;
			c.drag.node = None;
		}
	};
	let on_mouseup = end_drag.clone();
	let on_mouseleave = end_drag;

	view! {
		<canvas
			node_ref=canvas_ref
			class="adjacency-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}

/// Canvas size: explicit props, else the parent container's client extent.
/// An unmeasured container reports zero and the layout pass skips itself.
fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	(
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

//! adjacency-graph: Interactive adjacency-list graph visualizer.
//!
//! This crate provides a WASM-based graph component: the user enters a 2D
//! adjacency list, nodes are placed randomly with a minimum-separation
//! constraint, edges are derived and classified as one-way or reciprocal,
//! and markers can be dragged around the canvas.

// Feature-activation dependency (wasm entropy for `rand`), never named.
#[cfg(target_arch = "wasm32")]
use getrandom as _;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;

pub use components::adjacency_graph::{
	AdjacencyList, Edge, FormatError, GraphCanvas, GraphConfig, LayoutError, LayoutStore, NodeId,
	Position, PositionMap, Theme, place_nodes, resolve,
};

/// The adjacency list shown before the user submits their own.
const DEFAULT_INPUT: &str = "[[1, 2, 3], [74, 0, 6, 9], [35, 2]]";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("adjacency-graph: logging initialized");
}

/// Main application component.
/// Textarea for adjacency input, a generate button, and the graph canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let input = RwSignal::new(DEFAULT_INPUT.to_string());
	let graph = RwSignal::new(AdjacencyList::parse(DEFAULT_INPUT).unwrap_or_default());
	let parse_error = RwSignal::new(None::<String>);

	// Failed parses keep the previous graph; the error is shown instead.
	let on_generate = move |_| match AdjacencyList::parse(&input.get()) {
		Ok(adjacency) => {
			info!(
				"adjacency-graph: parsed {} row(s), {} node(s)",
				adjacency.rows().len(),
				adjacency.nodes().len()
			);
			graph.set(adjacency);
			parse_error.set(None);
		}
		Err(e) => {
			warn!("adjacency-graph: rejected input: {e}");
			parse_error.set(Some(e.to_string()));
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Graph Generator" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="graph-app">
			<h1>"Graph Generator"</h1>
			<div class="graph-input">
				<textarea
					placeholder="Enter adjacency list like: [[1, 2, 3], [74, 0, 6, 9], [35, 2]]"
					prop:value=move || input.get()
					on:input=move |ev| input.set(event_target_value(&ev))
				></textarea>
				<button on:click=on_generate>"Generate Graph"</button>
			</div>
			{move || {
				parse_error
					.get()
					.map(|msg| view! { <p class="graph-error">{msg}</p> })
			}}
			<div class="graph-container">
				<GraphCanvas data=graph />
			</div>
		</div>
	}
}

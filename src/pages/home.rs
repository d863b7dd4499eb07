use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;
use log::warn;

use crate::components::controls::GraphControls;
use crate::components::force_graph::{ForceGraphCanvas, Highlights};
use crate::config::VisualizerConfig;
use crate::graph::{Edge, GraphWarning, TimerPacer, TraversalObserver, inspect_start, traverse};
use crate::session::GraphSession;

/// Feeds traversal events to the canvas and the visit order readout.
struct PageObserver {
	highlights: RwSignal<Highlights>,
	visit_order: RwSignal<Vec<String>>,
}

impl TraversalObserver for PageObserver {
	fn on_visit_vertex(&mut self, id: &str) {
		self.highlights.update(|h| h.mark_vertex(id));
		self.visit_order.update(|order| order.push(id.to_owned()));
	}

	fn on_visit_edge(&mut self, edge: &Edge) {
		self.highlights.update(|h| h.mark_edge(edge));
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = query.with_untracked(|q| VisualizerConfig::from_query(|key| q.get(key)));

	let vertex_count = RwSignal::new(config.initial_vertex_count.to_string());
	let edges = RwSignal::new(config.initial_edges.clone());
	let start = RwSignal::new(config.initial_start.clone());
	let highlights = RwSignal::new(Highlights::default());
	let visit_order = RwSignal::new(Vec::<String>::new());
	let start_warning = RwSignal::new(None::<GraphWarning>);

	let session_config = config.clone();
	let session = Memo::new(move |_| {
		GraphSession::from_input(&vertex_count.get(), &edges.get(), &session_config)
	});

	// a new graph starts with a clean canvas
	Effect::new(move |_| {
		session.track();
		highlights.set(Highlights::default());
		visit_order.set(Vec::new());
		start_warning.set(None);
	});

	let graph = Signal::derive(move || session.with(|s| s.graph.clone()));
	let warnings = Signal::derive(move || {
		let mut all = session.with(|s| s.warnings.clone());
		all.extend(start_warning.get());
		all
	});

	let delay = config.step_delay;
	let on_run = Callback::new(move |_: ()| {
		let graph = session.with_untracked(|s| s.graph.clone());
		let start_id = start.get_untracked();

		let warning = inspect_start(&graph, &start_id);
		if let Some(w) = &warning {
			warn!("{}", w);
		}
		start_warning.set(warning);
		highlights.set(Highlights::default());
		visit_order.set(Vec::new());

		spawn_local(async move {
			let mut observer = PageObserver {
				highlights,
				visit_order,
			};
			traverse(&graph, &start_id, &mut observer, &TimerPacer, delay).await;
		});
	});

	view! {
		<div class="dfs-page">
			<aside class="dfs-sidebar">
				<h1>"Depth-First Search"</h1>
				<p class="subtitle">"Edit the graph, drag nodes around, then run the search."</p>
				<GraphControls
					vertex_count=vertex_count
					edges=edges
					start=start
					warnings=warnings
					visit_order=visit_order
					on_run=on_run
				/>
			</aside>
			<ForceGraphCanvas
				graph=graph
				highlights=highlights
				layout=config.layout.clone()
				width=config.canvas_width
				height=config.canvas_height
			/>
		</div>
	}
}

//! Input fields that feed the graph session and start traversals.

use leptos::prelude::*;

use crate::graph::GraphWarning;

/// Vertex count, edge list and start vertex fields plus the run button.
#[component]
pub fn GraphControls(
	vertex_count: RwSignal<String>,
	edges: RwSignal<String>,
	start: RwSignal<String>,
	#[prop(into)] warnings: Signal<Vec<GraphWarning>>,
	#[prop(into)] visit_order: Signal<Vec<String>>,
	on_run: Callback<()>,
) -> impl IntoView {
	view! {
		<form class="graph-controls" on:submit=move |ev| {
			ev.prevent_default();
			on_run.run(());
		}>
			<label for="vertex-count">"Vertices"</label>
			<input
				id="vertex-count"
				type="number"
				min="0"
				prop:value=move || vertex_count.get()
				on:input=move |ev| vertex_count.set(event_target_value(&ev))
			/>

			<label for="edges-input">"Edges (one \"source target\" pair per line)"</label>
			<textarea
				id="edges-input"
				rows="8"
				prop:value=move || edges.get()
				on:input=move |ev| edges.set(event_target_value(&ev))
			/>

			<label for="start-node">"Start vertex"</label>
			<input
				id="start-node"
				type="text"
				prop:value=move || start.get()
				on:input=move |ev| start.set(event_target_value(&ev))
			/>

			<button type="submit">"Run DFS"</button>

			<Show when=move || !visit_order.with(Vec::is_empty)>
				<p class="visit-order">
					"Visit order: " {move || visit_order.get().join(" → ")}
				</p>
			</Show>

			<ul class="graph-warnings">
				{move || {
					warnings
						.get()
						.into_iter()
						.map(|w| view! { <li>{w.to_string()}</li> })
						.collect_view()
				}}
			</ul>
		</form>
	}
}

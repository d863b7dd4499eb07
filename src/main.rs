use dfs_graph_canvas::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();

	mount_to_body(|| {
		view! {
			<App />
		}
	})
}

use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use log::{debug, info};

use super::model::{Edge, Graph};

/// Receives every visit as it happens, in traversal order.
pub trait TraversalObserver {
	/// Called once when a vertex is marked visited.
	fn on_visit_vertex(&mut self, id: &str);
	/// Called once when an edge leads to an unvisited vertex.
	fn on_visit_edge(&mut self, edge: &Edge);
}

impl TraversalObserver for () {
	fn on_visit_vertex(&mut self, _: &str) {}
	fn on_visit_edge(&mut self, _: &Edge) {}
}

/// Suspends the traversal between steps so the host can render.
pub trait Pacer {
	/// Resolves after `delay`.
	fn pause(&self, delay: Duration) -> impl Future<Output = ()>;
}

/// Pauses on a browser `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerPacer;

impl Pacer for TimerPacer {
	fn pause(&self, delay: Duration) -> impl Future<Output = ()> {
		gloo_timers::future::sleep(delay)
	}
}

/// Never suspends; every step runs back to back.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPause;

impl Pacer for NoPause {
	fn pause(&self, _: Duration) -> impl Future<Output = ()> {
		std::future::ready(())
	}
}

/// Outcome of one traversal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
	/// Vertices in the order they were visited.
	pub order: Vec<String>,
	/// Edges in the order they were traversed, as entered.
	pub edges: Vec<Edge>,
}

#[derive(Default)]
struct TraversalState {
	visited: HashSet<String>,
	result: Traversal,
}

impl TraversalState {
	fn visit(&mut self, id: &str) {
		if self.visited.insert(id.to_owned()) {
			self.result.order.push(id.to_owned());
		}
	}

	/// First edge at or after `from` that leads from `vertex` to an unvisited
	/// vertex, with that vertex.
	fn next_step<'g>(
		&self,
		graph: &'g Graph,
		vertex: &str,
		from: usize,
	) -> Option<(usize, &'g Edge, &'g str)> {
		graph
			.edges
			.iter()
			.enumerate()
			.skip(from)
			.find_map(|(i, edge)| {
				let (source, target) = (edge.source.as_deref(), edge.target.as_deref());
				let other = match (source, target) {
					(Some(s), Some(t)) if s == vertex && !self.visited.contains(t) => t,
					(Some(s), Some(t)) if t == vertex && !self.visited.contains(s) => s,
					_ => return None,
				};
				Some((i, edge, other))
			})
	}
}

struct Frame<'g> {
	vertex: &'g str,
	cursor: usize,
}

/// Depth-first traversal from `start`, paced by `delay` after every vertex and
/// every edge.
///
/// Neighbors come from a single pass over the edge list in input order; after
/// a descent returns, the pass resumes at the next edge and checks it against
/// the grown visited set. `start` is visited even when it is not a vertex of
/// the graph. Edges missing an endpoint never lead anywhere.
pub async fn traverse<O, P>(
	graph: &Graph,
	start: &str,
	observer: &mut O,
	pacer: &P,
	delay: Duration,
) -> Traversal
where
	O: TraversalObserver,
	P: Pacer,
{
	let mut state = TraversalState::default();

	state.visit(start);
	info!("Visiting vertex: {}", start);
	observer.on_visit_vertex(start);
	pacer.pause(delay).await;

	let mut stack = vec![Frame {
		vertex: start,
		cursor: 0,
	}];

	while let Some(frame) = stack.last_mut() {
		let Some((index, edge, next)) = state.next_step(graph, frame.vertex, frame.cursor) else {
			stack.pop();
			continue;
		};
		frame.cursor = index + 1;

		state.result.edges.push(edge.clone());
		info!("Visiting edge: {} -> {}", frame.vertex, next);
		observer.on_visit_edge(edge);
		pacer.pause(delay).await;

		state.visit(next);
		info!("Visiting vertex: {}", next);
		observer.on_visit_vertex(next);
		pacer.pause(delay).await;

		stack.push(Frame {
			vertex: next,
			cursor: 0,
		});
	}

	debug!(
		"Traversal from {} reached {} of {} vertices",
		start,
		state.result.order.len(),
		graph.vertices.len()
	);
	info!("Visit order: {:?}", state.result.order);
	state.result
}

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};

use super::types::Highlights;
use crate::config::LayoutConfig;
use crate::graph::Graph;

pub const NODE_RADIUS: f64 = 15.0;
pub const HIT_RADIUS: f64 = 18.0;

const INITIAL_SPREAD: f64 = 100.0;
const HIGHLIGHT_SPEED: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
}

/// Screen position of the layout origin.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// A drawn link; parallel edges and both orientations share one.
#[derive(Clone, Debug)]
struct LinkState {
	ids: (String, String),
	highlight_t: f64,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	highlights: Highlights,
	node_t: HashMap<DefaultNodeIdx, f64>,
	links: HashMap<(DefaultNodeIdx, DefaultNodeIdx), LinkState>,
}

impl ForceGraphState {
	pub fn new(data: &Graph, layout: &LayoutConfig, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(layout.simulation_parameters());
		let mut id_to_idx = HashMap::new();
		let mut links = HashMap::new();

		for (i, vertex) in data.vertices.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.vertices.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (INITIAL_SPREAD * angle.cos()) as f32,
				y: (INITIAL_SPREAD * angle.sin()) as f32,
				mass: layout.node_mass,
				is_anchor: false,
				user_data: NodeInfo {
					id: vertex.id.clone(),
				},
			});
			id_to_idx.insert(vertex.id.as_str(), idx);
		}

		// links to ids outside the vertex set stay in the graph for traversal
		// but have nothing to attach to here
		for (source, target) in data.edges.iter().filter_map(|e| e.endpoints()) {
			let (Some(&src), Some(&tgt)) = (id_to_idx.get(source), id_to_idx.get(target)) else {
				continue;
			};
			if src == tgt || links.contains_key(&link_key(src, tgt)) {
				continue;
			}
			graph.add_edge(src, tgt, EdgeData::default());
			links.insert(
				link_key(src, tgt),
				LinkState {
					ids: (source.to_owned(), target.to_owned()),
					highlight_t: 0.0,
				},
			);
		}

		Self {
			graph,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
			},
			drag: DragState::default(),
			width,
			height,
			flow_time: 0.0,
			highlights: Highlights::default(),
			node_t: HashMap::new(),
			links,
		}
	}

	pub fn set_highlights(&mut self, highlights: Highlights) {
		self.highlights = highlights;
	}

	pub fn highlights(&self) -> &Highlights {
		&self.highlights
	}

	/// Eased visited amount of a node, 0 to 1.
	pub fn node_highlight(&self, idx: DefaultNodeIdx) -> f64 {
		self.node_t.get(&idx).copied().unwrap_or(0.0)
	}

	/// Eased traversed amount of the link between two nodes, 0 to 1.
	pub fn link_highlight(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> f64 {
		self.links
			.get(&link_key(a, b))
			.map_or(0.0, |link| link.highlight_t)
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(sx - self.transform.x, sy - self.transform.y)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Grabs the node under the pointer, if any, and pins it.
	pub fn start_drag(&mut self, x: f64, y: f64) -> bool {
		let Some(idx) = self.node_at_position(x, y) else {
			return false;
		};
		self.drag.active = true;
		self.drag.node_idx = Some(idx);
		self.drag.start_x = x;
		self.drag.start_y = y;
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				self.drag.node_start_x = node.data.x;
				self.drag.node_start_y = node.data.y;
				node.data.is_anchor = true;
			}
		});
		true
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		let (true, Some(idx)) = (self.drag.active, self.drag.node_idx) else {
			return;
		};
		let (nx, ny) = (
			self.drag.node_start_x + (x - self.drag.start_x) as f32,
			self.drag.node_start_y + (y - self.drag.start_y) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = nx;
				node.data.y = ny;
			}
		});
	}

	/// Lets go of the dragged node so the simulation moves it again.
	pub fn end_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx.take() {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag.active = false;
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;
		self.ease_highlights(dt as f64);
	}

	fn ease_highlights(&mut self, dt: f64) {
		let step = (HIGHLIGHT_SPEED * dt).min(1.0);
		let (highlights, node_t) = (&self.highlights, &mut self.node_t);
		self.graph.visit_nodes(|node| {
			let target = if highlights.has_vertex(&node.data.user_data.id) {
				1.0
			} else {
				0.0
			};
			let t = node_t.entry(node.index()).or_insert(0.0);
			*t = settle(*t + (target - *t) * step, target);
		});

		for link in self.links.values_mut() {
			let target = if self.highlights.has_edge(&link.ids.0, &link.ids.1) {
				1.0
			} else {
				0.0
			};
			link.highlight_t = settle(link.highlight_t + (target - link.highlight_t) * step, target);
		}
	}
}

fn link_key(a: DefaultNodeIdx, b: DefaultNodeIdx) -> (DefaultNodeIdx, DefaultNodeIdx) {
	if a <= b { (a, b) } else { (b, a) }
}

fn settle(t: f64, target: f64) -> f64 {
	if (t - target).abs() < 0.01 { target } else { t }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Edge, build_graph};

	fn state(graph: &Graph) -> ForceGraphState {
		ForceGraphState::new(graph, &LayoutConfig::default(), 800.0, 600.0)
	}

	fn index_of(state: &ForceGraphState, id: &str) -> Option<DefaultNodeIdx> {
		let mut found = None;
		state.graph.visit_nodes(|node| {
			if node.data.user_data.id == id {
				found = Some(node.index());
			}
		});
		found
	}

	fn position_of(state: &ForceGraphState, idx: DefaultNodeIdx) -> (f64, f64) {
		let mut pos = (f64::NAN, f64::NAN);
		state.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = (node.x() as f64, node.y() as f64);
			}
		});
		pos
	}

	#[test]
	fn test_unknown_and_repeated_links_are_not_drawn() {
		let graph = build_graph(3, ["0 1", "1 0", "0 1", "1 1", "2 9", "2"]);
		let s = state(&graph);

		assert_eq!(s.links.len(), 1);
	}

	#[test]
	fn test_node_at_position_uses_view_origin() {
		let graph = build_graph(1, Vec::<&str>::new());
		let s = state(&graph);
		let idx = index_of(&s, "0");

		// a single node starts at (spread, 0) around the canvas center
		assert_eq!(s.node_at_position(400.0 + INITIAL_SPREAD, 300.0), idx);
		assert_eq!(s.node_at_position(0.0, 0.0), None);
	}

	#[test]
	fn test_drag_moves_and_releases_node() {
		let graph = build_graph(1, Vec::<&str>::new());
		let mut s = state(&graph);
		let idx = index_of(&s, "0").unwrap();
		let (x, y) = (400.0 + INITIAL_SPREAD, 300.0);

		assert!(s.start_drag(x, y));
		s.drag_to(x + 30.0, y - 20.0);
		let (nx, ny) = position_of(&s, idx);
		assert!((nx - (INITIAL_SPREAD + 30.0)).abs() < 1e-3);
		assert!((ny + 20.0).abs() < 1e-3);

		s.end_drag();
		assert!(!s.drag.active);
		assert_eq!(s.drag.node_idx, None);
	}

	#[test]
	fn test_drag_on_background_does_nothing() {
		let graph = build_graph(1, Vec::<&str>::new());
		let mut s = state(&graph);

		assert!(!s.start_drag(0.0, 0.0));
		assert!(!s.drag.active);
	}

	#[test]
	fn test_highlights_ease_in() {
		let graph = build_graph(2, ["1 0"]);
		let mut s = state(&graph);
		let (a, b) = (index_of(&s, "0").unwrap(), index_of(&s, "1").unwrap());

		let mut highlights = Highlights::default();
		highlights.mark_vertex("0");
		highlights.mark_edge(&Edge::new("0", "1"));
		s.set_highlights(highlights);

		s.tick(0.016);
		let early = s.node_highlight(a);
		assert!(early > 0.0 && early < 1.0);
		assert!(s.link_highlight(b, a) > 0.0);
		assert_eq!(s.node_highlight(b), 0.0);

		for _ in 0..200 {
			s.tick(0.016);
		}
		assert_eq!(s.node_highlight(a), 1.0);
		assert_eq!(s.link_highlight(a, b), 1.0);
	}
}

use std::collections::HashSet;

use crate::graph::Edge;

/// Vertices and edges a traversal has marked so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlights {
	vertices: HashSet<String>,
	edges: HashSet<(String, String)>,
	current: Option<String>,
}

impl Highlights {
	pub fn mark_vertex(&mut self, id: &str) {
		self.vertices.insert(id.to_owned());
		self.current = Some(id.to_owned());
	}

	/// Marks every drawn link between the edge's endpoints, either way round.
	pub fn mark_edge(&mut self, edge: &Edge) {
		if let Some((a, b)) = edge.endpoints() {
			self.edges.insert(edge_key(a, b));
		}
	}

	pub fn has_vertex(&self, id: &str) -> bool {
		self.vertices.contains(id)
	}

	pub fn has_edge(&self, a: &str, b: &str) -> bool {
		self.edges.contains(&edge_key(a, b))
	}

	/// Most recently visited vertex.
	pub fn current(&self) -> Option<&str> {
		self.current.as_deref()
	}
}

fn edge_key(a: &str, b: &str) -> (String, String) {
	if a <= b {
		(a.to_owned(), b.to_owned())
	} else {
		(b.to_owned(), a.to_owned())
	}
}

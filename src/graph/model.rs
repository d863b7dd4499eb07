/// A named node of the graph.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
	/// Identifier, unique within a graph.
	pub id: String,
}

/// An undirected connection between two vertices.
///
/// Endpoints are optional: an edge line with fewer than two tokens still
/// produces an edge, with the missing side left as `None`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// First token of the edge line.
	pub source: Option<String>,
	/// Second token of the edge line.
	pub target: Option<String>,
}

impl Edge {
	/// Creates an edge with both endpoints present.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: Some(source.into()),
			target: Some(target.into()),
		}
	}

	/// Both endpoints, if the edge has them.
	pub fn endpoints(&self) -> Option<(&str, &str)> {
		match (&self.source, &self.target) {
			(Some(s), Some(t)) => Some((s.as_str(), t.as_str())),
			_ => None,
		}
	}

	/// Whether either endpoint is `id`.
	pub fn touches(&self, id: &str) -> bool {
		self.source.as_deref() == Some(id) || self.target.as_deref() == Some(id)
	}
}

/// Vertex set plus edge list, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	/// Vertices `"0"` to `"n-1"`.
	pub vertices: Vec<Vertex>,
	/// Edges exactly as they were entered, parallel edges and self-loops included.
	pub edges: Vec<Edge>,
}

impl Graph {
	/// Whether `id` names one of the generated vertices.
	pub fn contains_vertex(&self, id: &str) -> bool {
		self.vertices.iter().any(|v| v.id == id)
	}

	/// A graph without vertices.
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}
}

/// Builds a graph with `vertex_count` vertices and one edge per line.
///
/// Lines are split on whitespace. Whatever the split produces is kept: missing
/// tokens become `None` and extra tokens are dropped, nothing is rejected.
pub fn build_graph<'a>(vertex_count: usize, edge_lines: impl IntoIterator<Item = &'a str>) -> Graph {
	let vertices = (0..vertex_count)
		.map(|i| Vertex { id: i.to_string() })
		.collect();

	let edges = edge_lines
		.into_iter()
		.map(|line| {
			let mut tokens = line.split_whitespace();
			Edge {
				source: tokens.next().map(str::to_owned),
				target: tokens.next().map(str::to_owned),
			}
		})
		.collect();

	Graph { vertices, edges }
}

/// Splits the edge list field into lines, skipping blank ones.
pub fn edge_lines(text: &str) -> Vec<&str> {
	text.lines().filter(|line| !line.trim().is_empty()).collect()
}

/// Reads the vertex count field the way a `0..n` counting loop would.
///
/// Anything that is not a positive finite number counts as zero; a fractional
/// count rounds up, since the loop still runs for the last partial step.
pub fn parse_vertex_count(text: &str) -> usize {
	match text.trim().parse::<f64>() {
		Ok(n) if n.is_finite() && n > 0.0 => n.ceil() as usize,
		_ => 0,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_build_graph_generates_decimal_ids() {
		let graph = build_graph(4, ["0 1", "1 2", "2 3"]);

		let ids: Vec<&str> = graph.vertices.iter().map(|v| v.id.as_str()).collect();
		assert_eq!(ids, vec!["0", "1", "2", "3"]);
		assert_eq!(
			graph.edges,
			vec![Edge::new("0", "1"), Edge::new("1", "2"), Edge::new("2", "3")]
		);
	}

	#[test]
	fn test_build_graph_zero_vertices() {
		let graph = build_graph(0, ["0 1"]);

		assert!(graph.is_empty());
		assert_eq!(graph.edges.len(), 1);
	}

	#[test]
	fn test_build_graph_no_edge_lines() {
		let graph = build_graph(3, Vec::<&str>::new());

		assert_eq!(graph.vertices.len(), 3);
		assert!(graph.edges.is_empty());
	}

	#[test]
	fn test_build_graph_keeps_malformed_lines() {
		let graph = build_graph(3, ["0", "1 2 7", "", "2\t\t0"]);

		assert_eq!(
			graph.edges,
			vec![
				Edge {
					source: Some("0".into()),
					target: None,
				},
				Edge::new("1", "2"),
				Edge {
					source: None,
					target: None,
				},
				Edge::new("2", "0"),
			]
		);
	}

	#[test]
	fn test_build_graph_keeps_duplicates_and_self_loops() {
		let graph = build_graph(2, ["0 1", "1 0", "1 1"]);

		assert_eq!(graph.edges.len(), 3);
		assert_eq!(graph.edges[2], Edge::new("1", "1"));
	}

	#[test]
	fn test_build_graph_is_repeatable() {
		let lines = ["0 1", "0 2", "3 9"];

		assert_eq!(build_graph(5, lines), build_graph(5, lines));
	}

	#[test]
	fn test_edge_helpers() {
		let edge = Edge::new("a", "b");
		assert!(edge.touches("a"));
		assert!(edge.touches("b"));
		assert!(!edge.touches("c"));
		assert_eq!(edge.endpoints(), Some(("a", "b")));

		let dangling = Edge {
			source: Some("a".into()),
			target: None,
		};
		assert!(dangling.touches("a"));
		assert_eq!(dangling.endpoints(), None);
	}

	#[test]
	fn test_contains_vertex() {
		let graph = build_graph(2, Vec::<&str>::new());

		assert!(graph.contains_vertex("1"));
		assert!(!graph.contains_vertex("2"));
		assert!(!graph.contains_vertex("01"));
	}

	#[test]
	fn test_edge_lines_skips_blank_lines() {
		assert_eq!(edge_lines("0 1\n\n  \n1 2\n"), vec!["0 1", "1 2"]);
		assert!(edge_lines("").is_empty());
		assert!(edge_lines("\n \n").is_empty());
	}

	#[test]
	fn test_parse_vertex_count() {
		assert_eq!(parse_vertex_count("4"), 4);
		assert_eq!(parse_vertex_count(" 12 "), 12);
		assert_eq!(parse_vertex_count("0"), 0);
		assert_eq!(parse_vertex_count("-3"), 0);
		assert_eq!(parse_vertex_count("abc"), 0);
		assert_eq!(parse_vertex_count(""), 0);
		assert_eq!(parse_vertex_count("NaN"), 0);
		assert_eq!(parse_vertex_count("inf"), 0);
		assert_eq!(parse_vertex_count("2.5"), 3);
	}
}

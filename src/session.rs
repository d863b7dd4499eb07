//! The graph currently on screen, rebuilt from the input fields.

use log::warn;

use crate::config::VisualizerConfig;
use crate::graph::{
	Graph, GraphWarning, build_graph, edge_lines, inspect_edge_lines, parse_vertex_count,
};

/// One build of the graph from the vertex count and edge list fields.
///
/// A session is never edited: any change to either field produces a new one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphSession {
	/// The graph the canvas draws and traversals run over.
	pub graph: Graph,
	/// What the permissive parsing let through.
	pub warnings: Vec<GraphWarning>,
}

impl GraphSession {
	/// Builds a session from raw field contents.
	pub fn from_input(count_text: &str, edges_text: &str, config: &VisualizerConfig) -> Self {
		let mut warnings = Vec::new();

		let requested = parse_vertex_count(count_text);
		if requested == 0 && !is_zero(count_text) {
			warnings.push(GraphWarning::InvalidVertexCount(count_text.to_owned()));
		}
		let vertex_count = if requested > config.max_vertices {
			warnings.push(GraphWarning::VertexCountClamped {
				requested,
				max: config.max_vertices,
			});
			config.max_vertices
		} else {
			requested
		};

		warnings.extend(inspect_edge_lines(edges_text.lines(), vertex_count));
		let graph = build_graph(vertex_count, edge_lines(edges_text));

		for warning in &warnings {
			warn!("{}", warning);
		}

		Self { graph, warnings }
	}
}

fn is_zero(text: &str) -> bool {
	text.trim().parse::<f64>().is_ok_and(|n| n == 0.0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Edge;

	#[test]
	fn test_from_input() {
		let session = GraphSession::from_input("4", "0 1\n1 2\n2 3\n", &VisualizerConfig::default());

		assert_eq!(session.graph.vertices.len(), 4);
		assert_eq!(session.graph.edges.len(), 3);
		assert!(session.warnings.is_empty());
	}

	#[test]
	fn test_empty_fields() {
		let session = GraphSession::from_input("0", "", &VisualizerConfig::default());

		assert!(session.graph.is_empty());
		assert!(session.graph.edges.is_empty());
		assert!(session.warnings.is_empty());
	}

	#[test]
	fn test_invalid_count_is_zero_with_warning() {
		let session = GraphSession::from_input("lots", "0 1", &VisualizerConfig::default());

		assert!(session.graph.is_empty());
		assert_eq!(session.graph.edges, vec![Edge::new("0", "1")]);
		assert_eq!(session.warnings[0], GraphWarning::InvalidVertexCount("lots".into()));
	}

	#[test]
	fn test_count_is_clamped() {
		let config = VisualizerConfig {
			max_vertices: 10,
			..VisualizerConfig::default()
		};
		let session = GraphSession::from_input("25", "", &config);

		assert_eq!(session.graph.vertices.len(), 10);
		assert_eq!(
			session.warnings,
			vec![GraphWarning::VertexCountClamped {
				requested: 25,
				max: 10,
			}]
		);
	}

	#[test]
	fn test_malformed_lines_still_build() {
		let session = GraphSession::from_input("3", "0 1\n2\n1 2", &VisualizerConfig::default());

		assert_eq!(session.graph.edges.len(), 3);
		assert_eq!(
			session.warnings,
			vec![GraphWarning::MalformedEdgeLine { line: 2, tokens: 1 }]
		);
	}

	#[test]
	fn test_warnings_number_lines_as_typed() {
		let session = GraphSession::from_input("3", "0 1\n\n2\n", &VisualizerConfig::default());

		assert_eq!(session.graph.edges.len(), 2);
		assert_eq!(
			session.warnings,
			vec![GraphWarning::MalformedEdgeLine { line: 3, tokens: 1 }]
		);
	}

	#[test]
	fn test_same_input_same_session() {
		let config = VisualizerConfig::default();

		assert_eq!(
			GraphSession::from_input("5", "0 1\n3 4", &config),
			GraphSession::from_input("5", "0 1\n3 4", &config)
		);
	}
}

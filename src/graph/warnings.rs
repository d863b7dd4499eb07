//! Diagnostics for questionable input.
//!
//! None of these change how a graph is built or traversed; they only describe
//! what the permissive parsing did with the input.

use thiserror::Error;

use super::model::Graph;

/// Something about the input that the graph or traversal silently tolerated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GraphWarning {
	/// An edge line without exactly two tokens.
	#[error("malformed edge line {line}: expected 2 vertices, found {tokens}")]
	MalformedEdgeLine {
		/// 1-based line number.
		line: usize,
		/// Number of whitespace-separated tokens on the line.
		tokens: usize,
	},
	/// An edge endpoint that is not a generated vertex id.
	#[error("edge line {line} refers to unknown vertex {id:?}")]
	UnknownEndpoint {
		/// 1-based line number.
		line: usize,
		/// The offending token.
		id: String,
	},
	/// A traversal start that is not a generated vertex id.
	#[error("unknown start vertex {0:?}")]
	UnknownStartVertex(String),
	/// The vertex count field could not be read as a positive number.
	#[error("vertex count {0:?} is not a positive number, using 0")]
	InvalidVertexCount(String),
	/// The vertex count was above the configured maximum.
	#[error("vertex count {requested} exceeds the maximum of {max}")]
	VertexCountClamped {
		/// Count as entered.
		requested: usize,
		/// Count actually used.
		max: usize,
	},
}

/// Warnings for edge lines that are malformed or point outside `0..vertex_count`.
///
/// Takes the field's raw lines: blank lines produce no edge and no warning but
/// still count towards the reported line numbers.
pub fn inspect_edge_lines<'a>(
	lines: impl IntoIterator<Item = &'a str>,
	vertex_count: usize,
) -> Vec<GraphWarning> {
	let is_vertex = |id: &str| id.parse::<usize>().is_ok_and(|n| n < vertex_count && n.to_string() == id);
	let mut warnings = Vec::new();

	for (i, line) in lines.into_iter().enumerate() {
		if line.trim().is_empty() {
			continue;
		}
		let tokens: Vec<&str> = line.split_whitespace().collect();
		if tokens.len() != 2 {
			warnings.push(GraphWarning::MalformedEdgeLine {
				line: i + 1,
				tokens: tokens.len(),
			});
		}
		for id in tokens.iter().take(2).filter(|id| !is_vertex(id)) {
			warnings.push(GraphWarning::UnknownEndpoint {
				line: i + 1,
				id: (*id).to_owned(),
			});
		}
	}

	warnings
}

/// Warning for a start vertex the graph does not contain.
pub fn inspect_start(graph: &Graph, start: &str) -> Option<GraphWarning> {
	(!graph.contains_vertex(start)).then(|| GraphWarning::UnknownStartVertex(start.to_owned()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::build_graph;

	#[test]
	fn test_well_formed_lines_have_no_warnings() {
		assert!(inspect_edge_lines(["0 1", "1 2", "2\t0"], 3).is_empty());
	}

	#[test]
	fn test_malformed_lines() {
		let warnings = inspect_edge_lines(["0", "0 1", "0 1 2"], 3);

		assert_eq!(
			warnings,
			vec![
				GraphWarning::MalformedEdgeLine { line: 1, tokens: 1 },
				GraphWarning::MalformedEdgeLine { line: 3, tokens: 3 },
			]
		);
	}

	#[test]
	fn test_unknown_endpoints() {
		let warnings = inspect_edge_lines(["0 3", "a 1", "01 1"], 3);

		assert_eq!(
			warnings,
			vec![
				GraphWarning::UnknownEndpoint {
					line: 1,
					id: "3".into(),
				},
				GraphWarning::UnknownEndpoint {
					line: 2,
					id: "a".into(),
				},
				GraphWarning::UnknownEndpoint {
					line: 3,
					id: "01".into(),
				},
			]
		);
	}

	#[test]
	fn test_blank_lines_keep_line_numbers() {
		let warnings = inspect_edge_lines(["0 1", "", "  ", "2", "1 7"], 3);

		assert_eq!(
			warnings,
			vec![
				GraphWarning::MalformedEdgeLine { line: 4, tokens: 1 },
				GraphWarning::UnknownEndpoint {
					line: 5,
					id: "7".into(),
				},
			]
		);
	}

	#[test]
	fn test_extra_tokens_are_not_checked_as_endpoints() {
		let warnings = inspect_edge_lines(["0 1 zz"], 2);

		assert_eq!(warnings, vec![GraphWarning::MalformedEdgeLine { line: 1, tokens: 3 }]);
	}

	#[test]
	fn test_inspect_start() {
		let graph = build_graph(2, ["0 1"]);

		assert_eq!(inspect_start(&graph, "1"), None);
		assert_eq!(
			inspect_start(&graph, " 0"),
			Some(GraphWarning::UnknownStartVertex(" 0".into()))
		);
		assert_eq!(
			inspect_start(&graph, "5"),
			Some(GraphWarning::UnknownStartVertex("5".into()))
		);
	}

	#[test]
	fn test_warning_messages() {
		assert_eq!(
			GraphWarning::MalformedEdgeLine { line: 2, tokens: 1 }.to_string(),
			"malformed edge line 2: expected 2 vertices, found 1"
		);
		assert_eq!(
			GraphWarning::UnknownStartVertex("x".into()).to_string(),
			"unknown start vertex \"x\""
		);
		assert_eq!(
			GraphWarning::VertexCountClamped {
				requested: 900,
				max: 500,
			}
			.to_string(),
			"vertex count 900 exceeds the maximum of 500"
		);
	}
}

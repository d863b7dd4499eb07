//! Visualizer settings and their URL query overrides.

use std::time::Duration;

use force_graph::SimulationParameters;

/// Physics settings handed to the force simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Repulsion between every pair of nodes.
	pub force_charge: f32,
	/// Spring stiffness along edges.
	pub force_spring: f32,
	/// Upper bound of the force applied in one step.
	pub force_max: f32,
	/// Velocity scale.
	pub node_speed: f32,
	/// Velocity damping per step.
	pub damping_factor: f32,
	/// Mass of every node.
	pub node_mass: f32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			node_mass: 10.0,
		}
	}
}

impl LayoutConfig {
	/// Parameters for a fresh [`force_graph::ForceGraph`].
	pub fn simulation_parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Everything the home page can be tuned with.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerConfig {
	/// Pause after each visited vertex and each traversed edge.
	pub step_delay: Duration,
	/// Vertex counts above this are clamped.
	pub max_vertices: usize,
	/// Initial contents of the vertex count field.
	pub initial_vertex_count: usize,
	/// Initial contents of the edge list field.
	pub initial_edges: String,
	/// Initial contents of the start vertex field.
	pub initial_start: String,
	/// Canvas width in CSS pixels.
	pub canvas_width: f64,
	/// Canvas height in CSS pixels.
	pub canvas_height: f64,
	/// Force simulation settings.
	pub layout: LayoutConfig,
}

impl Default for VisualizerConfig {
	fn default() -> Self {
		Self {
			step_delay: Duration::from_millis(500),
			max_vertices: 500,
			initial_vertex_count: 6,
			initial_edges: "0 1\n0 2\n1 3\n1 4\n2 5".into(),
			initial_start: "0".into(),
			canvas_width: 800.0,
			canvas_height: 600.0,
			layout: LayoutConfig::default(),
		}
	}
}

impl VisualizerConfig {
	/// Applies `delay`, `vertices` and `start` query parameters on top of the
	/// defaults. Values that do not parse are ignored.
	pub fn from_query(query: impl Fn(&str) -> Option<String>) -> Self {
		let mut config = Self::default();

		if let Some(ms) = query("delay").and_then(|v| v.trim().parse::<u64>().ok()) {
			config.step_delay = Duration::from_millis(ms);
		}
		if let Some(n) = query("vertices").and_then(|v| v.trim().parse::<usize>().ok()) {
			config.initial_vertex_count = n.min(config.max_vertices);
		}
		if let Some(start) = query("start").filter(|s| !s.trim().is_empty()) {
			config.initial_start = start.trim().to_owned();
		}

		config
	}
}

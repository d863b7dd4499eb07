//! Graph model and the paced depth-first traversal that animates it.

mod model;
mod traversal;
mod warnings;

pub use model::{Edge, Graph, Vertex, build_graph, edge_lines, parse_vertex_count};
pub use traversal::{NoPause, Pacer, TimerPacer, Traversal, TraversalObserver, traverse};
pub use warnings::{GraphWarning, inspect_edge_lines, inspect_start};

//! Weighted route analysis for small labeled graphs: build a graph from a
//! text definition or an adjacency matrix, enumerate every simple route
//! between two nodes, and pick the cheapest and the most expensive one.

pub mod graph;
pub mod matrix;
pub mod parse;
pub mod report;
pub mod routes;

pub use graph::{Edge, Graph, GraphError};
pub use matrix::{format_matrix, parse_matrix};
pub use report::{AnalysisPayload, RoutePayload, analysis_payload, format_path, render_text};
pub use routes::{Route, RouteAnalysis, all_simple_paths, analyze_routes, path_weight, shortest_path};

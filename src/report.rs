use serde::Serialize;

use crate::graph::Graph;
use crate::routes::{Route, RouteAnalysis};

#[derive(Debug, Clone, Serialize)]
pub struct RoutePayload {
    pub path: Vec<String>,
    pub cost: u64,
    pub edges: usize,
}

impl From<&Route> for RoutePayload {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path.clone(),
            cost: route.cost,
            edges: route.hops(),
        }
    }
}

/// The full route query result in the shape consumed by report renderers:
/// the scored route list in discovery order plus the two selections.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPayload {
    pub source: String,
    pub target: String,
    pub directed: bool,
    pub nodes: usize,
    pub edges: usize,
    pub routes: Vec<RoutePayload>,
    pub shortest: Option<RoutePayload>,
    pub longest_simple: Option<RoutePayload>,
}

pub fn analysis_payload(
    graph: &Graph,
    source: &str,
    target: &str,
    analysis: &RouteAnalysis,
) -> AnalysisPayload {
    AnalysisPayload {
        source: source.to_string(),
        target: target.to_string(),
        directed: graph.directed(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        routes: analysis.routes.iter().map(RoutePayload::from).collect(),
        shortest: analysis.shortest.as_ref().map(RoutePayload::from),
        longest_simple: analysis.longest_simple.as_ref().map(RoutePayload::from),
    }
}

pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}

/// Renders the human-readable route report.
pub fn render_text(graph: &Graph, source: &str, target: &str, analysis: &RouteAnalysis) -> String {
    let kind = if graph.directed() {
        "directed"
    } else {
        "undirected"
    };

    let mut lines = Vec::new();
    lines.push(format!(
        "Routes from {source} to {target} ({kind}, {} nodes, {} edges)",
        graph.node_count(),
        graph.edge_count()
    ));

    if analysis.routes.is_empty() {
        lines.push(format!("  no route found between '{source}' and '{target}'"));
    } else {
        let rendered: Vec<String> = analysis
            .routes
            .iter()
            .map(|route| format_path(&route.path))
            .collect();
        let width = rendered.iter().map(String::len).max().unwrap_or(0);

        for (route, text) in analysis.routes.iter().zip(&rendered) {
            lines.push(format!("  {text:<width$}  cost {}", route.cost));
        }
    }

    if let Some(route) = &analysis.shortest {
        lines.push(format!(
            "Shortest: {} (cost {})",
            format_path(&route.path),
            route.cost
        ));
    }
    if let Some(route) = &analysis.longest_simple {
        lines.push(format!(
            "Longest simple: {} (cost {})",
            format_path(&route.path),
            route.cost
        ));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::analyze_routes;

    fn demo_graph() -> Graph {
        let mut graph = Graph::new(false);
        graph.add_edge("A", "B", 5).unwrap();
        graph.add_edge("B", "C", 8).unwrap();
        graph.add_edge("C", "D", 3).unwrap();
        graph.add_edge("A", "D", 20).unwrap();
        graph
    }

    #[test]
    fn text_report_lists_routes_and_selections() {
        let graph = demo_graph();
        let analysis = analyze_routes(&graph, "A", "D", None).unwrap();
        let report = render_text(&graph, "A", "D", &analysis);

        assert!(report.contains("Routes from A to D (undirected, 4 nodes, 4 edges)"));
        assert!(report.contains("A -> B -> C -> D"));
        assert!(report.contains("cost 16"));
        assert!(report.contains("Shortest: A -> B -> C -> D (cost 16)"));
        assert!(report.contains("Longest simple: A -> D (cost 20)"));
    }

    #[test]
    fn text_report_marks_the_empty_result() {
        let mut graph = Graph::new(false);
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_node("C");

        let analysis = analyze_routes(&graph, "A", "C", None).unwrap();
        let report = render_text(&graph, "A", "C", &analysis);

        assert!(report.contains("no route found between 'A' and 'C'"));
        assert!(!report.contains("Shortest:"));
        assert!(!report.contains("Longest simple:"));
    }

    #[test]
    fn payload_serializes_the_query_contract() {
        let graph = demo_graph();
        let analysis = analyze_routes(&graph, "A", "D", None).unwrap();
        let payload = analysis_payload(&graph, "A", "D", &analysis);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["source"], "A");
        assert_eq!(value["directed"], false);
        assert_eq!(value["routes"].as_array().unwrap().len(), 2);
        assert_eq!(value["shortest"]["cost"], 16);
        assert_eq!(value["shortest"]["edges"], 3);
        assert_eq!(value["longest_simple"]["cost"], 20);
    }

    #[test]
    fn absent_selections_serialize_as_null() {
        let mut graph = Graph::new(true);
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_node("C");

        let analysis = analyze_routes(&graph, "A", "C", None).unwrap();
        let payload = analysis_payload(&graph, "A", "C", &analysis);

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["shortest"].is_null());
        assert!(value["longest_simple"].is_null());
    }
}

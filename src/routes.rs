//! Route analysis over a [`Graph`]: simple-path enumeration, path costing,
//! and shortest/longest route selection.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::graph::{Graph, GraphError};

/// A path through the graph paired with its total edge cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: Vec<String>,
    pub cost: u64,
}

impl Route {
    /// Number of edges traversed by this route.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Result of a full route query between two nodes.
#[derive(Debug, Clone, Serialize)]
pub struct RouteAnalysis {
    /// Every enumerated simple route, in DFS discovery order.
    pub routes: Vec<Route>,
    /// Minimum-cost route; ties go to fewer edges, then discovery order.
    pub shortest: Option<Route>,
    /// Maximum-cost route among the enumerated simple routes only. This is
    /// not a true longest-path search, which would be NP-hard.
    pub longest_simple: Option<Route>,
}

impl RouteAnalysis {
    /// Scores the given paths against the graph and selects the shortest and
    /// longest-simple routes. Empty input yields an analysis with both
    /// selections absent.
    pub fn select(graph: &Graph, paths: Vec<Vec<String>>) -> Result<Self, GraphError> {
        let mut routes = Vec::with_capacity(paths.len());
        for path in paths {
            let cost = path_weight(graph, &path)?;
            routes.push(Route { path, cost });
        }

        let mut shortest: Option<&Route> = None;
        let mut longest: Option<&Route> = None;
        for route in &routes {
            let shorter = match shortest {
                None => true,
                Some(best) => (route.cost, route.hops()) < (best.cost, best.hops()),
            };
            if shorter {
                shortest = Some(route);
            }

            let longer = match longest {
                None => true,
                Some(best) => route.cost > best.cost,
            };
            if longer {
                longest = Some(route);
            }
        }

        let shortest = shortest.cloned();
        let longest_simple = longest.cloned();
        Ok(Self {
            routes,
            shortest,
            longest_simple,
        })
    }
}

/// Enumerates every simple path from `source` to `target`.
///
/// Paths are discovered by depth-first search and returned in discovery
/// order. `max_length` bounds the number of edges per path; without it the
/// search is exhaustive, which grows quickly on dense graphs. Unknown
/// endpoints and `source == target` yield an empty list.
pub fn all_simple_paths(
    graph: &Graph,
    source: &str,
    target: &str,
    max_length: Option<usize>,
) -> Vec<Vec<String>> {
    let (Some(src), Some(dst)) = (graph.node_index(source), graph.node_index(target)) else {
        return Vec::new();
    };
    if src == dst {
        return Vec::new();
    }

    let mut on_path = vec![false; graph.node_count()];
    let mut stack = Vec::new();
    let mut found = Vec::new();

    on_path[src] = true;
    stack.push(src);
    collect_paths(graph, src, dst, max_length, &mut stack, &mut on_path, &mut found);
    found
}

fn collect_paths(
    graph: &Graph,
    current: usize,
    target: usize,
    max_length: Option<usize>,
    stack: &mut Vec<usize>,
    on_path: &mut [bool],
    found: &mut Vec<Vec<String>>,
) {
    if current == target {
        found.push(stack.iter().map(|&idx| graph.label(idx).to_string()).collect());
        return;
    }
    if let Some(limit) = max_length {
        // the stack holds one node more than traversed edges
        if stack.len() - 1 >= limit {
            return;
        }
    }

    for &(next, _) in graph.adjacency_row(current) {
        if on_path[next] {
            continue;
        }
        on_path[next] = true;
        stack.push(next);
        collect_paths(graph, next, target, max_length, stack, on_path, found);
        stack.pop();
        on_path[next] = false;
    }
}

/// Sums the edge weights along `path`.
///
/// Checkable independently of the enumerator: a label outside the graph is
/// an [`GraphError::UnknownNode`], a consecutive pair without an edge is a
/// [`GraphError::MissingEdge`]. A single-node path costs zero.
pub fn path_weight(graph: &Graph, path: &[String]) -> Result<u64, GraphError> {
    for label in path {
        if !graph.contains(label) {
            return Err(GraphError::UnknownNode(label.clone()));
        }
    }

    let mut total = 0_u64;
    for pair in path.windows(2) {
        let weight = graph
            .weight(&pair[0], &pair[1])
            .ok_or_else(|| GraphError::MissingEdge {
                from: pair[0].clone(),
                to: pair[1].clone(),
            })?;
        total += weight;
    }
    Ok(total)
}

/// Full route query: enumerate, score, select.
///
/// Unlike [`all_simple_paths`], an unknown endpoint is reported as an error
/// so callers can distinguish "no such node" from "no route found".
pub fn analyze_routes(
    graph: &Graph,
    source: &str,
    target: &str,
    max_length: Option<usize>,
) -> Result<RouteAnalysis, GraphError> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownNode(source.to_string()));
    }
    if !graph.contains(target) {
        return Err(GraphError::UnknownNode(target.to_string()));
    }

    let paths = all_simple_paths(graph, source, target, max_length);
    RouteAnalysis::select(graph, paths)
}

/// Minimum-cost route from `source` to `target` via Dijkstra.
///
/// Works without enumerating every path, so it stays usable when the caller
/// skips full enumeration. Ties are broken on hop count; the label sequence
/// of an exact (cost, hops) tie may differ from the one
/// [`RouteAnalysis::select`] keeps.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Option<Route> {
    let src = graph.node_index(source)?;
    let dst = graph.node_index(target)?;
    if src == dst {
        return None;
    }

    let n = graph.node_count();
    let mut best: Vec<Option<(u64, usize)>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    best[src] = Some((0, 0));
    heap.push(Reverse((0_u64, 0_usize, src)));

    while let Some(Reverse((cost, hops, node))) = heap.pop() {
        match best[node] {
            Some(settled) if (cost, hops) > settled => continue,
            _ => {}
        }
        if node == dst {
            break;
        }

        for &(next, weight) in graph.adjacency_row(node) {
            let candidate = (cost + weight, hops + 1);
            let improves = match best[next] {
                None => true,
                Some(settled) => candidate < settled,
            };
            if improves {
                best[next] = Some(candidate);
                prev[next] = Some(node);
                heap.push(Reverse((candidate.0, candidate.1, next)));
            }
        }
    }

    let (cost, _) = best[dst]?;
    let mut order = vec![dst];
    let mut current = dst;
    while let Some(parent) = prev[current] {
        order.push(parent);
        current = parent;
    }
    order.reverse();

    Some(Route {
        path: order
            .into_iter()
            .map(|idx| graph.label(idx).to_string())
            .collect(),
        cost,
    })
}

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use thiserror::Error;

/// Errors produced by graph construction and path evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("matrix shape mismatch: {labels} labels, {rows} rows, row width {cols}")]
    ShapeMismatch {
        labels: usize,
        rows: usize,
        cols: usize,
    },
    #[error("duplicate node label '{0}'")]
    DuplicateLabel(String),
    #[error("node '{0}' is not part of the graph")]
    UnknownNode(String),
    #[error("no edge between '{from}' and '{to}'")]
    MissingEdge { from: String, to: String },
    #[error("self-loop on '{0}' is not allowed")]
    SelfLoop(String),
}

/// A weighted connection between two nodes, by node index.
///
/// For undirected graphs one `Edge` stands for both orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: u64,
}

/// A weighted graph over uniquely labeled nodes.
///
/// Pure data model: no drawing state, no positions. The graph is cheap to
/// rebuild, so callers reconstruct it from the current description on every
/// query instead of mutating a shared instance.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    order: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<(usize, u64)>>,
}

impl Graph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            order: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Builds a graph from an ordered label list and a square weight matrix.
    ///
    /// `matrix[i][j] > 0` adds an edge from `labels[i]` to `labels[j]` with
    /// that weight. In undirected mode only the upper triangle (`j > i`) is
    /// read; an asymmetric lower triangle is ignored. Diagonal cells are
    /// always ignored.
    pub fn from_matrix(
        labels: &[String],
        matrix: &[Vec<u64>],
        directed: bool,
    ) -> Result<Self, GraphError> {
        let n = labels.len();
        if matrix.len() != n {
            return Err(GraphError::ShapeMismatch {
                labels: n,
                rows: matrix.len(),
                cols: matrix.first().map_or(0, Vec::len),
            });
        }
        for row in matrix {
            if row.len() != n {
                return Err(GraphError::ShapeMismatch {
                    labels: n,
                    rows: matrix.len(),
                    cols: row.len(),
                });
            }
        }

        let mut graph = Graph::new(directed);
        for label in labels {
            if graph.index.contains_key(label) {
                return Err(GraphError::DuplicateLabel(label.clone()));
            }
            graph.add_node(label);
        }

        for i in 0..n {
            let columns = if directed { 0..n } else { i + 1..n };
            for j in columns {
                if i == j {
                    continue;
                }
                let weight = matrix[i][j];
                if weight > 0 {
                    graph.push_edge(i, j, weight);
                }
            }
        }

        Ok(graph)
    }

    /// Adds a node if its label is not present yet; returns its index.
    pub fn add_node(&mut self, label: &str) -> usize {
        match self.index.entry(label.to_string()) {
            Entry::Vacant(entry) => {
                let idx = self.order.len();
                entry.insert(idx);
                self.order.push(label.to_string());
                self.adjacency.push(Vec::new());
                idx
            }
            Entry::Occupied(entry) => *entry.get(),
        }
    }

    /// Connects two nodes, interning labels as needed. `weight` must be
    /// positive. Re-adding an existing connection overwrites its weight.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> Result<(), GraphError> {
        let u = self.add_node(from);
        let v = self.add_node(to);
        if u == v {
            return Err(GraphError::SelfLoop(from.to_string()));
        }

        if let Some(position) = self.edge_position(u, v) {
            let edge = &mut self.edges[position];
            let (a, b) = (edge.from, edge.to);
            edge.weight = weight;
            self.set_adjacency(a, b, weight);
            if !self.directed {
                self.set_adjacency(b, a, weight);
            }
        } else {
            self.push_edge(u, v, weight);
        }
        Ok(())
    }

    pub fn directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Weight of the edge between two labels, honoring direction.
    pub fn weight(&self, from: &str, to: &str) -> Option<u64> {
        let u = *self.index.get(from)?;
        let v = *self.index.get(to)?;
        self.adjacency[u]
            .iter()
            .find(|(next, _)| *next == v)
            .map(|(_, weight)| *weight)
    }

    /// Label list in lexicographic order plus the matching weight matrix.
    /// Undirected graphs produce a symmetric matrix.
    pub fn to_matrix(&self) -> (Vec<String>, Vec<Vec<u64>>) {
        let mut labels = self.order.clone();
        labels.sort();
        let position: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(idx, label)| (label.as_str(), idx))
            .collect();

        let n = labels.len();
        let mut matrix = vec![vec![0_u64; n]; n];
        for edge in &self.edges {
            let i = position[self.order[edge.from].as_str()];
            let j = position[self.order[edge.to].as_str()];
            matrix[i][j] = edge.weight;
            if !self.directed {
                matrix[j][i] = edge.weight;
            }
        }

        (labels, matrix)
    }

    pub(crate) fn node_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub(crate) fn label(&self, idx: usize) -> &str {
        &self.order[idx]
    }

    pub(crate) fn adjacency_row(&self, u: usize) -> &[(usize, u64)] {
        &self.adjacency[u]
    }

    fn push_edge(&mut self, from: usize, to: usize, weight: u64) {
        self.edges.push(Edge { from, to, weight });
        self.adjacency[from].push((to, weight));
        if !self.directed {
            self.adjacency[to].push((from, weight));
        }
    }

    fn edge_position(&self, u: usize, v: usize) -> Option<usize> {
        self.edges.iter().position(|edge| {
            (edge.from == u && edge.to == v)
                || (!self.directed && edge.from == v && edge.to == u)
        })
    }

    fn set_adjacency(&mut self, u: usize, v: usize, weight: u64) {
        for entry in &mut self.adjacency[u] {
            if entry.0 == v {
                entry.1 = weight;
                return;
            }
        }
        self.adjacency[u].push((v, weight));
    }
}

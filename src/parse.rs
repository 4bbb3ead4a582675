//! Text graph definitions. Two line-oriented forms share one entry point:
//!
//! ```text
//! graph directed          matrix
//! A-B:5, B-C:8            A B C
//! C-D                     0 5 0
//!                         5 0 8
//!                         0 8 0
//! ```
//!
//! `%%` starts a comment line. The header's direction token defaults to
//! `undirected`. In the edge-list form a token chains any number of nodes
//! (`A-B-C:3` weights every hop 3) and an omitted weight means 1; a lone
//! label declares an isolated node.

use anyhow::{Context, Result, anyhow, bail};

use crate::graph::Graph;
use crate::matrix;

enum DefinitionKind {
    Edges,
    Matrix,
}

impl Graph {
    /// Parses a graph definition in either the edge-list or the matrix form.
    pub fn parse(definition: &str) -> Result<Self> {
        let mut lines = definition
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with("%%"));

        let header = lines.next().ok_or_else(|| {
            anyhow!("graph definition must start with a 'graph' or 'matrix' header")
        })?;
        let (kind, directed) = parse_header(header)?;

        match kind {
            DefinitionKind::Edges => parse_edge_lines(lines, directed),
            DefinitionKind::Matrix => {
                let (labels, grid) = matrix::parse_rows(lines)?;
                Graph::from_matrix(&labels, &grid, directed)
                    .context("matrix definition does not describe a valid graph")
            }
        }
    }
}

fn parse_header(line: &str) -> Result<(DefinitionKind, bool)> {
    let mut parts = line.split_whitespace();
    let keyword = parts
        .next()
        .ok_or_else(|| anyhow!("empty header line"))?
        .to_ascii_lowercase();

    let kind = match keyword.as_str() {
        "graph" => DefinitionKind::Edges,
        "matrix" => DefinitionKind::Matrix,
        other => bail!("definition must start with 'graph' or 'matrix', found '{other}'"),
    };

    let directed = match parts.next() {
        None => false,
        Some(token) => match token.to_ascii_lowercase().as_str() {
            "directed" => true,
            "undirected" => false,
            other => bail!(
                "unsupported direction '{other}' in header; supported values are 'directed' and 'undirected'"
            ),
        },
    };

    Ok((kind, directed))
}

fn parse_edge_lines<'a>(lines: impl Iterator<Item = &'a str>, directed: bool) -> Result<Graph> {
    let mut graph = Graph::new(directed);

    for line in lines {
        for token in line.split(',').map(str::trim).filter(|token| !token.is_empty()) {
            parse_connection(&mut graph, token)
                .with_context(|| format!("invalid connection '{token}'"))?;
        }
    }

    if graph.node_count() == 0 {
        bail!("graph does not declare any nodes");
    }
    Ok(graph)
}

fn parse_connection(graph: &mut Graph, token: &str) -> Result<()> {
    let (chain, weight) = match token.split_once(':') {
        Some((chain, weight_str)) => {
            let weight: u64 = weight_str
                .trim()
                .parse()
                .with_context(|| format!("weight '{}' is not an integer", weight_str.trim()))?;
            if weight == 0 {
                bail!("edge weight must be positive");
            }
            (chain, weight)
        }
        None => (token, 1),
    };

    let nodes: Vec<&str> = chain
        .split('-')
        .map(str::trim)
        .filter(|node| !node.is_empty())
        .collect();

    match nodes.as_slice() {
        [] => bail!("no node labels"),
        [single] => {
            if token.contains(':') {
                bail!("a weight requires at least two nodes");
            }
            graph.add_node(single);
        }
        _ => {
            for pair in nodes.windows(2) {
                graph.add_edge(pair[0], pair[1], weight)?;
            }
        }
    }
    Ok(())
}

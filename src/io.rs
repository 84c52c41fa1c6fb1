//! Text input for graphs and edge queries.
//!
//! A graph file starts with the vertex count on its first line. Every following
//! line names an origin vertex and then any number of `target weight` pairs:
//!
//! ```text
//! 3
//! 1 2 1.0 3 4.0
//! 2 3 2.0
//! ```
//!
//! A query file holds one `origin target` pair per line. Blank lines are skipped
//! in both formats.

use log::warn;
use ordered_float::OrderedFloat;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// A parsed graph description: vertex count plus directed edge triples
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeList {
    pub vertex_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
}

impl EdgeList {
    /// Builds a graph, logging and skipping triples the graph rejects
    pub fn into_graph(self) -> DirectedGraph<OrderedFloat<f64>> {
        let edges = self
            .edges
            .into_iter()
            .map(|(from, to, weight)| (from, to, OrderedFloat(weight)));
        let (graph, rejected) = DirectedGraph::from_edges(self.vertex_count, edges);

        for err in rejected {
            warn!("skipping edge: {}", err);
        }

        graph
    }
}

fn parse_token<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T> {
    token.parse().map_err(|_| Error::Parse {
        line,
        message: format!("expected {}, found {:?}", what, token),
    })
}

/// Parses the text of a graph file
pub fn parse_graph(text: &str) -> Result<EdgeList> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (first_line, header) = lines.next().ok_or(Error::Parse {
        line: 1,
        message: "missing vertex count".to_string(),
    })?;
    let first_token = header.split_whitespace().next().unwrap_or_default();
    let vertex_count: usize = parse_token(first_token, first_line, "a vertex count")?;

    let mut edges = Vec::new();
    for (line, text) in lines {
        let mut tokens = text.split_whitespace();
        let origin: usize = match tokens.next() {
            Some(token) => parse_token(token, line, "an origin vertex")?,
            None => continue,
        };

        while let Some(target) = tokens.next() {
            let target: usize = parse_token(target, line, "a target vertex")?;
            let weight: f64 = match tokens.next() {
                Some(token) => parse_token(token, line, "an edge weight")?,
                None => {
                    return Err(Error::Parse {
                        line,
                        message: format!("missing weight for edge {} -> {}", origin, target),
                    })
                }
            };
            edges.push((origin, target, weight));
        }
    }

    Ok(EdgeList {
        vertex_count,
        edges,
    })
}

/// Parses the text of a query file into `(origin, target)` pairs
pub fn parse_queries(text: &str) -> Result<Vec<(usize, usize)>> {
    let mut queries = Vec::new();

    for (index, text) in text.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<&str> = text.split_whitespace().collect();

        match tokens.as_slice() {
            [] => continue,
            [origin, target] => queries.push((
                parse_token(origin, line, "an origin vertex")?,
                parse_token(target, line, "a target vertex")?,
            )),
            _ => {
                return Err(Error::Parse {
                    line,
                    message: format!(
                        "expected two vertex identities, found {} tokens",
                        tokens.len()
                    ),
                })
            }
        }
    }

    Ok(queries)
}

/// Reads and builds a graph from a file
pub fn read_graph(path: &Path) -> Result<DirectedGraph<OrderedFloat<f64>>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_graph(&text)?.into_graph())
}

/// Reads edge queries from a file
pub fn read_queries(path: &Path) -> Result<Vec<(usize, usize)>> {
    let text = fs::read_to_string(path)?;
    parse_queries(&text)
}

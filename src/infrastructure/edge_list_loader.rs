use crate::domain::graph::Graph;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("graph file not found or unreadable: {path}")]
    ResourceNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("vertex {vertex} out of range at line {line}: the header declares {vertex_count} vertices")]
    IndexOutOfRange {
        vertex: usize,
        vertex_count: usize,
        line: usize,
    },
}

pub async fn read_graph_file(path: &str) -> Result<Graph, LoadError> {
    let raw = fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::ResourceNotFound {
            path: path.to_string(),
            source,
        })?;
    parse_edge_list(&raw)
}

/// Parses the whitespace-delimited edge-list format: the first non-blank line
/// is a `<vertex-count> <edge-count>` header (the edge count is read and
/// discarded), every later non-blank line holds one or more `from to` pairs.
/// Blank lines are ignored. Duplicate edges and self-loops are kept in file
/// order.
pub fn parse_edge_list(text: &str) -> Result<Graph, LoadError> {
    let mut graph: Option<Graph> = None;

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        if let Some(graph) = graph.as_mut() {
            if tokens.len() % 2 != 0 {
                return Err(LoadError::MalformedInput {
                    line: line_no,
                    reason: format!(
                        "expected whitespace-separated `from to` pairs, got {} value(s)",
                        tokens.len()
                    ),
                });
            }
            for pair in tokens.chunks_exact(2) {
                let from = parse_endpoint(pair[0], line_no, graph.vertex_count())?;
                let to = parse_endpoint(pair[1], line_no, graph.vertex_count())?;
                graph.edges[from].push(to);
            }
        } else {
            if tokens.len() != 2 {
                return Err(LoadError::MalformedInput {
                    line: line_no,
                    reason: format!(
                        "header must be `<vertex-count> <edge-count>`, got {} value(s)",
                        tokens.len()
                    ),
                });
            }
            let vertex_count = parse_count(tokens[0], line_no)?;
            let _declared_edges = parse_count(tokens[1], line_no)?;
            graph = Some(Graph::new(vertex_count));
        }
    }

    graph.ok_or_else(|| LoadError::MalformedInput {
        line: 1,
        reason: "missing `<vertex-count> <edge-count>` header".to_string(),
    })
}

fn parse_count(token: &str, line: usize) -> Result<usize, LoadError> {
    token
        .parse::<usize>()
        .map_err(|_| LoadError::MalformedInput {
            line,
            reason: format!("{token:?} is not a non-negative integer"),
        })
}

fn parse_endpoint(token: &str, line: usize, vertex_count: usize) -> Result<usize, LoadError> {
    let vertex = parse_count(token, line)?;
    if vertex >= vertex_count {
        return Err(LoadError::IndexOutOfRange {
            vertex,
            vertex_count,
            line,
        });
    }
    Ok(vertex)
}

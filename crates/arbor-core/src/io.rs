//! Matrix-format graph files
//!
//! The toolkit's single on-disk format: the first line holds the vertex
//! count, followed by one line per adjacency-matrix row with entries
//! separated by blanks. Serializing a graph and loading it back yields an
//! equal adjacency matrix. Lines past the matrix are ignored.

use std::fs;
use std::path::Path;

use crate::error::{ArborError, Result};
use crate::graph::{Tree, WeightedGraph};

/// Parse a graph from matrix-format text.
pub fn parse_graph(input: &str) -> Result<WeightedGraph> {
    WeightedGraph::from_adjacency(parse_rows(input)?)
}

/// Parse a tree from matrix-format text. The matrix is validated as a
/// graph; whether it actually is a tree is reported by [`Tree::is_tree`].
pub fn parse_tree(input: &str) -> Result<Tree> {
    Tree::from_adjacency(parse_rows(input)?)
}

/// Load a graph from a matrix-format file.
pub fn read_graph(path: &Path) -> Result<WeightedGraph> {
    parse_graph(&read_file(path)?)
}

/// Load a tree from a matrix-format file.
pub fn read_tree(path: &Path) -> Result<Tree> {
    parse_tree(&read_file(path)?)
}

/// Render a graph in matrix format.
pub fn serialize_graph(graph: &WeightedGraph) -> String {
    let mut out = String::new();
    out.push_str(&graph.vertex_count().to_string());
    out.push('\n');
    for row in graph.adjacency_snapshot() {
        let line = row
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Write a graph to a matrix-format file.
pub fn write_graph(path: &Path, graph: &WeightedGraph) -> Result<()> {
    fs::write(path, serialize_graph(graph))
        .map_err(|e| ArborError::io_operation("write graph file", path.display(), e))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| ArborError::io_operation("read graph file", path.display(), e))
}

fn parse_rows(input: &str) -> Result<Vec<Vec<i64>>> {
    let mut lines = input.lines();
    let header = lines.next().ok_or_else(|| ArborError::InvalidMatrix {
        reason: "empty input, expected a vertex count".to_string(),
    })?;
    let vertex_count: usize =
        header
            .trim()
            .parse()
            .map_err(|_| ArborError::InvalidMatrix {
                reason: format!("invalid vertex count: {:?}", header.trim()),
            })?;

    let mut rows = Vec::with_capacity(vertex_count);
    for index in 0..vertex_count {
        let line = lines.next().ok_or_else(|| ArborError::InvalidMatrix {
            reason: format!("expected {} matrix rows, found {}", vertex_count, index),
        })?;
        let row = line
            .split_whitespace()
            .map(|entry| {
                entry.parse::<i64>().map_err(|_| ArborError::InvalidMatrix {
                    reason: format!("row {}: invalid weight {:?}", index, entry),
                })
            })
            .collect::<Result<Vec<i64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}

//! Adjacency-matrix representation of simple weighted undirected graphs
//!
//! Each entry (i, j) is either 0 when there is no edge between vertices i
//! and j, or a positive integer giving the weight of that edge. Graphs are
//! simple, so the matrix is symmetric and the diagonal is zero.
//! Construction repairs irregular input rather than rejecting it, logging a
//! diagnostic for every correction.

use serde::Serialize;

use crate::error::{ArborError, Result};

/// A weighted edge as a transient (weight, a, b) triple.
///
/// Used while sorting and selecting spanning-tree candidates; not a
/// persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub weight: u64,
    pub a: usize,
    pub b: usize,
}

/// Simple weighted undirected graph backed by an adjacency matrix.
///
/// The edge count and total weight are maintained incrementally and always
/// match the positive entries of the upper triangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    vertex_count: usize,
    adjacency: Vec<Vec<u64>>,
    edge_count: usize,
    total_weight: u64,
}

impl WeightedGraph {
    /// Build a graph from a signed adjacency matrix, repairing irregular
    /// entries: self-loops are removed, negative weights zeroed, and
    /// asymmetric pairs forced to the upper-triangle value.
    ///
    /// Fails only on structurally invalid input: an empty matrix or a row
    /// whose length does not match the vertex count.
    pub fn from_adjacency(rows: Vec<Vec<i64>>) -> Result<Self> {
        let vertex_count = rows.len();
        if vertex_count == 0 {
            return Err(ArborError::invalid_value("vertex count", 0));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != vertex_count {
                return Err(ArborError::InvalidMatrix {
                    reason: format!(
                        "row {} has {} entries, expected {}",
                        i,
                        row.len(),
                        vertex_count
                    ),
                });
            }
        }

        let mut adjacency = vec![vec![0u64; vertex_count]; vertex_count];
        let mut edge_count = 0usize;
        let mut total_weight = 0u64;

        for i in 0..vertex_count {
            if rows[i][i] != 0 {
                tracing::warn!(vertex = i, "self-loop removed");
            }
            for j in (i + 1)..vertex_count {
                let mut entry = rows[i][j];
                if entry < 0 {
                    tracing::warn!(from = i, to = j, weight = entry, "negative weight removed");
                    entry = 0;
                }
                if rows[i][j] != rows[j][i] {
                    tracing::warn!(from = i, to = j, "asymmetric entry made symmetric");
                }
                let weight = entry as u64;
                adjacency[i][j] = weight;
                adjacency[j][i] = weight;
                if weight > 0 {
                    edge_count += 1;
                    total_weight += weight;
                }
            }
        }

        Ok(Self {
            vertex_count,
            adjacency,
            edge_count,
            total_weight,
        })
    }

    /// All-zero graph over a fixed vertex count.
    pub fn empty(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(ArborError::invalid_value("vertex count", 0));
        }
        Ok(Self {
            vertex_count,
            adjacency: vec![vec![0; vertex_count]; vertex_count],
            edge_count: 0,
            total_weight: 0,
        })
    }

    /// Number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Weight of the edge between `u` and `v`, or 0 when the edge is absent
    /// or either index is out of range. Out-of-range reads mean "no edge",
    /// never an error.
    pub fn edge(&self, u: usize, v: usize) -> u64 {
        if u < self.vertex_count && v < self.vertex_count {
            self.adjacency[u][v]
        } else {
            0
        }
    }

    /// Independent copy of the adjacency matrix.
    pub fn adjacency_snapshot(&self) -> Vec<Vec<u64>> {
        self.adjacency.clone()
    }

    /// Upper-triangle edge list (a < b) in row-major order.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for a in 0..self.vertex_count {
            for b in (a + 1)..self.vertex_count {
                let weight = self.adjacency[a][b];
                if weight > 0 {
                    edges.push(Edge { weight, a, b });
                }
            }
        }
        edges
    }

    /// Depth-first visit from `start`, marking reached vertices in
    /// `visited`, which must hold one entry per vertex. Unvisited neighbors
    /// are expanded in ascending vertex order. Iterative, so deep graphs
    /// cannot exhaust the call stack.
    pub fn depth_first_visit(&self, start: usize, visited: &mut [bool]) {
        if start >= self.vertex_count || visited[start] {
            return;
        }
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;
            // Descending push order, so the lowest-numbered unvisited
            // neighbor is expanded first, matching recursive preorder.
            for neighbor in (0..self.vertex_count).rev() {
                if self.adjacency[vertex][neighbor] != 0 && !visited[neighbor] {
                    stack.push(neighbor);
                }
            }
        }
    }

    /// Whether every vertex is reachable from vertex 0.
    pub fn is_connected(&self) -> bool {
        let mut visited = vec![false; self.vertex_count];
        self.depth_first_visit(0, &mut visited);
        visited.iter().all(|&seen| seen)
    }

    /// Whether self's weighted edge set is contained in `other` under the
    /// same vertex numbering: every edge (i, j) of self must appear in
    /// `other` with an identical weight.
    pub fn is_subgraph(&self, other: &WeightedGraph) -> bool {
        if other.vertex_count < self.vertex_count {
            return false;
        }
        for i in 0..self.vertex_count {
            for j in (i + 1)..self.vertex_count {
                let weight = self.adjacency[i][j];
                if weight > 0 && other.edge(i, j) != weight {
                    return false;
                }
            }
        }
        true
    }

    /// Symmetric insert used by tree growth and the random generator.
    /// Counters account for the new entry; the slot at (a, b) must be
    /// empty.
    pub(crate) fn set_edge(&mut self, a: usize, b: usize, weight: u64) {
        self.adjacency[a][b] = weight;
        self.adjacency[b][a] = weight;
        self.edge_count += 1;
        self.total_weight += weight;
    }
}

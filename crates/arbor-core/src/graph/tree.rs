//! Trees as cycle-free weighted graphs
//!
//! A `Tree` owns a [`WeightedGraph`] and narrows its mutation surface to
//! edge insertion that the caller has verified keeps the graph acyclic.
//! Composition rather than subtyping: the graph read surface is reached
//! through `as_graph` or the delegating accessors.

use crate::error::Result;
use crate::graph::matrix::{Edge, WeightedGraph};

/// A weighted graph constrained to contain no cycle.
///
/// The acyclicity invariant is upheld by the growth protocol: callers must
/// check [`Tree::can_add`] before every [`Tree::add_edge`]. Matrices loaded
/// from outside are not checked here; [`Tree::is_tree`] reports whether the
/// invariant actually holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    graph: WeightedGraph,
}

impl Tree {
    /// Empty tree over a fixed vertex count, the accumulator shape used
    /// during spanning-tree construction.
    pub fn empty(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            graph: WeightedGraph::empty(vertex_count)?,
        })
    }

    /// Build a tree from a signed adjacency matrix, with the same repair
    /// rules as [`WeightedGraph::from_adjacency`].
    pub fn from_adjacency(rows: Vec<Vec<i64>>) -> Result<Self> {
        Ok(Self {
            graph: WeightedGraph::from_adjacency(rows)?,
        })
    }

    /// Read-only view of the underlying graph
    pub fn as_graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Consume the tree, yielding the underlying graph
    pub fn into_graph(self) -> WeightedGraph {
        self.graph
    }

    /// Number of vertices in the tree
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Number of edges in the tree
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Sum of all edge weights
    pub fn total_weight(&self) -> u64 {
        self.graph.total_weight()
    }

    /// Weight of the edge between `u` and `v`, 0 when absent
    pub fn edge(&self, u: usize, v: usize) -> u64 {
        self.graph.edge(u, v)
    }

    /// Connected with exactly vertex_count - 1 edges. Both conditions are
    /// independently necessary; together they rule out cycles.
    pub fn is_tree(&self) -> bool {
        self.graph.is_connected() && self.graph.edge_count() == self.graph.vertex_count() - 1
    }

    /// Whether self spans `graph`: a tree over the same vertices using only
    /// edges of `graph` at identical weights.
    pub fn is_spanning_tree_of(&self, graph: &WeightedGraph) -> bool {
        self.is_tree()
            && self.vertex_count() == graph.vertex_count()
            && self.graph.is_subgraph(graph)
    }

    /// Whether a path already connects `i` and `j`. Out-of-range indices
    /// have no path.
    pub fn has_path(&self, i: usize, j: usize) -> bool {
        let vertex_count = self.graph.vertex_count();
        if i >= vertex_count || j >= vertex_count {
            return false;
        }
        let mut visited = vec![false; vertex_count];
        self.graph.depth_first_visit(i, &mut visited);
        visited[j]
    }

    /// Whether `edge` can be inserted without closing a cycle: rejects
    /// self-loops and endpoint pairs already connected through the tree.
    pub fn can_add(&self, edge: &Edge) -> bool {
        edge.a != edge.b && !self.has_path(edge.a, edge.b)
    }

    /// Insert `edge` unconditionally. No cycle detection happens here; the
    /// caller contract requires a prior [`Tree::can_add`].
    pub fn add_edge(&mut self, edge: &Edge) {
        self.graph.set_edge(edge.a, edge.b, edge.weight);
    }
}

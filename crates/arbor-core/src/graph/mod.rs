//! Weighted-graph model and spanning-tree algorithms
//!
//! Provides the adjacency-matrix graph entity and the operations built on
//! top of it:
//! - Depth-first traversal, connectivity, and subgraph containment
//! - Trees as cycle-free graphs with controlled edge insertion
//! - Minimum spanning trees via greedy lowest-weight-first selection

pub mod matrix;
pub mod mst;
pub mod tree;

pub use matrix::{Edge, WeightedGraph};
pub use mst::minimum_spanning_tree;
pub use tree::Tree;

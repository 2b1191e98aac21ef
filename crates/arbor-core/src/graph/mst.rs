//! Minimum spanning trees via greedy lowest-weight-first edge selection
//!
//! Kruskal-style construction: candidate edges are sorted ascending by
//! weight (stable, so ties keep the row-major enumeration order) and added
//! one at a time unless the insertion would close a cycle. The cycle test
//! is a reachability check on the growing tree.

use crate::graph::matrix::WeightedGraph;
use crate::graph::tree::Tree;

/// Compute a minimum spanning tree of `graph`, or `None` when the graph is
/// not connected and no spanning tree exists.
///
/// Under equal weights more than one minimum spanning tree can exist; the
/// one returned is determined by the stable edge ordering.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_tree(graph: &WeightedGraph) -> Option<Tree> {
    if !graph.is_connected() {
        tracing::debug!("graph is not connected, no spanning tree exists");
        return None;
    }

    let mut candidates = graph.edges();
    candidates.sort_by_key(|edge| edge.weight);

    let mut tree = Tree::empty(graph.vertex_count()).ok()?;
    for edge in &candidates {
        if tree.is_tree() {
            break;
        }
        if tree.can_add(edge) {
            tree.add_edge(edge);
            tracing::trace!(weight = edge.weight, a = edge.a, b = edge.b, "edge accepted");
        } else {
            tracing::trace!(weight = edge.weight, a = edge.a, b = edge.b, "edge rejected");
        }
    }

    tracing::debug!(
        edges = tree.edge_count(),
        total_weight = tree.total_weight(),
        "spanning tree complete"
    );
    Some(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Weights of every spanning tree of `graph`, found by brute force
    /// over all (n-1)-edge subsets.
    fn spanning_tree_weights(graph: &WeightedGraph) -> Vec<u64> {
        let edges = graph.edges();
        let wanted = graph.vertex_count() - 1;
        let mut weights = Vec::new();
        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != wanted {
                continue;
            }
            let mut tree = Tree::empty(graph.vertex_count()).unwrap();
            for (index, edge) in edges.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    tree.add_edge(edge);
                }
            }
            if tree.is_tree() {
                weights.push(tree.total_weight());
            }
        }
        weights
    }

    #[test]
    fn test_mst_of_square_with_diagonal_costs() {
        // Cycle 0-1-2-3-0 with weights 1, 2, 3, 4. The weight-4 edge
        // (0, 3) closes the cycle and must be rejected.
        let graph = WeightedGraph::from_adjacency(vec![
            vec![0, 1, 0, 4],
            vec![1, 0, 2, 0],
            vec![0, 2, 0, 3],
            vec![4, 0, 3, 0],
        ])
        .unwrap();
        assert!(graph.is_connected());
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.total_weight(), 10);

        let tree = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(tree.total_weight(), 6);
        assert_eq!(tree.edge(0, 1), 1);
        assert_eq!(tree.edge(1, 2), 2);
        assert_eq!(tree.edge(2, 3), 3);
        assert_eq!(tree.edge(0, 3), 0);
        assert!(tree.is_spanning_tree_of(&graph));
    }

    #[test]
    fn test_mst_of_disconnected_graph_is_none() {
        let graph = WeightedGraph::from_adjacency(vec![
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 2],
            vec![0, 0, 2, 0],
        ])
        .unwrap();
        assert!(minimum_spanning_tree(&graph).is_none());
    }

    #[test]
    fn test_mst_of_single_vertex() {
        let graph = WeightedGraph::empty(1).unwrap();
        let tree = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(tree.edge_count(), 0);
        assert!(tree.is_spanning_tree_of(&graph));
    }

    #[test]
    fn test_mst_of_tree_is_the_tree_itself() {
        let graph = WeightedGraph::from_adjacency(vec![
            vec![0, 5, 0],
            vec![5, 0, 7],
            vec![0, 7, 0],
        ])
        .unwrap();
        let tree = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(tree.total_weight(), 12);
        assert_eq!(tree.as_graph(), &graph);
    }

    #[test]
    fn test_mst_is_minimal_by_brute_force() {
        // Dense 5-vertex graph with distinct weights.
        let graph = WeightedGraph::from_adjacency(vec![
            vec![0, 3, 8, 0, 5],
            vec![3, 0, 2, 9, 0],
            vec![8, 2, 0, 4, 7],
            vec![0, 9, 4, 0, 6],
            vec![5, 0, 7, 6, 0],
        ])
        .unwrap();
        let tree = minimum_spanning_tree(&graph).unwrap();
        assert!(tree.is_spanning_tree_of(&graph));

        let all = spanning_tree_weights(&graph);
        assert!(!all.is_empty());
        let best = *all.iter().min().unwrap();
        assert_eq!(tree.total_weight(), best);
    }

    #[test]
    fn test_mst_ties_resolved_by_enumeration_order() {
        // Triangle with all weights equal: the first two edges in
        // row-major order win.
        let graph = WeightedGraph::from_adjacency(vec![
            vec![0, 2, 2],
            vec![2, 0, 2],
            vec![2, 2, 0],
        ])
        .unwrap();
        let tree = minimum_spanning_tree(&graph).unwrap();
        assert_eq!(tree.total_weight(), 4);
        assert_eq!(tree.edge(0, 1), 2);
        assert_eq!(tree.edge(0, 2), 2);
        assert_eq!(tree.edge(1, 2), 0);
    }

    #[test]
    fn test_mst_is_subgraph_of_input() {
        let graph = WeightedGraph::from_adjacency(vec![
            vec![0, 1, 6, 0],
            vec![1, 0, 5, 2],
            vec![6, 5, 0, 3],
            vec![0, 2, 3, 0],
        ])
        .unwrap();
        let tree = minimum_spanning_tree(&graph).unwrap();
        assert!(tree.as_graph().is_subgraph(&graph));
    }
}

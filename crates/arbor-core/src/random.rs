//! Random graph generation
//!
//! Deterministic per seed: the same (seed, vertices, density, max_weight)
//! quadruple always yields the same graph.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ArborError, Result};
use crate::graph::WeightedGraph;

/// Generate a random simple weighted graph.
///
/// Each potential edge is present with probability `density`/100; present
/// edges get a weight drawn uniformly from 1..=`max_weight`. `density` must
/// lie in 1..=100 and `max_weight` and `vertices` must be positive.
pub fn random_graph(
    seed: u64,
    vertices: usize,
    density: u8,
    max_weight: u64,
) -> Result<WeightedGraph> {
    if vertices == 0 {
        return Err(ArborError::invalid_value("vertex count", vertices));
    }
    if density == 0 || density > 100 {
        return Err(ArborError::invalid_value("density", density));
    }
    if max_weight == 0 {
        return Err(ArborError::invalid_value("max weight", max_weight));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::empty(vertices)?;
    for a in 0..vertices {
        for b in (a + 1)..vertices {
            if rng.random_range(1..=100u32) <= u32::from(density) {
                graph.set_edge(a, b, rng.random_range(1..=max_weight));
            }
        }
    }

    tracing::debug!(
        seed,
        vertices,
        density,
        max_weight,
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(graph)
}

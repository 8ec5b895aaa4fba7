//! Sequential Prim oracle for MST weight verification.
//!
//! Provides a simple, trusted implementation of Prim's algorithm used as a
//! reference in property tests. Prim is chosen deliberately so the oracle
//! shares no code path with the Kruskal-style builder; only the total
//! forest weight is compared, which is identical for every minimum spanning
//! forest of the same graph even when tie-breaking differs.

use crate::Graph;

/// Result of the sequential Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimResult {
    /// Total weight of the minimum spanning forest, accumulated as `f64`.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest weight using Prim's algorithm, run
/// once per connected component. Self-loops never improve a candidate and
/// are skipped via the visited check.
pub(super) fn prim_forest(graph: &Graph, weights: &[f32]) -> PrimResult {
    let n = graph.num_vertices();
    let adjacency = build_adjacency(graph, weights);

    let mut visited = vec![false; n];
    let mut best = vec![f32::INFINITY; n];
    let mut total_weight = 0.0_f64;
    let mut edge_count = 0_usize;
    let mut component_count = 0_usize;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        component_count += 1;
        best[start] = 0.0;

        // Grow the component one vertex at a time, always taking the
        // cheapest frontier candidate. The seed vertex contributes no edge.
        let mut seed = true;
        loop {
            let Some(next) = cheapest_unvisited(&visited, &best) else {
                break;
            };
            visited[next] = true;
            if seed {
                seed = false;
            } else {
                total_weight += f64::from(best[next]);
                edge_count += 1;
            }
            for &(neighbour, weight) in &adjacency[next] {
                if !visited[neighbour] && weight < best[neighbour] {
                    best[neighbour] = weight;
                }
            }
        }
    }

    PrimResult {
        total_weight,
        edge_count,
        component_count,
    }
}

fn build_adjacency(graph: &Graph, weights: &[f32]) -> Vec<Vec<(usize, f32)>> {
    let mut adjacency = vec![Vec::new(); graph.num_vertices()];
    for ((source, target), &weight) in graph.edges().zip(weights) {
        adjacency[source].push((target, weight));
        adjacency[target].push((source, weight));
    }
    adjacency
}

/// Returns the unvisited vertex with the smallest candidate weight, or
/// `None` when the current component is exhausted.
fn cheapest_unvisited(visited: &[bool], best: &[f32]) -> Option<usize> {
    let mut winner: Option<usize> = None;
    for (vertex, &weight) in best.iter().enumerate() {
        if visited[vertex] || !weight.is_finite() {
            continue;
        }
        if winner.is_none_or(|current| weight < best[current]) {
            winner = Some(vertex);
        }
    }
    winner
}

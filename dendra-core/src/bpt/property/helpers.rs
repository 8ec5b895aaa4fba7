//! Shared helper functions for BPT property-based tests.

use crate::Graph;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of the input graph by applying union-find
/// over its raw edges (self-loops contribute nothing).
pub(super) fn count_components(graph: &Graph) -> usize {
    let n = graph.num_vertices();
    let mut parent: Vec<usize> = (0..n).collect();
    let mut components = n;

    for (source, target) in graph.edges() {
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }

    components
}

/// Sums selected edge weights as `f64` for lossless accumulation. The MST
/// graph carries no weights of its own; callers feed the internal-node
/// altitudes, which are exactly the selected weights.
pub(super) fn total_weight_f64(weights: impl IntoIterator<Item = f32>) -> f64 {
    weights.into_iter().map(f64::from).sum()
}

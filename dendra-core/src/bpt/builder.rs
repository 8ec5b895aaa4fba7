//! Merge loop of the canonical BPT construction.
//!
//! Kruskal's algorithm instrumented to record the merge hierarchy: every
//! accepted edge creates one internal tree node whose altitude is the edge
//! weight. The union-find tracks equivalence only; the `tree_node` array
//! beside it maps each class representative to the tree node currently
//! standing for that class and is re-pointed after every union.

use crate::graph::Graph;

use super::sort::sorted_edge_indices;
use super::union_find::DisjointSet;

/// Raw arrays produced by the merge loop, before result assembly.
pub(super) struct BptBuild {
    /// Parent per node; unmerged nodes keep themselves as parent.
    pub parents: Vec<usize>,
    /// Altitude per node; leaves stay at zero.
    pub altitudes: Vec<f32>,
    /// Accepted edges in selection order, in original orientation.
    pub mst_edges: Vec<(usize, usize)>,
}

/// Runs the merge loop over the edges in sorted order.
///
/// Inputs are validated by the caller: `graph.num_vertices() > 0` and
/// `weights.len() == graph.num_edges()` with every weight finite.
pub(super) fn build(graph: &Graph, weights: &[f32]) -> BptBuild {
    let n = graph.num_vertices();
    let capacity = n.saturating_mul(2).saturating_sub(1);

    let mut dsu = DisjointSet::new(n);
    // Representative -> current tree node for the class; identity for the
    // leaves, extended as internal nodes are registered.
    let mut tree_node: Vec<usize> = Vec::with_capacity(capacity);
    tree_node.extend(0..n);

    let mut parents: Vec<usize> = (0..capacity).collect();
    let mut altitudes = vec![0.0_f32; capacity];
    let mut mst_edges = Vec::with_capacity(n.saturating_sub(1));
    let mut next_node = n;

    for index in sorted_edge_indices(weights) {
        if next_node == capacity {
            // n-1 merges done; every remaining edge would be skipped.
            break;
        }
        let Some((u, v)) = graph.edge(index) else {
            break;
        };
        let ru = dsu.find(u);
        let rv = dsu.find(v);
        if ru == rv {
            continue;
        }

        mst_edges.push((u, v));
        let tu = tree_node[ru];
        let tv = tree_node[rv];
        let z = dsu.make_set();
        tree_node.push(z);
        debug_assert_eq!(z, next_node);
        next_node += 1;

        // u's side is linked first; with equal altitudes this fixes the
        // child visit order for reproducibility.
        parents[tu] = z;
        parents[tv] = z;
        altitudes[z] = weights[index];

        let merged = dsu.union(ru, rv);
        tree_node[merged] = z;
    }

    // 2n - components realised nodes; the rest of the pre-sized arrays was
    // never reached.
    parents.truncate(next_node);
    altitudes.truncate(next_node);

    BptBuild {
        parents,
        altitudes,
        mst_edges,
    }
}

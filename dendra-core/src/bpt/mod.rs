//! Canonical binary partition tree (BPT) construction.
//!
//! Processes graph edges in non-decreasing weight order and records every
//! component merge as an internal tree node, yielding the merge hierarchy,
//! its per-node altitudes, and the minimum spanning forest in one pass. The
//! edge sort runs in parallel via Rayon; the merge loop itself is inherently
//! sequential because each decision depends on the union-find state left by
//! all previous merges.

mod builder;
mod sort;
mod union_find;


use tracing::{info, instrument};

use crate::graph::Graph;
use crate::tree::Tree;

/// Errors returned while building a canonical BPT.
// `thiserror::Error` cannot be derived here: it would treat the
// `NonFiniteWeight::source` field as the `Error::source`, and `usize` does
// not implement `Error`, so `Display`/`Error` are implemented by hand.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum BptError {
    /// The caller requested a BPT for a graph with no vertices.
    EmptyGraph,
    /// The weight array length did not match the edge count.
    WeightCountMismatch {
        /// Number of edges in the graph.
        edges: usize,
        /// Number of weights supplied by the caller.
        weights: usize,
    },
    /// An edge weight was NaN or infinite.
    NonFiniteWeight {
        /// Index of the offending edge.
        edge: usize,
        /// Source endpoint of the offending edge.
        source: usize,
        /// Target endpoint of the offending edge.
        target: usize,
    },
}

impl core::fmt::Display for BptError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyGraph => {
                write!(f, "cannot build a binary partition tree for an empty graph")
            }
            Self::WeightCountMismatch { edges, weights } => {
                write!(f, "graph has {edges} edges but {weights} weights were supplied")
            }
            Self::NonFiniteWeight {
                edge,
                source,
                target,
            } => {
                write!(f, "edge {edge} ({source}, {target}) has non-finite weight")
            }
        }
    }
}

impl std::error::Error for BptError {}

impl BptError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> BptErrorCode {
        match self {
            Self::EmptyGraph => BptErrorCode::EmptyGraph,
            Self::WeightCountMismatch { .. } => BptErrorCode::WeightCountMismatch,
            Self::NonFiniteWeight { .. } => BptErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`BptError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BptErrorCode {
    /// The caller requested a BPT for a graph with no vertices.
    EmptyGraph,
    /// The weight array length did not match the edge count.
    WeightCountMismatch,
    /// An edge weight was NaN or infinite.
    NonFiniteWeight,
}

impl BptErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "BPT_EMPTY_GRAPH",
            Self::WeightCountMismatch => "BPT_WEIGHT_COUNT_MISMATCH",
            Self::NonFiniteWeight => "BPT_NON_FINITE_WEIGHT",
        }
    }
}

/// The output of a canonical BPT construction.
///
/// Aggregates the merge hierarchy, the altitude at which every node was
/// created (zero for leaves), and the minimum spanning forest. The three
/// parts share the input's vertex ids: tree nodes `0..n` are the graph
/// vertices, and the MST edge list keeps the original edge orientation.
#[derive(Clone, Debug, PartialEq)]
pub struct CanonicalBpt {
    tree: Tree,
    altitudes: Vec<f32>,
    mst: Graph,
}

impl CanonicalBpt {
    /// Returns the merge hierarchy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tree(&self) -> &Tree { &self.tree }

    /// Returns the altitude per tree node, indexed like the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn altitudes(&self) -> &[f32] { &self.altitudes }

    /// Returns the minimum spanning forest with edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mst(&self) -> &Graph { &self.mst }

    /// Consumes the result and returns its three independent parts.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<f32>, Graph) {
        (self.tree, self.altitudes, self.mst)
    }
}

/// Builds the canonical BPT of `graph` under the supplied edge weights.
///
/// Edges are processed in ascending `(weight, edge index)` order; each edge
/// joining two distinct components is added to the MST and recorded as an
/// internal node with the edge's weight as altitude. Disconnected inputs are
/// a normal case and yield one sub-tree root per component, for a total of
/// `2n - c` tree nodes.
///
/// # Errors
///
/// Returns an error when:
/// - the graph has no vertices
/// - `weights.len() != graph.num_edges()`
/// - a weight is NaN or infinite
///
/// # Examples
/// ```
/// use dendra_core::{Graph, bpt_canonical};
///
/// let mut graph = Graph::new(2);
/// graph.add_edge(0, 1)?;
/// let bpt = bpt_canonical(&graph, &[2.0])?;
/// assert_eq!(bpt.tree().parents(), &[2, 2, 2]);
/// assert_eq!(bpt.altitudes(), &[0.0, 0.0, 2.0]);
/// assert_eq!(bpt.mst().num_edges(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "bpt.build",
    err,
    skip(graph, weights),
    fields(vertices = graph.num_vertices(), edges = graph.num_edges()),
)]
pub fn bpt_canonical(graph: &Graph, weights: &[f32]) -> Result<CanonicalBpt, BptError> {
    validate(graph, weights)?;

    let build = builder::build(graph, weights);
    let num_leaves = graph.num_vertices();
    let tree = Tree::from_build(num_leaves, build.parents);
    let mst = Graph::from_parts(num_leaves, build.mst_edges);

    info!(
        nodes = tree.num_vertices(),
        roots = tree.roots().len(),
        mst_edges = mst.num_edges(),
        "canonical BPT construction completed"
    );

    Ok(CanonicalBpt {
        tree,
        altitudes: build.altitudes,
        mst,
    })
}

fn validate(graph: &Graph, weights: &[f32]) -> Result<(), BptError> {
    if graph.num_vertices() == 0 {
        return Err(BptError::EmptyGraph);
    }
    if weights.len() != graph.num_edges() {
        return Err(BptError::WeightCountMismatch {
            edges: graph.num_edges(),
            weights: weights.len(),
        });
    }
    for (edge, ((source, target), weight)) in graph.edges().zip(weights).enumerate() {
        if !weight.is_finite() {
            return Err(BptError::NonFiniteWeight {
                edge,
                source,
                target,
            });
        }
    }
    Ok(())
}

//! Type definitions for BPT property-based tests.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing the
    /// index-based tie-break.
    ManyIdentical,
    /// Sparse graph built as a random spanning tree plus a few extra edges.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for BPT property tests.
///
/// Captures the generated graph, its parallel weight array, and the weight
/// distribution used during generation for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct BptFixture {
    /// Generated input graph.
    pub graph: Graph,
    /// One weight per graph edge, in edge order.
    pub weights: Vec<f32>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

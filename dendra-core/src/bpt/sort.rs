//! Deterministic edge ordering for the BPT merge loop.

use rayon::prelude::*;

/// Returns the edge indices `0..weights.len()` sorted ascending by
/// `(weight, index)`.
///
/// The key includes the original index, so the unstable parallel sort still
/// yields one fully deterministic order: equal weights are broken by
/// insertion position, making every downstream output reproducible
/// bit-for-bit.
pub(super) fn sorted_edge_indices(weights: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..weights.len()).collect();
    order.par_sort_unstable_by(|&left, &right| {
        weights[left]
            .total_cmp(&weights[right])
            .then_with(|| left.cmp(&right))
    });
    order
}

//! Per-node attribute arrays derived from a built tree.
//!
//! Every computation is a single index pass exploiting the topological node
//! order: ascending ids visit each child before its parent, descending ids
//! each parent before its children, so no explicit child lists are needed.


use thiserror::Error;

use crate::tree::Tree;

/// Errors returned by attribute computations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttributeError {
    /// An input array length did not match the expected node or leaf count.
    #[error("{argument} has length {actual}, expected {expected}")]
    LengthMismatch {
        /// Name of the offending argument.
        argument: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count supplied by the caller.
        actual: usize,
    },
}

impl AttributeError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> AttributeErrorCode {
        match self {
            Self::LengthMismatch { .. } => AttributeErrorCode::LengthMismatch,
        }
    }
}

/// Machine-readable error codes for [`AttributeError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AttributeErrorCode {
    /// An input array length did not match the tree.
    LengthMismatch,
}

impl AttributeErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LengthMismatch => "ATTRIBUTE_LENGTH_MISMATCH",
        }
    }
}

fn check_length(
    argument: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), AttributeError> {
    if actual == expected {
        Ok(())
    } else {
        Err(AttributeError::LengthMismatch {
            argument,
            expected,
            actual,
        })
    }
}

/// Returns the number of leaf descendants of every node.
///
/// # Examples
/// ```
/// use dendra_core::{Tree, attributes};
///
/// let tree = Tree::from_parents(2, vec![2, 2, 2])?;
/// assert_eq!(attributes::area(&tree), vec![1, 1, 2]);
/// # Ok::<(), dendra_core::TreeError>(())
/// ```
#[must_use]
pub fn area(tree: &Tree) -> Vec<u64> {
    let mut area = vec![0_u64; tree.num_vertices()];
    for leaf in 0..tree.num_leaves() {
        area[leaf] = 1;
    }
    accumulate_into_parents(tree, &mut area, |parent, child| *parent += child);
    area
}

/// Returns the sum of leaf areas over every node's subtree.
///
/// # Errors
/// Returns [`AttributeError::LengthMismatch`] when `leaf_area` does not
/// carry one value per leaf.
pub fn area_with_leaf_weights(tree: &Tree, leaf_area: &[f32]) -> Result<Vec<f32>, AttributeError> {
    check_length("leaf_area", tree.num_leaves(), leaf_area.len())?;
    let mut area = vec![0.0_f32; tree.num_vertices()];
    area[..tree.num_leaves()].copy_from_slice(leaf_area);
    accumulate_into_parents(tree, &mut area, |parent, child| *parent += child);
    Ok(area)
}

/// Returns the number of ancestors of every node; roots have depth zero.
#[must_use]
pub fn depth(tree: &Tree) -> Vec<u64> {
    let mut depth = vec![0_u64; tree.num_vertices()];
    for node in tree.root_to_leaves() {
        let parent = tree.parents()[node];
        if parent != node {
            depth[node] = depth[parent] + 1;
        }
    }
    depth
}

/// Returns, for every node, the difference between its altitude and the
/// minimum altitude in its subtree.
///
/// Precondition: altitudes are non-decreasing from the leaves to the roots,
/// which constructions in this crate guarantee.
///
/// # Errors
/// Returns [`AttributeError::LengthMismatch`] when `altitudes` does not
/// carry one value per tree node.
pub fn height(tree: &Tree, altitudes: &[f32]) -> Result<Vec<f32>, AttributeError> {
    check_length("altitudes", tree.num_vertices(), altitudes.len())?;
    let mut minima = altitudes.to_vec();
    accumulate_into_parents(tree, &mut minima, |parent, child| {
        *parent = parent.min(child);
    });
    Ok(altitudes
        .iter()
        .zip(&minima)
        .map(|(&altitude, &minimum)| altitude - minimum)
        .collect())
}

/// Returns the volume of every node:
/// `|altitude[n] - altitude[parent(n)]| * area[n]` plus the volumes of its
/// children. Roots contribute no parent-difference term of their own.
///
/// # Errors
/// Returns [`AttributeError::LengthMismatch`] when `altitudes` or `area` do
/// not carry one value per tree node.
pub fn volume(tree: &Tree, altitudes: &[f32], area: &[f32]) -> Result<Vec<f32>, AttributeError> {
    check_length("altitudes", tree.num_vertices(), altitudes.len())?;
    check_length("area", tree.num_vertices(), area.len())?;

    let mut volume: Vec<f32> = tree
        .leaves_to_root()
        .map(|node| {
            let parent = tree.parents()[node];
            (altitudes[node] - altitudes[parent]).abs() * area[node]
        })
        .collect();
    accumulate_into_parents(tree, &mut volume, |parent, child| *parent += child);
    Ok(volume)
}

/// Returns the extinction value of every node for the base attribute
/// `base`: a root keeps its base value, and a node inherits its parent's
/// extinction when its base value equals the maximum base value among its
/// siblings, otherwise it keeps its own base value.
///
/// Precondition: `base` is non-decreasing from the leaves to the roots.
///
/// # Errors
/// Returns [`AttributeError::LengthMismatch`] when `base` does not carry
/// one value per tree node.
pub fn extinction(tree: &Tree, base: &[f32]) -> Result<Vec<f32>, AttributeError> {
    check_length("base", tree.num_vertices(), base.len())?;

    // Maximum base value among each node's children.
    let mut max_child = vec![f32::NEG_INFINITY; tree.num_vertices()];
    for node in tree.leaves_to_root() {
        let parent = tree.parents()[node];
        if parent != node {
            max_child[parent] = max_child[parent].max(base[node]);
        }
    }

    let mut extinction = vec![0.0_f32; tree.num_vertices()];
    for node in tree.root_to_leaves() {
        let parent = tree.parents()[node];
        if parent == node {
            extinction[node] = base[node];
        } else if base[node] == max_child[parent] {
            extinction[node] = extinction[parent];
        } else {
            extinction[node] = base[node];
        }
    }
    Ok(extinction)
}

/// Ascending pass folding every non-root node's value into its parent.
fn accumulate_into_parents<T: Copy>(tree: &Tree, values: &mut [T], mut fold: impl FnMut(&mut T, T)) {
    for node in tree.leaves_to_root() {
        let parent = tree.parents()[node];
        if parent != node {
            let child = values[node];
            fold(&mut values[parent], child);
        }
    }
}

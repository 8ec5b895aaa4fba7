//! Dendra core library.
//!
//! Builds canonical binary partition trees (BPTs) from edge-weighted graphs:
//! given a graph and one dissimilarity weight per edge, [`bpt_canonical`]
//! produces the minimum spanning forest of the graph together with the full
//! merge hierarchy recorded as a parent-pointer [`Tree`] and a per-node
//! altitude array.
//!
//! The [`grid`] module provides the regular-grid graph builders that image
//! pipelines use as input, and [`attributes`] derives per-node attribute
//! arrays (area, depth, height, volume, extinction) from a built tree.

pub mod attributes;
mod bpt;
mod graph;
pub mod grid;
mod tree;

pub use crate::{
    bpt::{BptError, BptErrorCode, CanonicalBpt, bpt_canonical},
    graph::{Graph, GraphError, GraphErrorCode},
    tree::{Tree, TreeError, TreeErrorCode},
};

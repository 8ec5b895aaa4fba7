//! Parent-array tree produced by the canonical BPT builder.
//!
//! Node ids are topological: every non-root node's parent carries a strictly
//! greater id, leaves occupy ids `0..num_leaves`, and internal nodes follow
//! in merge order. Consumers exploit this to compute subtree quantities with
//! plain index passes instead of explicit child lists.

use thiserror::Error;

/// A rooted forest stored as one parent pointer per node.
///
/// A root is its own parent; connected inputs yield a single root, while
/// disconnected inputs yield one root per component.
///
/// # Examples
/// ```
/// use dendra_core::Tree;
///
/// let tree = Tree::from_parents(2, vec![2, 2, 2])?;
/// assert_eq!(tree.num_vertices(), 3);
/// assert_eq!(tree.num_edges(), 2);
/// assert_eq!(tree.roots(), &[2]);
/// assert_eq!(tree.parent(0), Some(2));
/// # Ok::<(), dendra_core::TreeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    num_leaves: usize,
    parents: Vec<usize>,
    roots: Vec<usize>,
}

/// Errors returned while validating a parent array.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum TreeError {
    /// The declared leaf count exceeds the number of nodes.
    #[error("num_leaves {num_leaves} exceeds node count {num_nodes}")]
    LeafCountExceedsNodes {
        /// Declared number of leaves.
        num_leaves: usize,
        /// Total number of nodes in the parent array.
        num_nodes: usize,
    },
    /// A parent pointer referenced a node outside the tree.
    #[error("node {node} has parent {parent}, but the tree has {num_nodes} nodes")]
    ParentOutOfRange {
        /// The child node id.
        node: usize,
        /// The invalid parent id.
        parent: usize,
        /// Total number of nodes in the parent array.
        num_nodes: usize,
    },
    /// A non-root node's parent did not carry a strictly greater id.
    #[error("node {node} has parent {parent}, violating topological ordering")]
    ParentNotAfterChild {
        /// The child node id.
        node: usize,
        /// The offending parent id.
        parent: usize,
    },
    /// A leaf id was used as a parent.
    #[error("node {node} has leaf {parent} as parent")]
    LeafUsedAsParent {
        /// The child node id.
        node: usize,
        /// The leaf id wrongly used as a parent.
        parent: usize,
    },
}

impl TreeError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> TreeErrorCode {
        match self {
            Self::LeafCountExceedsNodes { .. } => TreeErrorCode::LeafCountExceedsNodes,
            Self::ParentOutOfRange { .. } => TreeErrorCode::ParentOutOfRange,
            Self::ParentNotAfterChild { .. } => TreeErrorCode::ParentNotAfterChild,
            Self::LeafUsedAsParent { .. } => TreeErrorCode::LeafUsedAsParent,
        }
    }
}

/// Machine-readable error codes for [`TreeError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TreeErrorCode {
    /// The declared leaf count exceeds the number of nodes.
    LeafCountExceedsNodes,
    /// A parent pointer referenced a node outside the tree.
    ParentOutOfRange,
    /// A non-root node's parent did not carry a strictly greater id.
    ParentNotAfterChild,
    /// A leaf id was used as a parent.
    LeafUsedAsParent,
}

impl TreeErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeafCountExceedsNodes => "TREE_LEAF_COUNT_EXCEEDS_NODES",
            Self::ParentOutOfRange => "TREE_PARENT_OUT_OF_RANGE",
            Self::ParentNotAfterChild => "TREE_PARENT_NOT_AFTER_CHILD",
            Self::LeafUsedAsParent => "TREE_LEAF_USED_AS_PARENT",
        }
    }
}

impl Tree {
    /// Validates a parent array and builds a tree from it.
    ///
    /// # Errors
    /// Returns [`TreeError`] when `num_leaves` exceeds the node count, a
    /// parent pointer is out of range, a non-root parent id is not strictly
    /// greater than its child, or a leaf id appears as a parent.
    pub fn from_parents(num_leaves: usize, parents: Vec<usize>) -> Result<Self, TreeError> {
        let num_nodes = parents.len();
        if num_leaves > num_nodes {
            return Err(TreeError::LeafCountExceedsNodes {
                num_leaves,
                num_nodes,
            });
        }
        for (node, &parent) in parents.iter().enumerate() {
            if parent == node {
                continue;
            }
            if parent >= num_nodes {
                return Err(TreeError::ParentOutOfRange {
                    node,
                    parent,
                    num_nodes,
                });
            }
            if parent < node {
                return Err(TreeError::ParentNotAfterChild { node, parent });
            }
            if parent < num_leaves {
                return Err(TreeError::LeafUsedAsParent { node, parent });
            }
        }
        Ok(Self::from_build(num_leaves, parents))
    }

    /// Builds a tree from a parent array the builder already guarantees to
    /// be well-formed.
    pub(crate) fn from_build(num_leaves: usize, parents: Vec<usize>) -> Self {
        let roots = parents
            .iter()
            .enumerate()
            .filter_map(|(node, &parent)| (parent == node).then_some(node))
            .collect();
        Self {
            num_leaves,
            parents,
            roots,
        }
    }

    /// Returns the total number of nodes (leaves plus internal nodes).
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_vertices(&self) -> usize { self.parents.len() }

    /// Returns the number of parent links, excluding root self-links.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.parents.len() - self.roots.len()
    }

    /// Returns the number of leaves.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_leaves(&self) -> usize { self.num_leaves }

    /// Returns the parent array; a root is its own parent.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parents }

    /// Returns the parent of `node`, or `None` when `node` is out of range.
    /// A root returns its own id.
    #[must_use]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents.get(node).copied()
    }

    /// Returns the component roots in ascending id order.
    #[must_use]
    #[rustfmt::skip]
    pub fn roots(&self) -> &[usize] { &self.roots }

    /// Returns `true` when `node` is a component root.
    #[must_use]
    pub fn is_root(&self, node: usize) -> bool {
        self.parents.get(node).copied() == Some(node)
    }

    /// Returns `true` when `node` is a leaf.
    #[must_use]
    pub const fn is_leaf(&self, node: usize) -> bool {
        node < self.num_leaves
    }

    /// Iterates node ids from leaves towards the roots (ascending id order,
    /// which visits every child before its parent).
    pub fn leaves_to_root(&self) -> impl Iterator<Item = usize> {
        0..self.parents.len()
    }

    /// Iterates node ids from the roots towards the leaves (descending id
    /// order, which visits every parent before its children).
    pub fn root_to_leaves(&self) -> impl Iterator<Item = usize> {
        (0..self.parents.len()).rev()
    }
}

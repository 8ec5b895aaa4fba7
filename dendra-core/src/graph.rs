//! Edge-list graph container shared by inputs and MST outputs.
//!
//! Vertices are dense indices `0..num_vertices` and edges are identified by
//! their insertion position, which is preserved in every output the crate
//! produces. Parallel edges and self-loops are accepted; the BPT builder
//! skips self-loops naturally because both endpoints share a component.

use thiserror::Error;

/// An undirected graph stored as a vertex count and an insertion-ordered
/// edge list.
///
/// # Examples
/// ```
/// use dendra_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1)?;
/// graph.add_edge(1, 2)?;
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.num_edges(), 2);
/// assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
/// # Ok::<(), dendra_core::GraphError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
}

/// Errors returned while assembling a [`Graph`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge referenced a vertex id outside `0..num_vertices`.
    #[error("edge references vertex {vertex}, but num_vertices is {num_vertices}")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        num_vertices: usize,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::VertexOutOfRange { .. } => GraphErrorCode::VertexOutOfRange,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge referenced a vertex id outside the graph.
    VertexOutOfRange,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexOutOfRange => "GRAPH_VERTEX_OUT_OF_RANGE",
        }
    }
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    #[must_use]
    pub const fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from pre-validated parts. Callers guarantee every
    /// endpoint is within `0..num_vertices`.
    pub(crate) fn from_parts(num_vertices: usize, edges: Vec<(usize, usize)>) -> Self {
        debug_assert!(
            edges
                .iter()
                .all(|&(s, t)| s < num_vertices && t < num_vertices)
        );
        Self {
            num_vertices,
            edges,
        }
    }

    /// Appends an edge and returns its index.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not
    /// a valid vertex id.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize, GraphError> {
        for vertex in [source, target] {
            if vertex >= self.num_vertices {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    num_vertices: self.num_vertices,
                });
            }
        }
        self.edges.push((source, target));
        Ok(self.edges.len() - 1)
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_vertices(&self) -> usize { self.num_vertices }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn num_edges(&self) -> usize { self.edges.len() }

    /// Returns the endpoints of the edge at `index`, in insertion
    /// orientation.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<(usize, usize)> {
        self.edges.get(index).copied()
    }

    /// Returns a lazy, restartable iterator over the edges in insertion
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }
}

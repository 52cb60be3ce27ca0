//! Undirected graph value type.
//!
//! [`Graph`] is immutable once built. Its edge list is canonical:
//! every pair is `(u, v)` with `u < v`, there are no self-loops or
//! duplicates, and the list is sorted so that iteration order is
//! deterministic.

use crate::error::{ChromaError, Result};

/// An undirected simple graph stored as a canonical edge list.
///
/// # Examples
///
/// ```
/// use u_chroma::Graph;
///
/// // Self-loops are dropped, (2, 1) is canonicalized and deduplicated.
/// let g = Graph::new(3, [(0, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
/// assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GraphRepr")
)]
pub struct Graph {
    n_vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds a graph from `n_vertices` and any collection of 0-indexed edges.
    ///
    /// Self-loops are dropped, each pair is ordered `u < v`, duplicates are
    /// removed and the result is sorted.
    ///
    /// # Errors
    /// [`ChromaError::InvalidEdge`] if an endpoint is `>= n_vertices`.
    pub fn new<I>(n_vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut canonical = Vec::new();
        for (u, v) in edges {
            if u >= n_vertices || v >= n_vertices {
                return Err(ChromaError::InvalidEdge { u, v, n_vertices });
            }
            if u == v {
                continue;
            }
            canonical.push(if u < v { (u, v) } else { (v, u) });
        }
        canonical.sort_unstable();
        canonical.dedup();

        Ok(Self {
            n_vertices,
            edges: canonical,
        })
    }

    /// Graph with `n_vertices` and no edges.
    pub fn empty(n_vertices: usize) -> Self {
        Self {
            n_vertices,
            edges: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn n_vertices(&self) -> usize {
        self.n_vertices
    }

    /// Canonical, sorted edge list.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of edges.
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }

    /// Degree of every vertex.
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.n_vertices];
        for &(u, v) in &self.edges {
            degrees[u] += 1;
            degrees[v] += 1;
        }
        degrees
    }

    /// Edge density: `|E| / (|V| * (|V| - 1) / 2)`, or 0 for fewer than two vertices.
    pub fn density(&self) -> f64 {
        let n = self.n_vertices;
        if n > 1 {
            (2.0 * self.edges.len() as f64) / (n * (n - 1)) as f64
        } else {
            0.0
        }
    }
}

/// Unchecked wire form; deserialization goes through [`Graph::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GraphRepr {
    n_vertices: usize,
    edges: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRepr> for Graph {
    type Error = ChromaError;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        Graph::new(repr.n_vertices, repr.edges)
    }
}

//! Error types for u-chroma.
//!
//! All configuration problems are reported before the first generation runs.
//! Broken internal invariants (e.g. crossing parents of different length)
//! still panic, the same way the operators assert them.

use thiserror::Error;

/// Unified error type for graph construction, evaluation and GA runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChromaError {
    /// Invalid parameters: sizes, probabilities, weights, color budget.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A chromosome whose length disagrees with the graph's vertex count.
    #[error("dimension mismatch: chromosome has {actual} genes, graph has {expected} vertices")]
    DimensionMismatch { expected: usize, actual: usize },

    /// An operator name outside the documented catalog.
    #[error("unknown {kind} operator '{name}'")]
    UnknownOperator { kind: &'static str, name: String },

    /// An edge endpoint outside `0..n_vertices`.
    #[error("edge ({u}, {v}) out of range for graph with {n_vertices} vertices")]
    InvalidEdge {
        u: usize,
        v: usize,
        n_vertices: usize,
    },
}

impl ChromaError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ChromaError::InvalidConfiguration(message.into())
    }

    /// Creates an unknown-operator error.
    pub fn unknown_operator(kind: &'static str, name: impl Into<String>) -> Self {
        ChromaError::UnknownOperator {
            kind,
            name: name.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChromaError>;

//! Fitness evaluation for colorings.
//!
//! [`evaluate`] counts conflicts and distinct colors; [`fitness`] folds
//! them into the scalar the engine minimizes:
//!
//! ```text
//! fitness = w_conflict * conflicts + w_colors * colors_used
//! ```
//!
//! With the default weights (1000, 1) removing a single conflict always
//! beats any reduction in color count, so conflicts act as a hard
//! constraint and color count as a secondary objective.

use crate::error::{ChromaError, Result};
use crate::graph::Graph;
use std::collections::HashSet;

/// Conflict count and color usage of one chromosome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// Edges whose endpoints share a color.
    pub conflicts: usize,
    /// Number of distinct colors appearing in the chromosome.
    pub colors_used: usize,
}

/// Weights of the scalar objective.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    /// Weight per conflicting edge.
    pub conflict: f64,
    /// Weight per distinct color used.
    pub colors: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            conflict: 1000.0,
            colors: 1.0,
        }
    }
}

impl FitnessWeights {
    /// Creates weights.
    pub fn new(conflict: f64, colors: f64) -> Self {
        Self { conflict, colors }
    }

    /// Folds an evaluation into the scalar objective.
    pub fn combine(&self, evaluation: Evaluation) -> f64 {
        self.conflict * evaluation.conflicts as f64 + self.colors * evaluation.colors_used as f64
    }

    /// Validates the weights for a run with `n_colors` on `n_vertices`.
    ///
    /// One conflict must outweigh the largest achievable drop in color
    /// count, which is `min(n_colors, n_vertices) - 1`.
    pub fn validate(&self, n_colors: usize, n_vertices: usize) -> Result<()> {
        if !self.conflict.is_finite() || !self.colors.is_finite() {
            return Err(ChromaError::config("fitness weights must be finite"));
        }
        if self.conflict <= 0.0 {
            return Err(ChromaError::config("conflict weight must be positive"));
        }
        if self.colors < 0.0 {
            return Err(ChromaError::config("color weight must be non-negative"));
        }
        let max_drop = n_colors.min(n_vertices).saturating_sub(1) as f64;
        if self.conflict <= self.colors * max_drop {
            return Err(ChromaError::config(format!(
                "conflict weight {} does not dominate color weight {} over {} colors",
                self.conflict, self.colors, n_colors
            )));
        }
        Ok(())
    }
}

/// Counts conflicts and distinct colors of `chromosome` on `graph`.
///
/// Every edge is checked; there is no early exit.
///
/// # Errors
/// [`ChromaError::DimensionMismatch`] if the chromosome length differs from
/// the vertex count.
pub fn evaluate(graph: &Graph, chromosome: &[usize]) -> Result<Evaluation> {
    if chromosome.len() != graph.n_vertices() {
        return Err(ChromaError::DimensionMismatch {
            expected: graph.n_vertices(),
            actual: chromosome.len(),
        });
    }

    let conflicts = graph
        .edges()
        .iter()
        .filter(|&&(u, v)| chromosome[u] == chromosome[v])
        .count();
    let colors_used = chromosome.iter().collect::<HashSet<_>>().len();

    Ok(Evaluation {
        conflicts,
        colors_used,
    })
}

/// Scalar fitness of `chromosome` under `weights`. Lower is better.
pub fn fitness(graph: &Graph, chromosome: &[usize], weights: &FitnessWeights) -> Result<f64> {
    evaluate(graph, chromosome).map(|ev| weights.combine(ev))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::new(3, [(0, 1), (1, 2), (0, 2)]).unwrap()
    }

    #[test]
    fn test_proper_coloring() {
        let ev = evaluate(&triangle(), &[0, 1, 2]).unwrap();
        assert_eq!(
            ev,
            Evaluation {
                conflicts: 0,
                colors_used: 3
            }
        );
    }

    #[test]
    fn test_monochrome_triangle() {
        let ev = evaluate(&triangle(), &[4, 4, 4]).unwrap();
        assert_eq!(ev.conflicts, 3);
        assert_eq!(ev.colors_used, 1);
    }

    #[test]
    fn test_unused_colors_not_counted() {
        let g = Graph::empty(4);
        let ev = evaluate(&g, &[7, 0, 7, 0]).unwrap();
        assert_eq!(ev.colors_used, 2);
        assert_eq!(ev.conflicts, 0);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = evaluate(&triangle(), &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            ChromaError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_empty_graph_empty_chromosome() {
        let ev = evaluate(&Graph::empty(0), &[]).unwrap();
        assert_eq!(ev.conflicts, 0);
        assert_eq!(ev.colors_used, 0);
    }

    #[test]
    fn test_weighted_fitness() {
        let f = fitness(&triangle(), &[0, 0, 1], &FitnessWeights::default()).unwrap();
        // one conflict (0,1), two colors
        assert!((f - 1002.0).abs() < 1e-12);

        let f = fitness(&triangle(), &[0, 0, 1], &FitnessWeights::new(10.0, 0.5)).unwrap();
        assert!((f - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_conflict_beats_any_conflict() {
        let g = Graph::new(4, [(0, 1)]).unwrap();
        let w = FitnessWeights::default();
        let proper_many_colors = fitness(&g, &[0, 1, 2, 3], &w).unwrap();
        let conflicting_one_color = fitness(&g, &[0, 0, 0, 0], &w).unwrap();
        assert!(proper_many_colors < conflicting_one_color);
    }

    #[test]
    fn test_default_weights_validate() {
        assert!(FitnessWeights::default().validate(9, 49).is_ok());
    }

    #[test]
    fn test_weights_must_dominate() {
        // 5 colors on 10 vertices: a drop of up to 4 colors is achievable.
        assert!(FitnessWeights::new(4.0, 1.0).validate(5, 10).is_err());
        assert!(FitnessWeights::new(4.5, 1.0).validate(5, 10).is_ok());
        // With only 2 vertices at most one color can be saved.
        assert!(FitnessWeights::new(1.5, 1.0).validate(5, 2).is_ok());
    }

    #[test]
    fn test_weights_reject_bad_values() {
        assert!(FitnessWeights::new(0.0, 0.0).validate(3, 3).is_err());
        assert!(FitnessWeights::new(f64::NAN, 1.0).validate(3, 3).is_err());
        assert!(FitnessWeights::new(1000.0, -1.0).validate(3, 3).is_err());
        assert!(FitnessWeights::new(1.0, 0.0).validate(3, 3).is_ok());
    }
}

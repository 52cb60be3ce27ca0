//! Chromosome representation and operator capability traits.
//!
//! A [`Chromosome`] is one color index per vertex. The traits
//! [`SelectOperator`], [`CrossoverOperator`] and [`MutateOperator`] are
//! the contract between the generic engine and the operator values a
//! caller injects. The built-in implementations are
//! [`Selection`](super::Selection), [`Crossover`](super::Crossover) and
//! [`Mutation`](super::Mutation).
//!
//! All operators follow copy-on-write: inputs are borrowed read-only and
//! every returned chromosome is a freshly owned vector, so no two
//! population slots ever alias the same genes.

use crate::error::{ChromaError, Result};
use crate::random::create_rng;
use rand::Rng;

/// A candidate coloring: gene `i` is the color of vertex `i`.
pub type Chromosome = Vec<usize>;

/// Draws a chromosome of `n_vertices` genes, each uniform in `0..n_colors`.
///
/// # Errors
/// [`ChromaError::InvalidConfiguration`] if `n_colors` is 0.
pub fn random_chromosome<R: Rng>(
    n_vertices: usize,
    n_colors: usize,
    rng: &mut R,
) -> Result<Chromosome> {
    if n_colors < 1 {
        return Err(ChromaError::config("n_colors must be at least 1"));
    }
    Ok((0..n_vertices)
        .map(|_| rng.random_range(0..n_colors))
        .collect())
}

/// Like [`random_chromosome`], but draws from a private stream built from `seed`.
///
/// The same seed always yields the same chromosome, and no other stream
/// is disturbed.
pub fn seeded_chromosome(n_vertices: usize, n_colors: usize, seed: u64) -> Result<Chromosome> {
    let mut rng = create_rng(seed);
    random_chromosome(n_vertices, n_colors, &mut rng)
}

/// Parent selection capability.
///
/// Lower fitness is better (minimization).
pub trait SelectOperator {
    /// Picks one parent and returns an owned copy of it.
    ///
    /// `fitnesses[i]` is the fitness of `population[i]`.
    fn select<R: Rng>(&self, population: &[Chromosome], fitnesses: &[f64], rng: &mut R)
        -> Chromosome;

    /// Checks the operator's parameters against the population size.
    ///
    /// Called by the engine before the first generation.
    fn validate(&self, _population_size: usize) -> Result<()> {
        Ok(())
    }
}

/// Recombination capability.
pub trait CrossoverOperator {
    /// Produces two children of the same length as the parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Chromosome, Chromosome);

    /// Checks the operator's parameters.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

/// Perturbation capability.
pub trait MutateOperator {
    /// Returns a mutated copy of `chromosome`.
    fn mutate<R: Rng>(&self, chromosome: &[usize], rng: &mut R) -> Chromosome;

    /// Checks the operator's parameters against the run's color budget.
    fn validate(&self, _n_colors: usize) -> Result<()> {
        Ok(())
    }
}

/// Checks that `p` is a probability.
pub(crate) fn check_probability(name: &str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(ChromaError::config(format!(
            "{name} must be in [0, 1], got {p}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_chromosome_shape() {
        let mut rng = create_rng(42);
        let ch = random_chromosome(50, 4, &mut rng).unwrap();
        assert_eq!(ch.len(), 50);
        assert!(ch.iter().all(|&c| c < 4));
    }

    #[test]
    fn test_random_chromosome_zero_vertices() {
        let mut rng = create_rng(42);
        let ch = random_chromosome(0, 3, &mut rng).unwrap();
        assert!(ch.is_empty());
    }

    #[test]
    fn test_random_chromosome_zero_colors() {
        let mut rng = create_rng(42);
        let err = random_chromosome(5, 0, &mut rng).unwrap_err();
        assert!(matches!(err, ChromaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_single_color_is_constant() {
        let mut rng = create_rng(42);
        let ch = random_chromosome(10, 1, &mut rng).unwrap();
        assert_eq!(ch, vec![0; 10]);
    }

    #[test]
    fn test_seeded_chromosome_reproducible() {
        let a = seeded_chromosome(30, 5, 9).unwrap();
        let b = seeded_chromosome(30, 5, 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uses_every_color_eventually() {
        let mut rng = create_rng(3);
        let ch = random_chromosome(500, 5, &mut rng).unwrap();
        for color in 0..5 {
            assert!(ch.contains(&color), "color {color} never drawn");
        }
    }

    #[test]
    fn test_check_probability() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert!(check_probability("p", 1.5).is_err());
        assert!(check_probability("p", -0.1).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }
}

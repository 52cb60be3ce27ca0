//! Crossover and mutation operators for color-index chromosomes.
//!
//! Every operator borrows its inputs and returns new vectors.
//!
//! # Crossover Operators
//!
//! - [`Crossover::OnePoint`]: head of one parent, tail of the other — O(n)
//! - [`Crossover::Uniform`]: per-gene coin flip between parents — O(n)
//!
//! Both are applied with probability `p`; otherwise the children are plain
//! copies of the parents.
//!
//! # Mutation Operators
//!
//! - [`Mutation::RandomReset`]: redraw each gene with probability `p_gene` — O(n)
//! - [`Mutation::Swap`]: exchange two positions with probability `p` — O(n) copy
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4

use super::types::{check_probability, Chromosome, CrossoverOperator, MutateOperator};
use crate::error::{ChromaError, Result};
use rand::seq::index;
use rand::Rng;
use std::str::FromStr;

/// Default crossover application probability.
pub const DEFAULT_CROSSOVER_RATE: f64 = 0.9;
/// Default per-gene reset probability.
pub const DEFAULT_GENE_RESET_RATE: f64 = 0.02;
/// Default swap probability.
pub const DEFAULT_SWAP_RATE: f64 = 0.3;

// ============================================================================
// Crossover operators
// ============================================================================

/// Recombination strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single cut point uniform in `1..len`.
    ///
    /// Parents shorter than two genes are always copied.
    OnePoint { p: f64 },

    /// Gene-level exchange: each position is swapped between the children
    /// with probability 1/2.
    Uniform { p: f64 },
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::OnePoint {
            p: DEFAULT_CROSSOVER_RATE,
        }
    }
}

impl Crossover {
    fn rate(&self) -> f64 {
        match *self {
            Crossover::OnePoint { p } | Crossover::Uniform { p } => p,
        }
    }
}

impl CrossoverOperator for Crossover {
    /// # Panics
    /// Panics if parents have different lengths.
    fn crossover<R: Rng>(
        &self,
        parent1: &[usize],
        parent2: &[usize],
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        assert_eq!(
            parent1.len(),
            parent2.len(),
            "parents must have equal length"
        );

        match *self {
            Crossover::OnePoint { p } => one_point_crossover(parent1, parent2, p, rng),
            Crossover::Uniform { p } => uniform_crossover(parent1, parent2, p, rng),
        }
    }

    fn validate(&self) -> Result<()> {
        check_probability("crossover rate", self.rate())
    }
}

impl FromStr for Crossover {
    type Err = ChromaError;

    /// Parses `"one_point"` (or `"1pt"`) and `"uniform"`, both with p = 0.9.
    fn from_str(s: &str) -> Result<Self> {
        let p = DEFAULT_CROSSOVER_RATE;
        match s.trim().to_ascii_lowercase().as_str() {
            "one_point" | "1pt" => Ok(Crossover::OnePoint { p }),
            "uniform" => Ok(Crossover::Uniform { p }),
            _ => Err(ChromaError::unknown_operator("crossover", s)),
        }
    }
}

/// One-point crossover.
///
/// The application draw happens before the length check so that the
/// stream advances the same way for every parent length.
pub fn one_point_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    p: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    if rng.random::<f64>() > p || n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    let mut child1 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1[..cut]);
    child1.extend_from_slice(&parent2[cut..]);
    let mut child2 = Vec::with_capacity(n);
    child2.extend_from_slice(&parent2[..cut]);
    child2.extend_from_slice(&parent1[cut..]);

    (child1, child2)
}

/// Uniform crossover.
pub fn uniform_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    p: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();
    if rng.random::<f64>() > p {
        return (child1, child2);
    }

    for i in 0..child1.len() {
        if rng.random::<f64>() < 0.5 {
            std::mem::swap(&mut child1[i], &mut child2[i]);
        }
    }
    (child1, child2)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Perturbation strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Each gene is redrawn uniformly from `0..n_colors` with probability `p_gene`.
    ///
    /// `n_colors` is the run's color budget, not the colors currently
    /// present in the chromosome.
    RandomReset { n_colors: usize, p_gene: f64 },

    /// With probability `p`, two distinct positions exchange colors.
    ///
    /// Chromosomes shorter than two genes pass through unchanged.
    Swap { p: f64 },
}

impl Mutation {
    /// Looks up a mutation by name with its default rate.
    ///
    /// Accepts `"random_reset"` (or `"reset"`) and `"swap"`.
    pub fn from_name(name: &str, n_colors: usize) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "random_reset" | "reset" => Ok(Mutation::RandomReset {
                n_colors,
                p_gene: DEFAULT_GENE_RESET_RATE,
            }),
            "swap" => Ok(Mutation::Swap {
                p: DEFAULT_SWAP_RATE,
            }),
            _ => Err(ChromaError::unknown_operator("mutation", name)),
        }
    }
}

impl MutateOperator for Mutation {
    fn mutate<R: Rng>(&self, chromosome: &[usize], rng: &mut R) -> Chromosome {
        match *self {
            Mutation::RandomReset { n_colors, p_gene } => {
                random_reset_mutation(chromosome, n_colors, p_gene, rng)
            }
            Mutation::Swap { p } => swap_mutation(chromosome, p, rng),
        }
    }

    fn validate(&self, n_colors: usize) -> Result<()> {
        match *self {
            Mutation::RandomReset {
                n_colors: own,
                p_gene,
            } => {
                if own < 1 {
                    return Err(ChromaError::config("mutation n_colors must be at least 1"));
                }
                if own > n_colors {
                    return Err(ChromaError::config(format!(
                        "mutation draws from {own} colors but the run allows {n_colors}"
                    )));
                }
                check_probability("gene reset rate", p_gene)
            }
            Mutation::Swap { p } => check_probability("swap rate", p),
        }
    }
}

/// Random-reset mutation.
///
/// # Panics
/// Panics if `n_colors` is 0 and a gene is selected for reset.
pub fn random_reset_mutation<R: Rng>(
    chromosome: &[usize],
    n_colors: usize,
    p_gene: f64,
    rng: &mut R,
) -> Chromosome {
    let mut out = chromosome.to_vec();
    for gene in out.iter_mut() {
        if rng.random::<f64>() < p_gene {
            *gene = rng.random_range(0..n_colors);
        }
    }
    out
}

/// Swap mutation.
pub fn swap_mutation<R: Rng>(chromosome: &[usize], p: f64, rng: &mut R) -> Chromosome {
    let mut out = chromosome.to_vec();
    let n = out.len();
    if n < 2 || rng.random::<f64>() > p {
        return out;
    }
    let picked = index::sample(rng, n, 2);
    out.swap(picked.index(0), picked.index(1));
    out
}

// ============================================================================
// Tests
// ============================================================================

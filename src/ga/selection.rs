//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Both strategies assume **minimization** and return an owned
//! copy of the chosen chromosome.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Chromosome, SelectOperator};
use crate::error::{ChromaError, Result};
use rand::seq::index;
use rand::Rng;
use std::str::FromStr;

/// Default guard added to fitness before inversion in roulette selection.
pub const ROULETTE_EPSILON: f64 = 1e-9;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_chroma::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Inverted roulette wheel
/// let sel: Selection = "roulette".parse().unwrap();
/// assert_eq!(sel, Selection::Roulette { epsilon: 1e-9 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` distinct individuals, keep the best.
    ///
    /// Higher `k` = stronger selection pressure; `k = 1` is uniform random
    /// selection. `k` must not exceed the population size.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate selection, inverted for minimization.
    ///
    /// Individual `i` is weighted by `1 / (fitness_i + epsilon)`. The
    /// epsilon keeps a zero fitness from dividing by zero.
    ///
    /// **Warning**: very small fitness values dominate the wheel.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette { epsilon: f64 },
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl SelectOperator for Selection {
    /// # Panics
    /// Panics if `population` is empty or `fitnesses` has a different length.
    fn select<R: Rng>(
        &self,
        population: &[Chromosome],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Chromosome {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );
        assert_eq!(
            population.len(),
            fitnesses.len(),
            "one fitness value per individual"
        );

        let idx = match self {
            Selection::Tournament(k) => tournament(fitnesses, *k, rng),
            Selection::Roulette { epsilon } => roulette(fitnesses, *epsilon, rng),
        };
        population[idx].clone()
    }

    fn validate(&self, population_size: usize) -> Result<()> {
        match *self {
            Selection::Tournament(k) => {
                if k == 0 {
                    return Err(ChromaError::config("tournament size must be at least 1"));
                }
                if k > population_size {
                    return Err(ChromaError::config(format!(
                        "tournament size {k} exceeds population_size {population_size}"
                    )));
                }
                Ok(())
            }
            Selection::Roulette { epsilon } => {
                if epsilon.is_finite() && epsilon > 0.0 {
                    Ok(())
                } else {
                    Err(ChromaError::config(format!(
                        "roulette epsilon must be positive and finite, got {epsilon}"
                    )))
                }
            }
        }
    }
}

impl FromStr for Selection {
    type Err = ChromaError;

    /// Parses `"tournament"` (k = 3) or `"roulette"`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tournament" => Ok(Selection::Tournament(3)),
            "roulette" => Ok(Selection::Roulette {
                epsilon: ROULETTE_EPSILON,
            }),
            _ => Err(ChromaError::unknown_operator("selection", s)),
        }
    }
}

/// Tournament selection: `k` distinct random indices, return the fittest.
///
/// Ties go to the index drawn first.
fn tournament<R: Rng>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    let n = fitnesses.len();
    let k = k.clamp(1, n);

    let mut contenders = index::sample(rng, n, k).into_iter();
    let mut best_idx = contenders.next().expect("k >= 1");
    for idx in contenders {
        if fitnesses[idx] < fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over inverted fitness.
///
/// Returns the first index whose running weight reaches a uniform threshold
/// in `[0, total)`. If rounding leaves the threshold unreached, the last
/// index is returned.
fn roulette<R: Rng>(fitnesses: &[f64], epsilon: f64, rng: &mut R) -> usize {
    let n = fitnesses.len();

    let weights: Vec<f64> = fitnesses.iter().map(|&f| 1.0 / (f + epsilon)).collect();
    let total: f64 = weights.iter().sum();

    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative >= threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    /// Population whose chromosome `i` is `[i]`, so a selected copy names its index.
    fn make_population(n: usize) -> Vec<Chromosome> {
        (0..n).map(|i| vec![i]).collect()
    }

    #[test]
    fn test_tournament_full_size_always_best() {
        let pop = make_population(4);
        let fits = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        // Sampling without replacement: k = n always sees the best.
        for _ in 0..1000 {
            let child = Selection::Tournament(4).select(&pop, &fits, &mut rng);
            assert_eq!(child, vec![2]);
        }
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(4);
        let fits = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let child = Selection::Tournament(2).select(&pop, &fits, &mut rng);
            counts[child[0]] += 1;
        }
        // Best wins every tournament it enters: P = 1/2.
        assert!(counts[2] > 4500, "got {counts:?}");
        // Worst never wins.
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let pop = make_population(4);
        let fits = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let child = Selection::Tournament(1).select(&pop, &fits, &mut rng);
            counts[child[0]] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = make_population(4);
        let fits = [100.0, 50.0, 1.0, 80.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let child = Selection::Roulette {
                epsilon: ROULETTE_EPSILON,
            }
            .select(&pop, &fits, &mut rng);
            counts[child[0]] += 1;
        }
        assert!(
            counts[2] > counts[1] && counts[1] > counts[0],
            "expected weight order, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_zero_fitness_dominates() {
        let pop = make_population(3);
        let fits = [0.0, 1000.0, 1000.0];
        let mut rng = create_rng(7);

        let picks_zero = (0..1000)
            .filter(|_| {
                Selection::Roulette {
                    epsilon: ROULETTE_EPSILON,
                }
                .select(&pop, &fits, &mut rng)
                    == vec![0]
            })
            .count();
        assert!(picks_zero > 990);
    }

    #[test]
    fn test_roulette_unreachable_threshold_returns_last() {
        // NaN weights make every cumulative comparison false.
        let fits = [f64::NAN, 1.0, 2.0];
        let mut rng = create_rng(42);
        for _ in 0..20 {
            assert_eq!(roulette(&fits, ROULETTE_EPSILON, &mut rng), 2);
        }
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(1);
        let fits = [5.0];
        let mut rng = create_rng(42);

        assert_eq!(Selection::Tournament(1).select(&pop, &fits, &mut rng), vec![0]);
        assert_eq!(
            Selection::Roulette { epsilon: 1e-9 }.select(&pop, &fits, &mut rng),
            vec![0]
        );
    }

    #[test]
    fn test_returns_copy() {
        let pop = vec![vec![1, 2, 3]];
        let mut rng = create_rng(42);
        let mut child = Selection::Tournament(1).select(&pop, &[0.0], &mut rng);
        child[0] = 9;
        assert_eq!(pop[0], vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Chromosome> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &[], &mut rng);
    }

    #[test]
    fn test_validate() {
        assert!(Selection::Tournament(3).validate(10).is_ok());
        assert!(Selection::Tournament(10).validate(10).is_ok());
        assert!(Selection::Tournament(0).validate(10).is_err());
        assert!(Selection::Tournament(11).validate(10).is_err());
        assert!(Selection::Roulette { epsilon: 1e-9 }.validate(1).is_ok());
        assert!(Selection::Roulette { epsilon: 0.0 }.validate(1).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("tournament".parse::<Selection>().unwrap(), Selection::Tournament(3));
        assert_eq!(
            " Roulette ".parse::<Selection>().unwrap(),
            Selection::Roulette {
                epsilon: ROULETTE_EPSILON
            }
        );
        let err = "rank".parse::<Selection>().unwrap_err();
        assert_eq!(err, ChromaError::unknown_operator("selection", "rank"));
    }
}

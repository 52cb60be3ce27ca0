//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → best tracking → elitism → selection →
//! crossover → mutation → repeat, until the generation budget runs out or
//! the all-time best stops improving for `patience` generations.

use super::config::GaParams;
use super::fitness::{evaluate, fitness, FitnessWeights};
use super::types::{
    random_chromosome, Chromosome, CrossoverOperator, MutateOperator, SelectOperator,
};
use crate::error::{ChromaError, Result};
use crate::graph::Graph;
use crate::random::rng_from_option;
use log::{debug, info, warn};
use rand::Rng;

/// Result of a GA run.
///
/// Field names are a fixed contract for reporting and plotting tools.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// The best chromosome found during the entire run.
    pub best_chromosome: Chromosome,

    /// Fitness of `best_chromosome`.
    pub best_fitness: f64,

    /// Conflicting edges in `best_chromosome`.
    pub best_conflicts: usize,

    /// Distinct colors in `best_chromosome`.
    pub best_colors_used: usize,

    /// All-time best fitness after each completed generation.
    ///
    /// Non-increasing by construction.
    pub history_best: Vec<f64>,

    /// Index of the last completed generation.
    pub stopped_generation: usize,

    /// Whether the run ended because patience ran out.
    pub stagnated: bool,
}

/// Snapshot passed to the per-generation observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,

    /// All-time best fitness after this generation.
    pub best_fitness: f64,

    /// Best fitness within this generation's population.
    pub generation_best_fitness: f64,

    /// Mean fitness of this generation's population.
    pub mean_fitness: f64,

    /// Consecutive generations without a strict improvement.
    pub stagnation: usize,
}

/// Executes the coloring GA.
///
/// # Usage
///
/// ```
/// use u_chroma::ga::{Crossover, FitnessWeights, GaParams, GaRunner, Mutation, Selection};
/// use u_chroma::Graph;
///
/// let graph = Graph::new(3, [(0, 1), (1, 2)]).unwrap();
/// let params = GaParams::default()
///     .with_population_size(10)
///     .with_generations(50)
///     .with_elitism(1)
///     .with_seed(0);
///
/// let result = GaRunner::run(
///     &graph,
///     2,
///     &Selection::Tournament(3),
///     &Crossover::OnePoint { p: 0.9 },
///     &Mutation::RandomReset { n_colors: 2, p_gene: 0.02 },
///     &params,
///     &FitnessWeights::default(),
/// )
/// .unwrap();
/// assert_eq!(result.best_conflicts, 0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a stream seeded from `params.seed`.
    ///
    /// # Errors
    /// [`ChromaError::InvalidConfiguration`] for bad parameters, detected
    /// before any generation runs. [`ChromaError::DimensionMismatch`] if an
    /// operator returns a chromosome of the wrong length.
    pub fn run<S, C, M>(
        graph: &Graph,
        n_colors: usize,
        selection: &S,
        crossover: &C,
        mutation: &M,
        params: &GaParams,
        weights: &FitnessWeights,
    ) -> Result<RunResult>
    where
        S: SelectOperator,
        C: CrossoverOperator,
        M: MutateOperator,
    {
        Self::run_with_observer(
            graph,
            n_colors,
            selection,
            crossover,
            mutation,
            params,
            weights,
            |_| {},
        )
    }

    /// Runs the GA, calling `on_generation` after every completed generation.
    #[allow(clippy::too_many_arguments)]
    pub fn run_with_observer<S, C, M, F>(
        graph: &Graph,
        n_colors: usize,
        selection: &S,
        crossover: &C,
        mutation: &M,
        params: &GaParams,
        weights: &FitnessWeights,
        on_generation: F,
    ) -> Result<RunResult>
    where
        S: SelectOperator,
        C: CrossoverOperator,
        M: MutateOperator,
        F: FnMut(&GenerationStats),
    {
        validate(graph, n_colors, selection, crossover, mutation, params, weights)?;

        let mut rng = rng_from_option(params.seed);
        evolve(
            graph,
            n_colors,
            selection,
            crossover,
            mutation,
            params,
            weights,
            &mut rng,
            on_generation,
        )
    }

    /// Runs the GA on a caller-owned random stream.
    ///
    /// `params.seed` is ignored; the caller decides how `rng` was seeded.
    #[allow(clippy::too_many_arguments)]
    pub fn run_with_rng<S, C, M, R>(
        graph: &Graph,
        n_colors: usize,
        selection: &S,
        crossover: &C,
        mutation: &M,
        params: &GaParams,
        weights: &FitnessWeights,
        rng: &mut R,
    ) -> Result<RunResult>
    where
        S: SelectOperator,
        C: CrossoverOperator,
        M: MutateOperator,
        R: Rng,
    {
        validate(graph, n_colors, selection, crossover, mutation, params, weights)?;
        evolve(
            graph,
            n_colors,
            selection,
            crossover,
            mutation,
            params,
            weights,
            rng,
            |_| {},
        )
    }
}

/// Checks every parameter before the first generation.
fn validate<S, C, M>(
    graph: &Graph,
    n_colors: usize,
    selection: &S,
    crossover: &C,
    mutation: &M,
    params: &GaParams,
    weights: &FitnessWeights,
) -> Result<()>
where
    S: SelectOperator,
    C: CrossoverOperator,
    M: MutateOperator,
{
    params.validate()?;
    if n_colors < 1 {
        return Err(ChromaError::config("n_colors must be at least 1"));
    }
    weights.validate(n_colors, graph.n_vertices())?;
    selection.validate(params.population_size)?;
    crossover.validate()?;
    mutation.validate(n_colors)
}

#[allow(clippy::too_many_arguments)]
fn evolve<S, C, M, R, F>(
    graph: &Graph,
    n_colors: usize,
    selection: &S,
    crossover: &C,
    mutation: &M,
    params: &GaParams,
    weights: &FitnessWeights,
    rng: &mut R,
    mut on_generation: F,
) -> Result<RunResult>
where
    S: SelectOperator,
    C: CrossoverOperator,
    M: MutateOperator,
    R: Rng,
    F: FnMut(&GenerationStats),
{
    // 1. Initialize population
    let mut population: Vec<Chromosome> = (0..params.population_size)
        .map(|_| random_chromosome(graph.n_vertices(), n_colors, rng))
        .collect::<Result<_>>()?;

    let mut best: Option<Chromosome> = None;
    let mut best_fitness = f64::INFINITY;
    let mut history_best = Vec::with_capacity(params.generations);
    let mut stagnation = 0usize;
    let mut stopped_generation = 0usize;
    let mut stagnated = false;

    // 2. Evolutionary loop
    for gen in 0..params.generations {
        let fitnesses = population
            .iter()
            .map(|ch| fitness(graph, ch, weights))
            .collect::<Result<Vec<f64>>>()?;

        // Update all-time best (strict improvement only)
        let (gen_best_idx, gen_best_fitness) = find_best(&fitnesses);
        if gen_best_fitness < best_fitness {
            best = Some(population[gen_best_idx].clone());
            best_fitness = gen_best_fitness;
            stagnation = 0;
        } else {
            stagnation += 1;
        }

        history_best.push(best_fitness);
        stopped_generation = gen;

        let stats = GenerationStats {
            generation: gen,
            best_fitness,
            generation_best_fitness: gen_best_fitness,
            mean_fitness: fitnesses.iter().sum::<f64>() / fitnesses.len() as f64,
            stagnation,
        };
        debug!(
            "generation {}: best={} generation_best={} mean={:.3} stagnation={}",
            stats.generation,
            stats.best_fitness,
            stats.generation_best_fitness,
            stats.mean_fitness,
            stats.stagnation
        );
        on_generation(&stats);

        // Stagnation check
        if params.patience > 0 && stagnation >= params.patience {
            stagnated = true;
            break;
        }
        if gen + 1 == params.generations {
            break;
        }

        population = next_generation(
            &population,
            &fitnesses,
            params,
            selection,
            crossover,
            mutation,
            rng,
        );
    }

    // Validated weights give finite fitness, so `best` is only `None` when
    // every fitness in every generation was NaN.
    let best_chromosome = match best {
        Some(ch) => ch,
        None => {
            let (ch, f) = fallback_best(graph, &population, weights)?;
            best_fitness = f;
            ch
        }
    };
    let best_eval = evaluate(graph, &best_chromosome)?;

    info!(
        "stopped at generation {} ({}): conflicts={} colors_used={} fitness={}",
        stopped_generation,
        if stagnated { "patience exhausted" } else { "budget exhausted" },
        best_eval.conflicts,
        best_eval.colors_used,
        best_fitness
    );

    Ok(RunResult {
        best_chromosome,
        best_fitness,
        best_conflicts: best_eval.conflicts,
        best_colors_used: best_eval.colors_used,
        history_best,
        stopped_generation,
        stagnated,
    })
}

/// Builds the next population: elites first, then mutated offspring.
fn next_generation<S, C, M, R>(
    population: &[Chromosome],
    fitnesses: &[f64],
    params: &GaParams,
    selection: &S,
    crossover: &C,
    mutation: &M,
    rng: &mut R,
) -> Vec<Chromosome>
where
    S: SelectOperator,
    C: CrossoverOperator,
    M: MutateOperator,
    R: Rng,
{
    // Elite preservation (stable: ties keep population order)
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| fitnesses[a].total_cmp(&fitnesses[b]));

    let mut next_gen: Vec<Chromosome> = Vec::with_capacity(params.population_size);
    next_gen.extend(order[..params.elitism].iter().map(|&i| population[i].clone()));

    // Generate offspring
    while next_gen.len() < params.population_size {
        let parent1 = selection.select(population, fitnesses, rng);
        let parent2 = selection.select(population, fitnesses, rng);
        let (child1, child2) = crossover.crossover(&parent1, &parent2, rng);
        let child1 = mutation.mutate(&child1, rng);
        let child2 = mutation.mutate(&child2, rng);

        next_gen.push(child1);
        if next_gen.len() < params.population_size {
            next_gen.push(child2);
        }
    }

    next_gen
}

/// First individual of the final population, re-evaluated.
fn fallback_best(
    graph: &Graph,
    population: &[Chromosome],
    weights: &FitnessWeights,
) -> Result<(Chromosome, f64)> {
    warn!("no finite best fitness recorded; falling back to first individual");
    let ch = population[0].clone();
    let f = fitness(graph, &ch, weights)?;
    Ok((ch, f))
}

/// Index and value of the strict minimum; the first one wins ties.
fn find_best(fitnesses: &[f64]) -> (usize, f64) {
    let mut best_idx = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f < fitnesses[best_idx] {
            best_idx = i;
        }
    }
    (best_idx, fitnesses[best_idx])
}

// ============================================================================
// Tests
// ============================================================================

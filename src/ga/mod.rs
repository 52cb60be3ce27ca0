//! Genetic Algorithm for graph coloring.
//!
//! Evolves a population of colorings toward zero conflicts and few colors.
//! The engine is generic over three operator capabilities, injected by the
//! caller as values:
//!
//! - [`SelectOperator`]: pick a parent ([`Selection`])
//! - [`CrossoverOperator`]: recombine two parents ([`Crossover`])
//! - [`MutateOperator`]: perturb a child ([`Mutation`])
//!
//! # Key Types
//!
//! - [`GaParams`]: Algorithm parameters (population, budget, elitism, patience)
//! - [`FitnessWeights`]: Weights of the conflict/color objective
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`RunResult`]: Best coloring found, with its history
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Eiben, Van Der Hauw & Van Hemert (1998), "Graph Coloring with Adaptive
//!   Evolutionary Algorithms"

mod config;
mod fitness;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaParams;
pub use fitness::{evaluate, fitness, Evaluation, FitnessWeights};
pub use operators::{Crossover, Mutation};
pub use runner::{GaRunner, GenerationStats, RunResult};
pub use selection::{Selection, ROULETTE_EPSILON};
pub use types::{
    random_chromosome, seeded_chromosome, Chromosome, CrossoverOperator, MutateOperator,
    SelectOperator,
};

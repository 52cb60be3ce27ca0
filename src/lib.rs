//! Evolutionary graph coloring.
//!
//! Searches for colorings of a [`Graph`] with a color budget `k` that have
//! no conflicting edges and use as few colors as possible. A population of
//! candidate colorings is evolved with pluggable selection, crossover and
//! mutation operators, elitism, and patience-based early stopping.
//!
//! # Example
//!
//! ```
//! use u_chroma::ga::{Crossover, FitnessWeights, GaParams, GaRunner, Mutation, Selection};
//! use u_chroma::Graph;
//!
//! // 5-cycle: needs 3 colors.
//! let graph = Graph::new(5, (0..5).map(|i| (i, (i + 1) % 5))).unwrap();
//! let k = 3;
//!
//! let result = GaRunner::run(
//!     &graph,
//!     k,
//!     &Selection::Tournament(3),
//!     &Crossover::Uniform { p: 0.9 },
//!     &Mutation::RandomReset { n_colors: k, p_gene: 0.05 },
//!     &GaParams::default().with_population_size(50).with_generations(200),
//!     &FitnessWeights::default(),
//! )
//! .unwrap();
//!
//! assert_eq!(result.best_chromosome.len(), 5);
//! assert!(result.best_colors_used <= k);
//! ```
//!
//! # Randomness
//!
//! There is no global generator. [`ga::GaRunner::run`] builds one stream
//! from the configured seed; every operator draws from the handle it is
//! given, so a seeded run is reproducible.

mod error;
pub mod ga;
pub mod graph;
pub mod random;

pub use error::{ChromaError, Result};
pub use graph::Graph;

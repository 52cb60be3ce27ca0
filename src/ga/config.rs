//! GA configuration.
//!
//! [`GaParams`] holds all parameters that control the evolutionary loop.

use crate::error::{ChromaError, Result};

/// Configuration for the coloring GA.
///
/// Controls population size, generation budget, elitism, seeding and
/// patience-based early stopping. The engine validates it before the
/// first generation and never mutates it.
///
/// # Defaults
///
/// ```
/// use u_chroma::ga::GaParams;
///
/// let params = GaParams::default();
/// assert_eq!(params.population_size, 200);
/// assert_eq!(params.generations, 300);
/// assert_eq!(params.elitism, 2);
/// assert_eq!(params.seed, Some(0));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_chroma::ga::GaParams;
///
/// let params = GaParams::default()
///     .with_population_size(300)
///     .with_generations(1500)
///     .with_patience(200)
///     .with_seed(0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaParams {
    /// Number of individuals in the population.
    ///
    /// Must be at least 1.
    pub population_size: usize,

    /// Maximum number of generations.
    ///
    /// Must be at least 1.
    pub generations: usize,

    /// Number of lowest-fitness individuals copied unchanged into the next
    /// generation.
    ///
    /// Must not exceed `population_size`.
    pub elitism: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Consecutive generations without a strict improvement of the all-time
    /// best before the run stops.
    ///
    /// Set to 0 to disable early stopping.
    pub patience: usize,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            population_size: 200,
            generations: 300,
            elitism: 2,
            seed: Some(0),
            patience: 200,
        }
    }
}

impl GaParams {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elitism(mut self, n: usize) -> Self {
        self.elitism = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clears the seed so each run draws fresh entropy.
    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Sets the patience (0 to disable).
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`ChromaError::InvalidConfiguration`] describing the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(ChromaError::config("population_size must be at least 1"));
        }
        if self.generations < 1 {
            return Err(ChromaError::config("generations must be at least 1"));
        }
        if self.elitism > self.population_size {
            return Err(ChromaError::config(format!(
                "elitism {} exceeds population_size {}",
                self.elitism, self.population_size
            )));
        }
        Ok(())
    }
}

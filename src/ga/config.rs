//! GA configuration.
//!
//! [`GaConfig`] holds the operator parameters used to build each generation
//! and the loop parameters used by [`NeuroRunner`](super::NeuroRunner).

use super::selection::Selection;
use crate::error::{EvoError, Result};

/// Configuration for evolving network weights.
///
/// # Defaults
///
/// ```
/// use u_neuroevo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.crossover_rate, 0.7);
/// assert_eq!(config.mutation_probability, 0.001);
/// assert_eq!(config.number_of_elite, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_neuroevo::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(60)
///     .with_selection(Selection::Tournament(4))
///     .with_elites(4, 1)
///     .with_mutation(0.05, 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Probability that two selected parents are recombined at all (0.0–1.0).
    ///
    /// When recombination is skipped the children are copies of the parents.
    pub crossover_rate: f64,

    /// Per-weight probability of mutation (0.0–1.0).
    pub mutation_probability: f64,

    /// Upper bound on the magnitude of a single mutation delta.
    pub mutation_max_amount: f64,

    /// Number of top genomes carried over unchanged.
    pub number_of_elite: usize,

    /// Copies of each elite placed in the next generation.
    pub copies_per_elite: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Number of genomes per generation.
    pub population_size: usize,

    /// Number of generations the runner builds.
    pub max_generations: usize,

    /// Whether the runner evaluates genomes in parallel.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.7,
            mutation_probability: 0.001,
            mutation_max_amount: 0.3,
            number_of_elite: 2,
            copies_per_elite: 1,
            selection: Selection::default(),
            population_size: 30,
            max_generations: 100,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-weight mutation probability and maximum delta.
    pub fn with_mutation(mut self, probability: f64, max_amount: f64) -> Self {
        self.mutation_probability = probability.clamp(0.0, 1.0);
        self.mutation_max_amount = max_amount.abs();
        self
    }

    /// Sets how many elites are kept and how often each is copied.
    pub fn with_elites(mut self, number_of_elite: usize, copies_per_elite: usize) -> Self {
        self.number_of_elite = number_of_elite;
        self.copies_per_elite = copies_per_elite;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset favouring exploration: frequent, larger mutations and
    /// a single elite.
    pub fn exploratory() -> Self {
        Self {
            mutation_probability: 0.05,
            mutation_max_amount: 0.5,
            number_of_elite: 1,
            ..Self::default()
        }
    }

    /// Preset favouring refinement: rare, small mutations and more elites.
    pub fn conservative() -> Self {
        Self {
            mutation_probability: 0.001,
            mutation_max_amount: 0.1,
            number_of_elite: 4,
            copies_per_elite: 1,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvoError::InvalidArgument`] describing the first bad
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvoError::invalid("crossover_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(EvoError::invalid("mutation_probability must be within [0, 1]"));
        }
        if !(self.mutation_max_amount >= 0.0 && self.mutation_max_amount.is_finite()) {
            return Err(EvoError::invalid(
                "mutation_max_amount must be finite and non-negative",
            ));
        }
        if self.population_size < 2 {
            return Err(EvoError::invalid("population_size must be at least 2"));
        }
        if self.max_generations == 0 {
            return Err(EvoError::invalid("max_generations must be at least 1"));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(EvoError::invalid("tournament size must be at least 1"));
        }
        Ok(())
    }
}

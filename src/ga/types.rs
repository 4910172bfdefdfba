//! The genome value type.
//!
//! A [`Genome`] pairs the flattened weights of one candidate network with
//! the fitness the evaluation harness assigned to it. Higher fitness is
//! better.

use crate::error::{EvoError, Result};
use crate::network::NeuralNet;
use std::cmp::Ordering;

/// One candidate network: its flat weight vector and its fitness.
///
/// All genomes in one population share the same weight-vector length;
/// operators that combine two genomes check this and fail with
/// [`EvoError::SizeMismatch`] otherwise.
///
/// # Examples
///
/// ```
/// use u_neuroevo::ga::Genome;
///
/// let mut pop = vec![
///     Genome::new(vec![0.1, 0.2], 3.0),
///     Genome::new(vec![0.3, 0.4], 1.0),
/// ];
/// pop.sort_by(Genome::cmp_fitness);
/// assert_eq!(pop[1].fitness, 3.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Genome {
    /// Inputs and bias per neuron, neurons in network traversal order.
    pub weights: Vec<f64>,
    /// Caller-assigned score; only meaningful relative to the same population.
    pub fitness: f64,
}

impl Genome {
    /// Creates a genome from weights and a fitness.
    pub fn new(weights: Vec<f64>, fitness: f64) -> Self {
        Self { weights, fitness }
    }

    /// Creates an unevaluated genome (zero fitness) from a network's weights.
    pub fn from_net(net: &NeuralNet) -> Self {
        Self::new(net.weights(), 0.0)
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the genome carries no weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Total order by fitness, ascending.
    ///
    /// NaN of either sign ranks worst, level with `-inf`, so a genome whose
    /// evaluation blew up can never become an elite.
    pub fn cmp_fitness(&self, other: &Genome) -> Ordering {
        rank_key(self.fitness).total_cmp(&rank_key(other.fitness))
    }

    /// Returns the shared length of two genomes, or
    /// [`EvoError::SizeMismatch`] if they differ.
    pub fn common_len(&self, other: &Genome) -> Result<usize> {
        if self.weights.len() != other.weights.len() {
            return Err(EvoError::SizeMismatch {
                expected: self.weights.len(),
                actual: other.weights.len(),
            });
        }
        Ok(self.weights.len())
    }
}

fn rank_key(fitness: f64) -> f64 {
    if fitness.is_nan() {
        f64::NEG_INFINITY
    } else {
        fitness
    }
}

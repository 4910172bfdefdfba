//! Assembling one generation from the previous one.
//!
//! elites → { select ×2 → neuron-aware crossover → mutate ×2 } until full

use super::config::GaConfig;
use super::elite::insert_elite;
use super::operators::{crossover_between_neurons, mutate};
use super::stats::FitnessStats;
use super::types::Genome;
use crate::error::{EvoError, Result};
use crate::network::NeuronLayout;
use crate::random::RandomSource;
use tracing::debug;

/// The next population plus the stats of the population it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    /// The new population, same size as its parent population.
    pub population: Vec<Genome>,
    /// Fitness aggregates of the parent population.
    pub parent_stats: FitnessStats,
}

/// Builds successive generations using the operator settings of a
/// [`GaConfig`].
///
/// Only the operator fields are read: `crossover_rate`,
/// `mutation_probability`, `mutation_max_amount`, `number_of_elite`,
/// `copies_per_elite` and `selection`.
///
/// # Examples
///
/// ```
/// use u_neuroevo::ga::{GaConfig, Genome, GenerationBuilder};
/// use u_neuroevo::network::NeuronLayout;
/// use u_neuroevo::random::RngSource;
///
/// let population: Vec<Genome> = (0..5)
///     .map(|i| Genome::new(vec![i as f64; 4], i as f64))
///     .collect();
/// let layout = NeuronLayout::from_neuron_sizes([2, 2]).unwrap();
/// let builder = GenerationBuilder::new(GaConfig::default());
///
/// let mut rng = RngSource::seeded(42);
/// let next = builder.build(&population, &layout, &mut rng).unwrap();
/// assert_eq!(next.population.len(), 5);
/// assert_eq!(next.population[0].fitness, 4.0); // best elite first
/// ```
#[derive(Debug, Clone)]
pub struct GenerationBuilder {
    config: GaConfig,
}

impl GenerationBuilder {
    /// Creates a builder from `config`.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Builds the generation that follows `genomes`.
    ///
    /// `genomes` is left untouched; elite extraction sorts a private copy.
    /// The result always has exactly `genomes.len()` members: the second
    /// child of the final pair is dropped when only one slot remains.
    ///
    /// # Errors
    /// - [`EvoError::EmptyInput`] if `genomes` is empty
    /// - [`EvoError::SizeMismatch`] if selected parents differ in length
    /// - [`EvoError::InvalidArgument`] if `layout` has fewer than two
    ///   offsets and offspring are needed
    /// - [`EvoError::EmptyInput`] if the genomes carry no weights and
    ///   offspring are needed
    pub fn build<R: RandomSource + ?Sized>(
        &self,
        genomes: &[Genome],
        layout: &NeuronLayout,
        rng: &mut R,
    ) -> Result<Generation> {
        if genomes.is_empty() {
            return Err(EvoError::empty("population"));
        }
        let cfg = &self.config;

        let mut old_pop = genomes.to_vec();
        let parent_stats = FitnessStats::from_genomes(&old_pop);
        debug!(
            size = old_pop.len(),
            best = parent_stats.best,
            average = parent_stats.average,
            worst = parent_stats.worst,
            "building generation"
        );

        let target = old_pop.len();
        let mut new_pop = Vec::with_capacity(target);
        insert_elite(
            &mut old_pop,
            &mut new_pop,
            cfg.number_of_elite,
            cfg.copies_per_elite,
        );

        while new_pop.len() < target {
            let mum = cfg.selection.select(&old_pop, rng)?;
            let dad = cfg.selection.select(&old_pop, rng)?;

            let (mut a, mut b) = crossover_between_neurons(
                &mum,
                &dad,
                layout.as_slice(),
                cfg.crossover_rate,
                rng,
            )?;

            mutate(
                &mut a.weights,
                cfg.mutation_probability,
                cfg.mutation_max_amount,
                rng,
            )?;
            mutate(
                &mut b.weights,
                cfg.mutation_probability,
                cfg.mutation_max_amount,
                rng,
            )?;

            new_pop.push(a);
            if new_pop.len() < target {
                new_pop.push(b);
            }
        }

        Ok(Generation {
            population: new_pop,
            parent_stats,
        })
    }
}

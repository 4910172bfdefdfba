//! Evolutionary loop execution.
//!
//! [`NeuroRunner`] drives the whole process for one network shape:
//! random initial networks → evaluation → next generation → repeat.

use super::builder::GenerationBuilder;
use super::config::GaConfig;
use super::stats::FitnessStats;
use super::types::Genome;
use crate::error::Result;
use crate::network::{NetworkShape, NeuralNet};
use crate::random::RngSource;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Scores candidate networks.
///
/// Implementations run the weight vector through whatever simulation or
/// dataset defines the problem. Higher fitness is better. The runner may
/// call [`evaluate`](Evaluator::evaluate) from several threads when the
/// `parallel` feature is enabled.
pub trait Evaluator: Send + Sync {
    /// Returns the fitness of one weight vector, laid out as
    /// [`NeuralNet::weights`] produces it.
    fn evaluate(&self, weights: &[f64]) -> f64;

    /// Called after each generation has been evaluated.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _stats: &FitnessStats) {}
}

/// Result of a run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// The fittest genome seen during the whole run.
    pub best: Genome,

    /// A network carrying `best`'s weights.
    pub best_net: NeuralNet,

    /// Number of generations built.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Stats of every evaluated population, the initial one first.
    pub history: Vec<FitnessStats>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_neuroevo::ga::{Evaluator, GaConfig, NeuroRunner};
/// use u_neuroevo::network::NetworkShape;
///
/// struct SumOfWeights;
///
/// impl Evaluator for SumOfWeights {
///     fn evaluate(&self, weights: &[f64]) -> f64 {
///         weights.iter().sum::<f64>().exp()
///     }
/// }
///
/// let config = GaConfig::default()
///     .with_max_generations(5)
///     .with_seed(42);
/// let shape = NetworkShape::new(2, 1);
/// let result = NeuroRunner::run(&SumOfWeights, shape, &config).unwrap();
/// assert_eq!(result.history.len(), 6);
/// ```
pub struct NeuroRunner;

impl NeuroRunner {
    /// Runs the optimization.
    ///
    /// Fails if `config` or `shape` is invalid.
    pub fn run<E: Evaluator>(
        evaluator: &E,
        shape: NetworkShape,
        config: &GaConfig,
    ) -> Result<RunResult> {
        Self::run_with_cancel(evaluator, shape, config, None)
    }

    /// Runs with an optional cancellation flag.
    ///
    /// The flag is checked before each generation is built; once set, the
    /// best genome found so far is returned.
    pub fn run_with_cancel<E: Evaluator>(
        evaluator: &E,
        shape: NetworkShape,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };

        let mut template = NeuralNet::new(shape, &mut rng)?;
        let layout = template.split_points();
        info!(
            population = config.population_size,
            generations = config.max_generations,
            weights = template.number_of_weights(),
            "starting neuro-evolution"
        );

        // 1. Random initial population
        let mut population = (0..config.population_size)
            .map(|_| NeuralNet::new(shape, &mut rng).map(|net| Genome::from_net(&net)))
            .collect::<Result<Vec<_>>>()?;

        // 2. Evaluate
        evaluate_population(evaluator, &mut population, config.parallel);
        let stats = FitnessStats::from_genomes(&population);
        let mut best = best_of(&population, &stats);
        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(stats);
        evaluator.on_generation(0, &stats);

        let builder = GenerationBuilder::new(config.clone());
        let mut generations = 0;
        let mut cancelled = false;

        // 3. Evolutionary loop
        for gen in 1..=config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population = builder.build(&population, &layout, &mut rng)?.population;
            evaluate_population(evaluator, &mut population, config.parallel);

            let stats = FitnessStats::from_genomes(&population);
            let gen_best = best_of(&population, &stats);
            if gen_best.fitness > best.fitness {
                best = gen_best;
            }
            debug!(
                generation = gen,
                best = stats.best,
                average = stats.average,
                worst = stats.worst,
                "generation evaluated"
            );

            history.push(stats);
            evaluator.on_generation(gen, &stats);
            generations = gen;
        }

        template.put_weights(&best.weights)?;
        info!(
            generations,
            cancelled,
            best = best.fitness,
            "neuro-evolution finished"
        );

        Ok(RunResult {
            best,
            best_net: template,
            generations,
            cancelled,
            history,
        })
    }
}

/// Assigns fitness to every genome.
fn evaluate_population<E: Evaluator>(evaluator: &E, population: &mut [Genome], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            population
                .par_iter_mut()
                .for_each(|g| g.fitness = evaluator.evaluate(&g.weights));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for g in population.iter_mut() {
        g.fitness = evaluator.evaluate(&g.weights);
    }
}

fn best_of(population: &[Genome], stats: &FitnessStats) -> Genome {
    stats
        .best_index
        .map(|i| population[i].clone())
        .unwrap_or_else(|| population[0].clone())
}

// ============================================================================
// Tests
// ============================================================================

//! Genetic algorithm over network weight vectors.
//!
//! Candidate networks are flattened into [`Genome`]s. Each generation is
//! built from the last by keeping the elites and filling the rest with
//! children of fitness-proportionally selected parents, recombined on
//! neuron boundaries and lightly mutated.
//!
//! # Key Types
//!
//! - [`Genome`]: weight vector plus fitness
//! - [`GaConfig`]: operator and loop parameters
//! - [`GenerationBuilder`]: turns one population into the next
//! - [`NeuroRunner`]: runs the full loop against an [`Evaluator`]
//! - [`FitnessStats`]: worst/average/best/total of a population
//!
//! # Operators
//!
//! - [`Selection`]: roulette wheel (default), tournament, rank
//! - [`crossover`] / [`crossover_between_neurons`]: recombination
//! - [`mutate`]: per-weight perturbation
//! - [`insert_elite`]: elitism
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Montana & Davis (1989), "Training Feedforward Neural Networks Using Genetic Algorithms"

mod builder;
mod config;
mod elite;
mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use builder::{Generation, GenerationBuilder};
pub use config::GaConfig;
pub use elite::insert_elite;
pub use operators::{crossover, crossover_between_neurons, mutate};
pub use runner::{Evaluator, NeuroRunner, RunResult};
pub use selection::Selection;
pub use stats::FitnessStats;
pub use types::Genome;

//! Neuro-evolution: evolving feed-forward network weights with a genetic
//! algorithm.
//!
//! - **Network structure** ([`network`]): layers of neurons, flattened to a
//!   weight vector, with the neuron boundaries crossover must respect.
//! - **Genetic algorithm** ([`ga`]): roulette-wheel selection, single-point
//!   and neuron-aware two-point crossover, per-weight mutation, elitism,
//!   and the loop that ties them together.
//! - **Randomness** ([`random`]): an explicit, seedable draw source passed
//!   to every operator.
//!
//! # Architecture
//!
//! The crate never runs a network. Fitness comes from an external
//! [`ga::Evaluator`]; the engine only consumes the resulting scores.
//! Logging goes through `tracing`, and no subscriber is installed.

pub mod error;
pub mod ga;
pub mod network;
pub mod random;

pub use error::{EvoError, Result};

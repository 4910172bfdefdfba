//! Structural model of a feed-forward network.
//!
//! The evolutionary engine only ever sees flat weight vectors. This module
//! owns the layer/neuron structure those vectors come from and derives the
//! [`NeuronLayout`] that neuron-aware crossover uses to place its cuts on
//! neuron boundaries.
//!
//! Forward evaluation is deliberately absent: the fitness harness owns how
//! a weight vector is run.
//!
//! # Weight order
//!
//! Layers are traversed front to back, neurons within a layer in order,
//! and each neuron contributes its input weights followed by its bias.

mod layout;
mod net;
mod neuron;

pub use layout::NeuronLayout;
pub use net::{NetworkShape, NeuralNet};
pub use neuron::{Neuron, NeuronLayer};

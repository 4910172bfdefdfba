//! Neurons and layers.

use crate::random::RandomSource;

/// A single neuron: one weight per input plus a trailing bias.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
}

impl Neuron {
    /// Creates a neuron with `num_inputs + 1` weights drawn from `(-1, 1)`.
    pub fn new<R: RandomSource + ?Sized>(num_inputs: usize, rng: &mut R) -> Self {
        let weights = (0..=num_inputs).map(|_| rng.signed()).collect();
        Self { weights }
    }

    /// Number of inputs, excluding the bias.
    pub fn num_inputs(&self) -> usize {
        self.weights.len() - 1
    }

    /// All weights, bias last.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// The bias weight.
    pub fn bias(&self) -> f64 {
        self.weights[self.weights.len() - 1]
    }

    pub(crate) fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }
}

/// An ordered, fixed-size group of neurons sharing the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuronLayer {
    neurons: Vec<Neuron>,
}

impl NeuronLayer {
    /// Creates `num_neurons` neurons, each taking `inputs_per_neuron` inputs.
    pub fn new<R: RandomSource + ?Sized>(
        num_neurons: usize,
        inputs_per_neuron: usize,
        rng: &mut R,
    ) -> Self {
        let neurons = (0..num_neurons)
            .map(|_| Neuron::new(inputs_per_neuron, rng))
            .collect();
        Self { neurons }
    }

    /// Neurons in traversal order.
    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Number of neurons.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Whether the layer has no neurons.
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Total number of weights across all neurons, biases included.
    pub fn number_of_weights(&self) -> usize {
        self.neurons.iter().map(|n| n.weights.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    #[test]
    fn test_neuron_has_bias_slot() {
        let mut rng = RngSource::seeded(42);
        let n = Neuron::new(4, &mut rng);
        assert_eq!(n.weights().len(), 5);
        assert_eq!(n.num_inputs(), 4);
        assert_eq!(n.bias(), n.weights()[4]);
    }

    #[test]
    fn test_neuron_weights_in_signed_range() {
        let mut rng = RngSource::seeded(7);
        let n = Neuron::new(200, &mut rng);
        assert!(n.weights().iter().all(|w| *w > -1.0 && *w < 1.0));
    }

    #[test]
    fn test_zero_input_neuron_is_bias_only() {
        let mut rng = RngSource::seeded(1);
        let n = Neuron::new(0, &mut rng);
        assert_eq!(n.weights().len(), 1);
        assert_eq!(n.num_inputs(), 0);
    }

    #[test]
    fn test_layer_weight_count() {
        let mut rng = RngSource::seeded(3);
        let layer = NeuronLayer::new(6, 3, &mut rng);
        assert_eq!(layer.len(), 6);
        assert!(!layer.is_empty());
        assert_eq!(layer.number_of_weights(), 6 * 4);
    }
}

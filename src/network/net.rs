//! Layered network structure: weight export/import and split points.

use super::layout::NeuronLayout;
use super::neuron::NeuronLayer;
use crate::error::{EvoError, Result};
use crate::random::RandomSource;

/// Dimensions of a fully connected feed-forward network.
///
/// # Examples
///
/// ```
/// use u_neuroevo::network::NetworkShape;
///
/// let shape = NetworkShape::new(4, 2).with_hidden_layers(1, 6);
/// // hidden: 6 neurons * (4 + 1), output: 2 neurons * (6 + 1)
/// assert_eq!(shape.number_of_weights(), 30 + 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkShape {
    /// Number of network inputs.
    pub inputs: usize,
    /// Number of network outputs.
    pub outputs: usize,
    /// Number of hidden layers. Zero wires the inputs straight to the output layer.
    pub hidden_layers: usize,
    /// Neurons in each hidden layer.
    pub neurons_per_hidden: usize,
}

impl NetworkShape {
    /// A network with no hidden layers.
    pub fn new(inputs: usize, outputs: usize) -> Self {
        Self {
            inputs,
            outputs,
            hidden_layers: 0,
            neurons_per_hidden: 0,
        }
    }

    /// Sets the hidden layer count and width.
    pub fn with_hidden_layers(mut self, layers: usize, neurons_per_layer: usize) -> Self {
        self.hidden_layers = layers;
        self.neurons_per_hidden = neurons_per_layer;
        self
    }

    /// Validates the shape.
    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 {
            return Err(EvoError::invalid("network must have at least one input"));
        }
        if self.outputs == 0 {
            return Err(EvoError::invalid("network must have at least one output"));
        }
        if self.hidden_layers > 0 && self.neurons_per_hidden == 0 {
            return Err(EvoError::invalid("hidden layers must have at least one neuron"));
        }
        Ok(())
    }

    /// `(neurons, inputs_per_neuron)` for every layer in traversal order.
    fn layer_dims(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let hidden = (0..self.hidden_layers).map(move |i| {
            let fan_in = if i == 0 {
                self.inputs
            } else {
                self.neurons_per_hidden
            };
            (self.neurons_per_hidden, fan_in)
        });
        let last_fan_in = if self.hidden_layers == 0 {
            self.inputs
        } else {
            self.neurons_per_hidden
        };
        hidden.chain(std::iter::once((self.outputs, last_fan_in)))
    }

    /// Total weights (biases included) a network of this shape carries.
    pub fn number_of_weights(&self) -> usize {
        self.layer_dims()
            .map(|(neurons, fan_in)| neurons * (fan_in + 1))
            .sum()
    }
}

/// The structure owner for one candidate network.
///
/// Exposes the flat weight vector a [`Genome`](crate::ga::Genome) carries
/// and the matching [`NeuronLayout`] for neuron-aware crossover.
#[derive(Debug, Clone, PartialEq)]
pub struct NeuralNet {
    shape: NetworkShape,
    layers: Vec<NeuronLayer>,
}

impl NeuralNet {
    /// Builds a network with weights drawn from `(-1, 1)`.
    pub fn new<R: RandomSource + ?Sized>(shape: NetworkShape, rng: &mut R) -> Result<Self> {
        shape.validate()?;
        let layers = shape
            .layer_dims()
            .map(|(neurons, fan_in)| NeuronLayer::new(neurons, fan_in, rng))
            .collect();
        Ok(Self { shape, layers })
    }

    /// The shape this network was built from.
    pub fn shape(&self) -> &NetworkShape {
        &self.shape
    }

    /// Layers in traversal order, output layer last.
    pub fn layers(&self) -> &[NeuronLayer] {
        &self.layers
    }

    /// Total number of weights.
    pub fn number_of_weights(&self) -> usize {
        self.layers.iter().map(NeuronLayer::number_of_weights).sum()
    }

    /// Flattens all weights in traversal order.
    pub fn weights(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.number_of_weights());
        for layer in &self.layers {
            for neuron in layer.neurons() {
                out.extend_from_slice(neuron.weights());
            }
        }
        out
    }

    /// Replaces all weights from a flat vector in traversal order.
    ///
    /// Fails with [`EvoError::InvalidArgument`] if `weights` does not have
    /// exactly [`number_of_weights`](Self::number_of_weights) entries; the
    /// network is left untouched in that case.
    pub fn put_weights(&mut self, weights: &[f64]) -> Result<()> {
        let expected = self.number_of_weights();
        if weights.len() != expected {
            return Err(EvoError::invalid(format!(
                "expected {expected} weights, got {}",
                weights.len()
            )));
        }
        let mut rest = weights;
        for layer in &mut self.layers {
            for neuron in layer.neurons_mut() {
                let slot = neuron.weights_mut();
                let (head, tail) = rest.split_at(slot.len());
                slot.copy_from_slice(head);
                rest = tail;
            }
        }
        Ok(())
    }

    /// Neuron boundaries for neuron-aware crossover.
    ///
    /// Offset `0` (the start of the vector) comes first, followed by the
    /// bias index of every neuron. The leading boundary lets crossover pick
    /// a window that swaps the first neuron whole, and guarantees at least
    /// two offsets even for a single-neuron network.
    pub fn split_points(&self) -> NeuronLayout {
        let mut end = 0usize;
        let biases = self
            .layers
            .iter()
            .flat_map(NeuronLayer::neurons)
            .map(|n| {
                end += n.weights().len();
                end - 1
            });
        // shape validation guarantees fan-in >= 1, so the first bias is never 0
        let offsets = std::iter::once(0).chain(biases).collect();
        NeuronLayout::from_bias_offsets(offsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngSource;

    fn shape() -> NetworkShape {
        NetworkShape::new(3, 2).with_hidden_layers(1, 4)
    }

    #[test]
    fn test_weight_count_matches_shape() {
        let mut rng = RngSource::seeded(42);
        let net = NeuralNet::new(shape(), &mut rng).unwrap();
        assert_eq!(net.number_of_weights(), 4 * 4 + 2 * 5);
        assert_eq!(net.number_of_weights(), shape().number_of_weights());
        assert_eq!(net.weights().len(), net.number_of_weights());
        assert_eq!(net.layers().len(), 2);
    }

    #[test]
    fn test_no_hidden_layers() {
        let mut rng = RngSource::seeded(42);
        let net = NeuralNet::new(NetworkShape::new(5, 1), &mut rng).unwrap();
        assert_eq!(net.layers().len(), 1);
        assert_eq!(net.number_of_weights(), 6);
    }

    #[test]
    fn test_multiple_hidden_layers_fan_in() {
        let mut rng = RngSource::seeded(42);
        let net =
            NeuralNet::new(NetworkShape::new(2, 1).with_hidden_layers(2, 3), &mut rng).unwrap();
        let fan_ins: Vec<usize> = net
            .layers()
            .iter()
            .map(|l| l.neurons()[0].num_inputs())
            .collect();
        assert_eq!(fan_ins, vec![2, 3, 3]);
    }

    #[test]
    fn test_put_weights_roundtrip() {
        let mut rng = RngSource::seeded(1);
        let mut net = NeuralNet::new(shape(), &mut rng).unwrap();
        let fresh: Vec<f64> = (0..net.number_of_weights()).map(|i| i as f64).collect();
        net.put_weights(&fresh).unwrap();
        assert_eq!(net.weights(), fresh);
        // bias of the first hidden neuron sits at index 3
        assert_eq!(net.layers()[0].neurons()[0].bias(), 3.0);
    }

    #[test]
    fn test_put_weights_wrong_length() {
        let mut rng = RngSource::seeded(1);
        let mut net = NeuralNet::new(shape(), &mut rng).unwrap();
        let before = net.weights();
        let err = net.put_weights(&[0.0; 3]).unwrap_err();
        assert!(matches!(err, EvoError::InvalidArgument(_)));
        assert_eq!(net.weights(), before);
    }

    #[test]
    fn test_split_points_follow_neurons() {
        let mut rng = RngSource::seeded(1);
        let net = NeuralNet::new(shape(), &mut rng).unwrap();
        // start of vector, then four hidden neurons of 4 weights, two output neurons of 5
        assert_eq!(net.split_points().as_slice(), &[0, 3, 7, 11, 15, 20, 25]);
        assert_eq!(
            *net.split_points().as_slice().last().unwrap() + 1,
            net.number_of_weights()
        );
    }

    #[test]
    fn test_single_neuron_has_two_split_points() {
        let mut rng = RngSource::seeded(1);
        let net = NeuralNet::new(NetworkShape::new(2, 1), &mut rng).unwrap();
        assert_eq!(net.split_points().as_slice(), &[0, 2]);

        let net = NeuralNet::new(NetworkShape::new(1, 1), &mut rng).unwrap();
        assert_eq!(net.split_points().as_slice(), &[0, 1]);
    }

    #[test]
    fn test_invalid_shapes() {
        let mut rng = RngSource::seeded(1);
        assert!(NeuralNet::new(NetworkShape::new(0, 1), &mut rng).is_err());
        assert!(NeuralNet::new(NetworkShape::new(1, 0), &mut rng).is_err());
        assert!(
            NeuralNet::new(NetworkShape::new(1, 1).with_hidden_layers(1, 0), &mut rng).is_err()
        );
    }
}

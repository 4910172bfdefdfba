//! Neuron boundary offsets in a flat weight vector.

use crate::error::{EvoError, Result};

/// Strictly increasing offsets marking where neuron-aware crossover may cut.
///
/// Each offset produced by [`NeuronLayout::from_neuron_sizes`] is the index
/// of the last weight (the bias) of one neuron. Crossover swaps the
/// inclusive window between two chosen offsets, so the window opens on
/// the bias of the first chosen neuron and then covers every following
/// neuron whole, up to and including the second chosen one. Only the
/// opening neuron is split, and only at its bias. A leading `0` offset,
/// as [`NeuralNet::split_points`](crate::network::NeuralNet::split_points)
/// adds, opens a window that takes the first neuron whole.
///
/// The layout is opaque boundary data to the engine: it is never mutated,
/// and it must describe the same topology as every genome it is used with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeuronLayout {
    offsets: Vec<usize>,
}

impl NeuronLayout {
    /// Wraps explicit offsets.
    ///
    /// Fails with [`EvoError::InvalidArgument`] unless the offsets are
    /// strictly increasing. Fewer than two offsets is allowed here but
    /// rejected by neuron-aware crossover.
    pub fn new(offsets: Vec<usize>) -> Result<Self> {
        if let Some(w) = offsets.windows(2).find(|w| w[0] >= w[1]) {
            return Err(EvoError::invalid(format!(
                "split points must be strictly increasing, found {} then {}",
                w[0], w[1]
            )));
        }
        Ok(Self { offsets })
    }

    /// Derives offsets from per-neuron weight counts (inputs + bias).
    ///
    /// ```
    /// use u_neuroevo::network::NeuronLayout;
    ///
    /// let layout = NeuronLayout::from_neuron_sizes([3, 3, 4]).unwrap();
    /// assert_eq!(layout.as_slice(), &[2, 5, 9]);
    /// ```
    pub fn from_neuron_sizes<I: IntoIterator<Item = usize>>(sizes: I) -> Result<Self> {
        let mut total = 0usize;
        let mut offsets = Vec::new();
        for size in sizes {
            if size == 0 {
                return Err(EvoError::invalid("a neuron must own at least its bias weight"));
            }
            total += size;
            offsets.push(total - 1);
        }
        Ok(Self { offsets })
    }

    /// Offsets already known to be strictly increasing.
    pub(crate) fn from_bias_offsets(offsets: Vec<usize>) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        Self { offsets }
    }

    /// The offsets.
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether there are no offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_increasing() {
        assert!(NeuronLayout::new(vec![0, 3, 3]).is_err());
        assert!(NeuronLayout::new(vec![5, 2]).is_err());
    }

    #[test]
    fn test_accepts_short_lists() {
        assert!(NeuronLayout::new(vec![]).unwrap().is_empty());
        assert_eq!(NeuronLayout::new(vec![4]).unwrap().len(), 1);
    }

    #[test]
    fn test_from_sizes_marks_bias_positions() {
        let layout = NeuronLayout::from_neuron_sizes([2, 2, 3]).unwrap();
        assert_eq!(layout.as_slice(), &[1, 3, 6]);
    }

    #[test]
    fn test_from_sizes_rejects_empty_neuron() {
        let err = NeuronLayout::from_neuron_sizes([2, 0]).unwrap_err();
        assert!(matches!(err, EvoError::InvalidArgument(_)));
    }
}

//! Crossover and mutation operators for flat weight vectors.
//!
//! # Crossover Operators
//!
//! - [`crossover`]: single-point, cut anywhere in the vector
//! - [`crossover_between_neurons`]: two-point, both cuts on neuron bias
//!   positions, so every neuron after the first cut moves as a unit
//!
//! Both return two children and skip recombination entirely (children are
//! copies of their parents) when the crossover-rate draw fails or the
//! parents carry identical weights. Children come back unevaluated, with
//! zero fitness.
//!
//! # Mutation Operators
//!
//! - [`mutate`]: per-gene additive perturbation, unclamped, O(n)

use super::types::Genome;
use crate::error::{EvoError, Result};
use crate::random::RandomSource;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws `uniform()` first; if it exceeds `rate`, or the parents are equal,
/// returns copies of `mum` and `dad`. Otherwise draws a cut in
/// `[0, len - 1]`: child A takes `mum` before the cut and `dad` from the
/// cut onwards, child B the complement.
///
/// Fails with [`EvoError::SizeMismatch`] if the parents differ in length.
///
/// # Complexity
/// O(n) time, O(n) space
pub fn crossover<R: RandomSource + ?Sized>(
    mum: &Genome,
    dad: &Genome,
    rate: f64,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    let len = mum.common_len(dad)?;

    if rng.uniform() > rate || mum.weights == dad.weights {
        return Ok(copy_parents(mum, dad));
    }

    let cut = rng.int_in_range(0, len - 1);

    let mut a = Vec::with_capacity(len);
    let mut b = Vec::with_capacity(len);
    a.extend_from_slice(&mum.weights[..cut]);
    a.extend_from_slice(&dad.weights[cut..]);
    b.extend_from_slice(&dad.weights[..cut]);
    b.extend_from_slice(&mum.weights[cut..]);

    Ok((Genome::new(a, 0.0), Genome::new(b, 0.0)))
}

/// Two-point crossover with both cuts on neuron boundaries.
///
/// After the same rate/equality short-circuit as [`crossover`], draws
/// `i1` in `[0, len(split_points) - 2]` and then `i2` in
/// `[i1 + 1, len(split_points) - 1]`. With `cut1 = split_points[i1]` and
/// `cut2 = split_points[i2]`, every position in the inclusive window
/// `[cut1, cut2]` is swapped between the parents; positions outside it
/// are inherited unchanged. With bias-position offsets (see
/// [`NeuronLayout`](crate::network::NeuronLayout)) the window starts at the
/// bias of neuron `i1` and swaps the later neurons whole.
///
/// Crossing the two children back over with the same draws restores the
/// parents, since the swap is its own inverse.
///
/// # Errors
/// - [`EvoError::SizeMismatch`] if the parents differ in length
/// - [`EvoError::InvalidArgument`] if `split_points` has fewer than two entries
///
/// # Examples
///
/// ```
/// use u_neuroevo::ga::{crossover_between_neurons, Genome};
/// use u_neuroevo::random::RngSource;
///
/// let mum = Genome::new(vec![0.0; 6], 1.0);
/// let dad = Genome::new(vec![1.0; 6], 2.0);
/// let mut rng = RngSource::seeded(42);
/// let (a, b) = crossover_between_neurons(&mum, &dad, &[0, 6], 1.0, &mut rng).unwrap();
/// assert_eq!(a.weights, dad.weights);
/// assert_eq!(b.weights, mum.weights);
/// ```
pub fn crossover_between_neurons<R: RandomSource + ?Sized>(
    mum: &Genome,
    dad: &Genome,
    split_points: &[usize],
    rate: f64,
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    let len = mum.common_len(dad)?;
    if split_points.len() < 2 {
        return Err(EvoError::invalid(format!(
            "neuron crossover needs at least 2 split points, got {}",
            split_points.len()
        )));
    }

    if rng.uniform() > rate || mum.weights == dad.weights {
        return Ok(copy_parents(mum, dad));
    }

    let last = split_points.len() - 1;
    let i1 = rng.int_in_range(0, last - 1);
    let i2 = rng.int_in_range(i1 + 1, last);
    let (cut1, cut2) = (split_points[i1], split_points[i2]);

    let mut a = Vec::with_capacity(len);
    let mut b = Vec::with_capacity(len);
    for (p, (&m, &d)) in mum.weights.iter().zip(&dad.weights).enumerate() {
        if p < cut1 || p > cut2 {
            a.push(m);
            b.push(d);
        } else {
            a.push(d);
            b.push(m);
        }
    }

    Ok((Genome::new(a, 0.0), Genome::new(b, 0.0)))
}

fn copy_parents(mum: &Genome, dad: &Genome) -> (Genome, Genome) {
    (
        Genome::new(mum.weights.clone(), 0.0),
        Genome::new(dad.weights.clone(), 0.0),
    )
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Perturbs each weight independently, in place.
///
/// A weight mutates when `uniform() < probability`, gaining
/// `signed() * max_amount`. Results are not clamped. Returns how many
/// weights changed.
///
/// Fails with [`EvoError::EmptyInput`] if `weights` is empty.
///
/// # Complexity
/// O(n)
pub fn mutate<R: RandomSource + ?Sized>(
    weights: &mut [f64],
    probability: f64,
    max_amount: f64,
    rng: &mut R,
) -> Result<usize> {
    if weights.is_empty() {
        return Err(EvoError::empty("weight vector"));
    }

    let mut mutated = 0;
    for w in weights.iter_mut() {
        if rng.uniform() < probability {
            *w += rng.signed() * max_amount;
            mutated += 1;
        }
    }
    Ok(mutated)
}

// ============================================================================
// Tests
// ============================================================================

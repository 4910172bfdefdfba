//! Parent selection strategies.
//!
//! Selection draws one parent from a population, with replacement: the
//! same genome may be picked for both parents and on every call.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::types::Genome;
use crate::error::{EvoError, Result};
use crate::random::RandomSource;
use std::cmp::Ordering;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_neuroevo::ga::{Genome, Selection};
/// use u_neuroevo::random::RngSource;
///
/// let pop = vec![Genome::new(vec![0.0], 1.0), Genome::new(vec![1.0], 9.0)];
/// let mut rng = RngSource::seeded(42);
/// let parent = Selection::Roulette.select(&pop, &mut rng).unwrap();
/// assert_eq!(parent.weights.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Genome `i` owns a slice of the wheel of width `max(fitness_i, 0)`.
    /// When no genome has positive fitness the wheel is empty and the pick
    /// falls back to uniform. A genome with `+inf` fitness always wins.
    ///
    /// # Complexity
    /// O(n) per selection
    #[default]
    Roulette,

    /// Tournament selection: pick `k` genomes at random, keep the fittest.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Linear rank selection: the worst genome has weight 1, the best `n`.
    ///
    /// Insensitive to fitness scale and sign.
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Selection {
    /// Selects a parent and returns a copy of it.
    ///
    /// Fails with [`EvoError::EmptyInput`] if `population` is empty.
    pub fn select<R: RandomSource + ?Sized>(
        &self,
        population: &[Genome],
        rng: &mut R,
    ) -> Result<Genome> {
        let idx = self.select_index(population, rng)?;
        Ok(population[idx].clone())
    }

    /// Selects a parent and returns its index.
    pub fn select_index<R: RandomSource + ?Sized>(
        &self,
        population: &[Genome],
        rng: &mut R,
    ) -> Result<usize> {
        if population.is_empty() {
            return Err(EvoError::empty("population"));
        }

        Ok(match self {
            Selection::Roulette => roulette(population, rng),
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Rank => rank(population, rng),
        })
    }
}

/// Roulette wheel over non-negative fitness.
///
/// - total `<= 0`: uniform pick
/// - some genome at `+inf`: the first such genome, without drawing
/// - finite slices whose sum overflows: slices rescaled by the largest one
fn roulette<R: RandomSource + ?Sized>(population: &[Genome], rng: &mut R) -> usize {
    // f64::max drops NaN, so a NaN fitness gets an empty slice
    let slice = |g: &Genome| g.fitness.max(0.0);
    let total: f64 = population.iter().map(slice).sum();

    if !(total > 0.0) {
        tracing::trace!(total, "degenerate roulette wheel, selecting uniformly");
        return rng.int_in_range(0, population.len() - 1);
    }

    if total.is_infinite() {
        if let Some(i) = population.iter().position(|g| g.fitness == f64::INFINITY) {
            return i;
        }
        let largest = population.iter().map(slice).fold(0.0, f64::max);
        let scaled = |g: &Genome| slice(g) / largest;
        let total: f64 = population.iter().map(scaled).sum();
        return spin(population, scaled, total, rng);
    }

    spin(population, slice, total, rng)
}

/// Returns the first genome whose running sum strictly exceeds
/// `uniform() * total`, or index 0 if rounding leaves nothing above it.
fn spin<R, F>(population: &[Genome], slice: F, total: f64, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
    F: Fn(&Genome) -> f64,
{
    let portion = rng.uniform() * total;
    let mut cumulative = 0.0;
    for (i, g) in population.iter().enumerate() {
        cumulative += slice(g);
        if cumulative > portion {
            return i;
        }
    }

    0 // floating-point fallback
}

fn tournament<R: RandomSource + ?Sized>(population: &[Genome], k: usize, rng: &mut R) -> usize {
    let last = population.len() - 1;

    let mut best_idx = rng.int_in_range(0, last);
    for _ in 1..k.max(1) {
        let idx = rng.int_in_range(0, last);
        if population[idx].cmp_fitness(&population[best_idx]) == Ordering::Greater {
            best_idx = idx;
        }
    }
    best_idx
}

fn rank<R: RandomSource + ?Sized>(population: &[Genome], rng: &mut R) -> usize {
    let n = population.len();

    // worst first, so rank r carries weight r + 1
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| population[a].cmp_fitness(&population[b]));

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.uniform() * total;
    let mut cumulative = 0.0;
    for (r, &idx) in order.iter().enumerate() {
        cumulative += (r + 1) as f64;
        if cumulative > threshold {
            return idx;
        }
    }

    order[n - 1]
}

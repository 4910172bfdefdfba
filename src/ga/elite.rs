//! Elitism: carrying the best genomes over unchanged.

use super::types::Genome;
use tracing::trace;

/// Appends copies of the fittest genomes of `old` to `new`.
///
/// **Reorders `old`**: it is sorted ascending by fitness in place, so the
/// caller's original ordering is lost. Copy beforehand if it matters.
///
/// For each of the `number_of_elite` best genomes (best first), appends
/// `copies_per_elite` copies, stopping as soon as `new` reaches
/// `old.len()`. Existing entries of `new` are never touched.
///
/// Returns how many genomes were appended.
///
/// # Examples
///
/// ```
/// use u_neuroevo::ga::{insert_elite, Genome};
///
/// let mut old: Vec<Genome> = [3.0, 9.0, 1.0]
///     .iter()
///     .map(|&f| Genome::new(vec![f], f))
///     .collect();
/// let mut new = Vec::new();
/// insert_elite(&mut old, &mut new, 2, 1);
/// assert_eq!(new[0].fitness, 9.0);
/// assert_eq!(new[1].fitness, 3.0);
/// ```
pub fn insert_elite(
    old: &mut [Genome],
    new: &mut Vec<Genome>,
    number_of_elite: usize,
    copies_per_elite: usize,
) -> usize {
    old.sort_by(Genome::cmp_fitness);

    let target = old.len();
    let before = new.len();
    'elites: for elite in old.iter().rev().take(number_of_elite) {
        for _ in 0..copies_per_elite {
            if new.len() >= target {
                break 'elites;
            }
            new.push(elite.clone());
        }
    }

    let inserted = new.len().saturating_sub(before);
    trace!(inserted, number_of_elite, copies_per_elite, "inserted elites");
    inserted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_population(fitnesses: &[f64]) -> Vec<Genome> {
        fitnesses
            .iter()
            .map(|&f| Genome::new(vec![f, -f], f))
            .collect()
    }

    fn fitnesses(pop: &[Genome]) -> Vec<f64> {
        pop.iter().map(|g| g.fitness).collect()
    }

    #[test]
    fn test_two_best_in_order() {
        let mut old = make_population(&[4.0, 1.0, 5.0, 2.0, 3.0]);
        let mut new = Vec::new();
        assert_eq!(insert_elite(&mut old, &mut new, 2, 1), 2);
        assert_eq!(fitnesses(&new), vec![5.0, 4.0]);
    }

    #[test]
    fn test_old_population_is_sorted_ascending() {
        let mut old = make_population(&[4.0, 1.0, 5.0, 2.0, 3.0]);
        insert_elite(&mut old, &mut Vec::new(), 1, 1);
        assert_eq!(fitnesses(&old), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_copies_are_grouped_per_elite() {
        let mut old = make_population(&[1.0, 3.0, 2.0, 0.0, 0.5, 0.2]);
        let mut new = Vec::new();
        insert_elite(&mut old, &mut new, 2, 2);
        assert_eq!(fitnesses(&new), vec![3.0, 3.0, 2.0, 2.0]);
        assert_eq!(new[0].weights, vec![3.0, -3.0]);
    }

    #[test]
    fn test_stops_at_target_size() {
        let mut old = make_population(&[1.0, 2.0, 3.0]);
        let mut new = make_population(&[7.0]);
        let inserted = insert_elite(&mut old, &mut new, 3, 4);
        assert_eq!(inserted, 2);
        assert_eq!(fitnesses(&new), vec![7.0, 3.0, 3.0]);
    }

    #[test]
    fn test_more_elites_than_population() {
        let mut old = make_population(&[1.0, 2.0]);
        let mut new = Vec::new();
        insert_elite(&mut old, &mut new, 10, 1);
        assert_eq!(fitnesses(&new), vec![2.0, 1.0]);
    }

    #[test]
    fn test_zero_counts_append_nothing() {
        let mut old = make_population(&[1.0, 2.0]);
        let mut new = Vec::new();
        assert_eq!(insert_elite(&mut old, &mut new, 0, 3), 0);
        assert_eq!(insert_elite(&mut old, &mut new, 2, 0), 0);
        assert!(new.is_empty());
    }

    #[test]
    fn test_nan_fitness_never_becomes_elite() {
        let computed_nan = std::hint::black_box(0.0f64) / std::hint::black_box(0.0f64);
        for nan in [f64::NAN, -f64::NAN, computed_nan] {
            let mut old = make_population(&[1.0, nan, 5.0]);
            let mut new = Vec::new();
            insert_elite(&mut old, &mut new, 1, 1);
            assert_eq!(new[0].fitness, 5.0, "NaN {nan:?} outranked a real score");
            assert!(old[0].fitness.is_nan());
        }
    }

    #[test]
    fn test_empty_old_population() {
        let mut new = Vec::new();
        assert_eq!(insert_elite(&mut [], &mut new, 2, 1), 0);
    }
}

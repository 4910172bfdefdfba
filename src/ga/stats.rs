//! Population fitness aggregates.

use super::types::Genome;

/// Worst, best, total and average fitness of one population.
///
/// For an empty input `average` and `total` are `0.0`, `worst` stays at
/// `f64::INFINITY`, `best` at `f64::NEG_INFINITY` and `best_index` is
/// `None`. These sentinels are diagnostic only; nothing in the engine
/// branches on them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessStats {
    /// Minimum fitness.
    pub worst: f64,
    /// Maximum fitness.
    pub best: f64,
    /// Sum of all fitness values.
    pub total: f64,
    /// `total / count`.
    pub average: f64,
    /// Position of the first genome holding `best`.
    pub best_index: Option<usize>,
}

impl FitnessStats {
    /// Aggregates over a population.
    pub fn from_genomes(genomes: &[Genome]) -> Self {
        Self::from_values(genomes.iter().map(|g| g.fitness))
    }

    /// Aggregates over raw fitness values.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut stats = FitnessStats {
            worst: f64::INFINITY,
            best: f64::NEG_INFINITY,
            total: 0.0,
            average: 0.0,
            best_index: None,
        };
        let mut count = 0usize;
        for (i, f) in values.into_iter().enumerate() {
            stats.total += f;
            if f < stats.worst {
                stats.worst = f;
            }
            if f > stats.best {
                stats.best = f;
                stats.best_index = Some(i);
            }
            count += 1;
        }
        if count > 0 {
            stats.average = stats.total / count as f64;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_aggregates() {
        let s = FitnessStats::from_values([3.0, -1.0, 4.0, 2.0]);
        assert_eq!(s.worst, -1.0);
        assert_eq!(s.best, 4.0);
        assert_eq!(s.total, 8.0);
        assert_eq!(s.average, 2.0);
        assert_eq!(s.best_index, Some(2));
    }

    #[test]
    fn test_empty_uses_sentinels() {
        let s = FitnessStats::from_genomes(&[]);
        assert_eq!(s.average, 0.0);
        assert_eq!(s.total, 0.0);
        assert_eq!(s.worst, f64::INFINITY);
        assert_eq!(s.best, f64::NEG_INFINITY);
        assert_eq!(s.best_index, None);
    }

    #[test]
    fn test_from_genomes_matches_values() {
        let pop = vec![Genome::new(vec![], 1.5), Genome::new(vec![], 0.5)];
        assert_eq!(
            FitnessStats::from_genomes(&pop),
            FitnessStats::from_values([1.5, 0.5])
        );
    }

    #[test]
    fn test_first_best_wins_ties() {
        let s = FitnessStats::from_values([1.0, 7.0, 7.0]);
        assert_eq!(s.best_index, Some(1));
    }

    proptest! {
        #[test]
        fn prop_worst_le_average_le_best(values in prop::collection::vec(-1e6f64..1e6, 1..64)) {
            let s = FitnessStats::from_values(values.iter().copied());
            let tol = 1e-6;
            prop_assert!(s.worst <= s.average + tol);
            prop_assert!(s.average <= s.best + tol);
            let sum: f64 = values.iter().sum();
            prop_assert!((s.total - sum).abs() <= tol * sum.abs().max(1.0));
        }
    }
}

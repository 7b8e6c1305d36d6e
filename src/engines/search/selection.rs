use rand::Rng;

use crate::error::{Result, RltuneError};

use super::chromosome::Chromosome;
use super::population::Population;

/// Normalize a fitness vector into the cumulative distribution roulette
/// selection samples from.
///
/// The result is non-decreasing and its last entry is 1.0. A non-positive or
/// non-finite fitness total cannot be sampled from and signals a broken
/// evaluator or gene space, so it is reported as `DegenerateFitness` instead
/// of dividing by zero.
pub fn build_cumulative(fitness: &[f64]) -> Result<Vec<f64>> {
    let total: f64 = fitness.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(RltuneError::DegenerateFitness(format!(
            "total population fitness is {}; selection needs a positive total",
            total
        )));
    }

    let mut cumulative = Vec::with_capacity(fitness.len());
    let mut running = 0.0;
    for f in fitness {
        running += f;
        cumulative.push(running / total);
    }
    Ok(cumulative)
}

/// Fitness-proportional roulette selection over a cumulative distribution.
///
/// Draws `r` in `[0, 1)` and returns the first individual whose cumulative
/// entry exceeds `r`. Binary search keeps the many draws per generation cheap
/// for large populations. `cumulative` must be index-aligned with
/// `population`.
pub fn roulette_select<'a, R: Rng>(
    population: &'a Population,
    cumulative: &[f64],
    rng: &mut R,
) -> &'a Chromosome {
    let r = rng.gen::<f64>();
    let index = cumulative.partition_point(|&c| c <= r);
    // The last cumulative entry can round to just under 1.0.
    let index = index.min(population.len() - 1);
    &population.individuals()[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::GeneDomainTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn two_point_population() -> Population {
        let mut domains = HashMap::new();
        domains.insert("x".to_string(), vec![0.0, 1.0]);
        let table = GeneDomainTable::new(domains);
        let gene_names = vec!["x".to_string()];
        let mut rng = StdRng::seed_from_u64(1);
        Population::random(&table, &gene_names, 4, &mut rng).unwrap()
    }

    #[test]
    fn test_cumulative_is_monotonic_and_normalized() {
        let cumulative = build_cumulative(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(cumulative.len(), 4);
        for pair in cumulative.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!((cumulative[3] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        assert!(matches!(
            build_cumulative(&[0.0, 0.0, 0.0]),
            Err(RltuneError::DegenerateFitness(_))
        ));
    }

    #[test]
    fn test_negative_total_is_degenerate() {
        assert!(matches!(
            build_cumulative(&[1.0, -3.0]),
            Err(RltuneError::DegenerateFitness(_))
        ));
    }

    #[test]
    fn test_nan_total_is_degenerate() {
        assert!(matches!(
            build_cumulative(&[1.0, f64::NAN]),
            Err(RltuneError::DegenerateFitness(_))
        ));
    }

    #[test]
    fn test_selection_returns_population_member() {
        let population = two_point_population();
        let cumulative = build_cumulative(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        for _ in 0..200 {
            let selected = roulette_select(&population, &cumulative, &mut rng);
            assert!(population.individuals().iter().any(|c| c == selected));
        }
    }

    #[test]
    fn test_selection_is_fitness_proportional() {
        let population = two_point_population();
        // Index 3 holds three quarters of the total fitness.
        let cumulative = build_cumulative(&[1.0, 1.0, 1.0, 9.0]).unwrap();
        let mut rng = StdRng::seed_from_u64(17);

        let mut hits = 0;
        let draws = 10_000;
        for _ in 0..draws {
            let selected = roulette_select(&population, &cumulative, &mut rng);
            if std::ptr::eq(selected, &population.individuals()[3]) {
                hits += 1;
            }
        }
        let share = f64::from(hits) / f64::from(draws);
        assert!(share > 0.65 && share < 0.85, "share was {}", share);
    }
}

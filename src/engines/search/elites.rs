use super::chromosome::Chromosome;
use super::population::Population;

/// The top performers of one generation, in rank order.
#[derive(Debug, Clone)]
pub struct EliteSelection {
    pub chromosomes: Vec<Chromosome>,
    pub fitness: Vec<f64>,
}

/// Pick the `nof_elites` highest-fitness individuals of the generation.
///
/// Repeatedly takes the arg-max of a scratch copy of the fitness vector and
/// masks the winning index below the population minimum so the next arg-max
/// lands on a distinct individual. Ties resolve to the earliest population
/// index. Requires `0 < nof_elites <= population.len()` and an index-aligned
/// fitness vector.
pub fn select_elites(
    population: &Population,
    fitness: &[f64],
    nof_elites: usize,
) -> EliteSelection {
    debug_assert!(nof_elites > 0 && nof_elites <= population.len());
    debug_assert_eq!(fitness.len(), population.len());

    let mut scratch = fitness.to_vec();
    let floor = scratch.iter().copied().fold(f64::INFINITY, f64::min) - 1.0;

    let mut chromosomes = Vec::with_capacity(nof_elites);
    let mut elite_fitness = Vec::with_capacity(nof_elites);
    for _ in 0..nof_elites {
        let best = argmax(&scratch);
        chromosomes.push(population.individuals()[best].clone());
        elite_fitness.push(fitness[best]);
        scratch[best] = floor;
    }

    EliteSelection {
        chromosomes,
        fitness: elite_fitness,
    }
}

/// Index of the maximum entry; the first one on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

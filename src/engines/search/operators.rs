use rand::Rng;

use crate::error::Result;
use crate::genes::GeneDomainTable;

use super::chromosome::{random_gene, Chromosome};
use super::population::Population;
use super::selection::roulette_select;

/// Single-point crossover over the canonical gene ordering.
///
/// The cut point is uniform over the interior positions: genes before the cut
/// come from `parent2`, genes at and after it from `parent1`, so both parents
/// always contribute. With fewer than two genes there is no interior cut and
/// the child is a plain copy of `parent1`.
pub fn crossover<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    gene_names: &[String],
    rng: &mut R,
) -> Chromosome {
    let mut child = parent1.clone();
    if gene_names.len() <= 1 {
        return child;
    }

    let cut = rng.gen_range(1..gene_names.len());
    for gene in &gene_names[..cut] {
        child.insert(gene.clone(), parent2[gene.as_str()]);
    }
    child
}

/// Per-gene mutation pass: every gene is independently resampled from its
/// domain with probability `mutation_prob`.
pub fn mutate<R: Rng>(
    chromosome: &mut Chromosome,
    gene_names: &[String],
    table: &GeneDomainTable,
    mutation_prob: f64,
    rng: &mut R,
) -> Result<()> {
    for gene in gene_names {
        if rng.gen::<f64>() < mutation_prob {
            chromosome.insert(gene.clone(), random_gene(table, gene, rng)?);
        }
    }
    Ok(())
}

/// Produce one offspring for a non-elite slot: roulette selection, then
/// single-point crossover with probability `crossover_rate`, then the
/// mutation pass, which runs whether or not crossover fired.
pub fn reproduce<R: Rng>(
    population: &Population,
    cumulative: &[f64],
    gene_names: &[String],
    table: &GeneDomainTable,
    crossover_rate: f64,
    mutation_prob: f64,
    rng: &mut R,
) -> Result<Chromosome> {
    let parent1 = roulette_select(population, cumulative, rng);

    let mut child = if rng.gen::<f64>() < crossover_rate {
        let parent2 = roulette_select(population, cumulative, rng);
        crossover(parent1, parent2, gene_names, rng)
    } else {
        parent1.clone()
    };

    mutate(&mut child, gene_names, table, mutation_prob, rng)?;
    Ok(child)
}

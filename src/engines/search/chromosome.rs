use std::collections::HashMap;

use rand::Rng;

use crate::error::Result;
use crate::genes::GeneDomainTable;

/// One candidate hyperparameter configuration: gene name -> chosen value.
///
/// Keys are restricted to the gene names of the variant being tuned; every
/// value is a member of the corresponding gene's domain, including after
/// crossover and mutation.
pub type Chromosome = HashMap<String, f64>;

/// Sample a uniformly random value from `gene`'s domain, independent across
/// calls.
pub fn random_gene<R: Rng>(table: &GeneDomainTable, gene: &str, rng: &mut R) -> Result<f64> {
    let domain = table.domain(gene)?;
    Ok(domain[rng.gen_range(0..domain.len())])
}

/// Build one complete random chromosome over `gene_names`, with one
/// independent domain draw per gene.
pub fn random_chromosome<R: Rng>(
    table: &GeneDomainTable,
    gene_names: &[String],
    rng: &mut R,
) -> Result<Chromosome> {
    let mut chromosome = Chromosome::with_capacity(gene_names.len());
    for gene in gene_names {
        chromosome.insert(gene.clone(), random_gene(table, gene, rng)?);
    }
    Ok(chromosome)
}

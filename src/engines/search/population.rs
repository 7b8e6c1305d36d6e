use rand::Rng;

use crate::error::Result;
use crate::genes::GeneDomainTable;

use super::chromosome::{random_chromosome, Chromosome};

/// The ordered collection of chromosomes for one generation.
///
/// The size is fixed at creation and holds for the whole run: each generation
/// replaces the individuals wholesale rather than editing them in place.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Chromosome>,
}

impl Population {
    /// Create `size` independent random chromosomes. Duplicates are allowed.
    pub fn random<R: Rng>(
        table: &GeneDomainTable,
        gene_names: &[String],
        size: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let individuals = (0..size)
            .map(|_| random_chromosome(table, gene_names, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { individuals })
    }

    /// Swap in the next generation at the generation boundary. The
    /// replacement must keep the population size.
    pub fn replace(&mut self, next: Vec<Chromosome>) {
        debug_assert_eq!(next.len(), self.individuals.len());
        self.individuals = next;
    }

    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genes::ModelVariant;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_population_has_exact_size() {
        let table = GeneDomainTable::standard();
        let gene_names: Vec<String> = ModelVariant::Ddpg
            .gene_names()
            .iter()
            .map(|g| (*g).to_string())
            .collect();
        let mut rng = StdRng::seed_from_u64(42);

        let population = Population::random(&table, &gene_names, 25, &mut rng).unwrap();
        assert_eq!(population.len(), 25);
        for chromosome in population.individuals() {
            assert_eq!(chromosome.len(), gene_names.len());
        }
    }
}

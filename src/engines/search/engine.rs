use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::engines::evaluation::{
    build_worker_pool, evaluate_population, FailurePolicy, FitnessEvaluator,
};
use crate::error::{Result, RltuneError};
use crate::genes::{GeneDomainTable, ModelVariant};

use super::chromosome::Chromosome;
use super::elites::select_elites;
use super::operators::reproduce;
use super::population::Population;
use super::selection::build_cumulative;

/// Run parameters for one search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub model_variant: ModelVariant,
    pub nof_generations: usize,
    pub pop_size: usize,
    pub nof_elites: usize,
    pub crossover_rate: f64,
    pub mutation_prob: f64,
    /// Evaluation worker threads; `None` uses all available cores.
    pub worker_threads: Option<usize>,
    pub failure_policy: FailurePolicy,
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pop_size == 0 {
            return Err(RltuneError::InvalidHyperparameter(
                "pop_size must be positive".to_string(),
            ));
        }
        if self.nof_generations == 0 {
            return Err(RltuneError::InvalidHyperparameter(
                "nof_generations must be positive".to_string(),
            ));
        }
        if self.nof_elites == 0 || self.nof_elites > self.pop_size {
            return Err(RltuneError::InvalidHyperparameter(format!(
                "nof_elites must be in 1..={}, got {}",
                self.pop_size, self.nof_elites
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(RltuneError::InvalidHyperparameter(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            return Err(RltuneError::InvalidHyperparameter(format!(
                "mutation_prob must be in [0, 1], got {}",
                self.mutation_prob
            )));
        }
        if self.worker_threads == Some(0) {
            return Err(RltuneError::InvalidHyperparameter(
                "worker_threads must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of a completed run: the final generation's top chromosome and the
/// per-generation best-fitness trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub best_chromosome: Chromosome,
    pub fitness_log: Vec<f64>,
}

/// Callbacks for observing run progress.
pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64);
}

/// Generational hyperparameter search engine.
///
/// Owns all mutable run state (population, fitness log, best chromosome), so
/// concurrent runs never share history. One instance drives one run:
/// evaluate the population in parallel, build the cumulative fitness
/// distribution, carry elites forward, fill the remaining slots with
/// offspring, swap generations, repeat.
pub struct SearchEngine<E: FitnessEvaluator> {
    config: SearchConfig,
    table: GeneDomainTable,
    gene_names: Vec<String>,
    evaluator: E,
    rng: StdRng,
    fitness_log: Vec<f64>,
    best_chromosome: Option<Chromosome>,
}

impl<E: FitnessEvaluator> SearchEngine<E> {
    /// Engine over the standard gene table, with the gene schema resolved
    /// from the configured model variant.
    pub fn new(config: SearchConfig, evaluator: E) -> Result<Self> {
        let gene_names = config
            .model_variant
            .gene_names()
            .iter()
            .map(|g| (*g).to_string())
            .collect();
        Self::with_gene_space(config, GeneDomainTable::standard(), gene_names, evaluator)
    }

    /// Engine over a caller-supplied gene space. The configured model variant
    /// is still forwarded to the evaluator untouched.
    pub fn with_gene_space(
        config: SearchConfig,
        table: GeneDomainTable,
        gene_names: Vec<String>,
        evaluator: E,
    ) -> Result<Self> {
        config.validate()?;
        if gene_names.is_empty() {
            return Err(RltuneError::InvalidHyperparameter(
                "gene space is empty".to_string(),
            ));
        }
        for gene in &gene_names {
            if table.domain(gene)?.is_empty() {
                return Err(RltuneError::InvalidHyperparameter(format!(
                    "gene {} has an empty domain",
                    gene
                )));
            }
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            table,
            gene_names,
            evaluator,
            rng,
            fitness_log: Vec::new(),
            best_chromosome: None,
        })
    }

    /// Drive the full generation loop and return the best chromosome of the
    /// final generation together with the fitness log.
    pub fn run<C: ProgressCallback>(
        &mut self,
        ctx: &E::Context,
        mut callback: C,
    ) -> Result<SearchOutcome> {
        let pool = build_worker_pool(self.config.worker_threads)?;
        self.fitness_log.clear();
        self.best_chromosome = None;

        info!(
            "initializing population: variant={} pop_size={} genes={}",
            self.config.model_variant,
            self.config.pop_size,
            self.gene_names.len()
        );
        let mut population = Population::random(
            &self.table,
            &self.gene_names,
            self.config.pop_size,
            &mut self.rng,
        )?;

        for generation in 0..self.config.nof_generations {
            callback.on_generation_start(generation);
            debug!(
                "generation {}/{}: dispatching {} evaluations",
                generation + 1,
                self.config.nof_generations,
                population.len()
            );

            // Full barrier: nothing below runs until every fitness result of
            // this generation is in, index-aligned with the population.
            let fitness = evaluate_population(
                &pool,
                &self.evaluator,
                population.individuals(),
                self.config.model_variant,
                ctx,
                self.config.failure_policy,
            )?;

            let cumulative = build_cumulative(&fitness)?;

            let elites = select_elites(&population, &fitness, self.config.nof_elites);
            let best_fitness = elites.fitness[0];
            self.fitness_log.push(best_fitness);
            self.best_chromosome = Some(elites.chromosomes[0].clone());

            info!(
                "generation {}/{}: best fitness {:.6}",
                generation + 1,
                self.config.nof_generations,
                best_fitness
            );
            callback.on_generation_complete(generation, best_fitness);

            if generation + 1 == self.config.nof_generations {
                break;
            }

            // Elites carry over unchanged; offspring fill the rest. The new
            // generation replaces the old one in a single swap.
            let mut next = elites.chromosomes;
            while next.len() < self.config.pop_size {
                next.push(reproduce(
                    &population,
                    &cumulative,
                    &self.gene_names,
                    &self.table,
                    self.config.crossover_rate,
                    self.config.mutation_prob,
                    &mut self.rng,
                )?);
            }
            population.replace(next);
        }

        let best_chromosome = self.best_chromosome.clone().ok_or_else(|| {
            RltuneError::InvalidHyperparameter(
                "run finished without completing a generation".to_string(),
            )
        })?;
        Ok(SearchOutcome {
            best_chromosome,
            fitness_log: self.fitness_log.clone(),
        })
    }

    /// Per-generation best fitness recorded so far.
    pub fn fitness_log(&self) -> &[f64] {
        &self.fitness_log
    }

    /// Top elite of the most recently completed generation.
    pub fn best_chromosome(&self) -> Option<&Chromosome> {
        self.best_chromosome.as_ref()
    }
}

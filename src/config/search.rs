use super::traits::ConfigSection;
use crate::engines::search::SearchConfig as EngineSearchConfig;
use crate::error::RltuneError;
use crate::genes::ModelVariant;
use serde::{Deserialize, Serialize};

/// GA run parameters as they appear in a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub model_variant: String,
    pub nof_generations: usize,
    pub pop_size: usize,
    pub nof_elites: usize,
    pub crossover_rate: f64,
    pub mutation_prob: f64,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            model_variant: "DQN".to_string(),
            nof_generations: 10,
            pop_size: 50,
            nof_elites: 1,
            crossover_rate: 0.7,
            mutation_prob: 0.05,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Parse the variant name, rejecting anything outside the closed set.
    pub fn model_variant(&self) -> Result<ModelVariant, RltuneError> {
        self.model_variant.parse()
    }

    /// Assemble the engine's run config from this section and the evaluation
    /// section.
    pub fn to_engine_config(
        &self,
        evaluation: &super::evaluation::EvaluationConfig,
    ) -> Result<EngineSearchConfig, RltuneError> {
        let config = EngineSearchConfig {
            model_variant: self.model_variant()?,
            nof_generations: self.nof_generations,
            pop_size: self.pop_size,
            nof_elites: self.nof_elites,
            crossover_rate: self.crossover_rate,
            mutation_prob: self.mutation_prob,
            worker_threads: evaluation.worker_threads,
            failure_policy: evaluation.failure_policy,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), RltuneError> {
        self.model_variant()?;
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
            return Err(RltuneError::InvalidHyperparameter(
                "crossover_rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_prob) {
            return Err(RltuneError::InvalidHyperparameter(
                "mutation_prob must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}

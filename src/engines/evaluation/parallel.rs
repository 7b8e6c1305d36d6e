use log::warn;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::engines::search::Chromosome;
use crate::error::{Result, RltuneError};
use crate::genes::ModelVariant;

use super::evaluator::FitnessEvaluator;

/// What to do when a single fitness evaluation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record a zero fitness for the failed individual and keep going. Zero
    /// gives it no roulette share without poisoning the cumulative
    /// distribution.
    Penalize,
    /// Fail the whole run on the first evaluation error.
    Abort,
}

const PENALIZED_FITNESS: f64 = 0.0;

/// Build the bounded evaluation pool. `None` sizes it to the available
/// hardware parallelism.
pub fn build_worker_pool(worker_threads: Option<usize>) -> Result<ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(worker_threads.unwrap_or(0))
        .build()
        .map_err(|e| RltuneError::Configuration(format!("failed to build worker pool: {}", e)))
}

/// Evaluate one whole generation on the worker pool.
///
/// Returns one fitness per chromosome, index-aligned with the input ordering
/// no matter which worker finishes first, and blocks until every evaluation
/// has returned; there is no partial-result path. Workers see an immutable
/// chromosome and return a score, nothing more.
pub fn evaluate_population<E: FitnessEvaluator>(
    pool: &ThreadPool,
    evaluator: &E,
    chromosomes: &[Chromosome],
    variant: ModelVariant,
    ctx: &E::Context,
    failure_policy: FailurePolicy,
) -> Result<Vec<f64>> {
    pool.install(|| {
        chromosomes
            .par_iter()
            .enumerate()
            .map(|(index, chromosome)| {
                match evaluator.evaluate(chromosome, variant, ctx) {
                    Ok(fitness) => Ok(fitness),
                    Err(err) => match failure_policy {
                        FailurePolicy::Penalize => {
                            warn!(
                                "evaluation of individual {} failed ({:#}); recording penalized fitness",
                                index, err
                            );
                            Ok(PENALIZED_FITNESS)
                        }
                        FailurePolicy::Abort => Err(RltuneError::EvaluationFailure {
                            index,
                            message: format!("{:#}", err),
                        }),
                    },
                }
            })
            .collect::<Result<Vec<f64>>>()
    })
}

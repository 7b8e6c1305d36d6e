use super::traits::ConfigSection;
use crate::engines::evaluation::FailurePolicy;
use crate::error::RltuneError;
use serde::{Deserialize, Serialize};

/// Worker pool and failure handling for fitness evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Evaluation worker threads; omit to use all available cores.
    pub worker_threads: Option<usize>,
    pub failure_policy: FailurePolicy,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            failure_policy: FailurePolicy::Penalize,
        }
    }
}

impl ConfigSection for EvaluationConfig {
    fn section_name() -> &'static str {
        "evaluation"
    }

    fn validate(&self) -> Result<(), RltuneError> {
        if self.worker_threads == Some(0) {
            return Err(RltuneError::InvalidHyperparameter(
                "worker_threads must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

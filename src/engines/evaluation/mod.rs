pub mod evaluator;
pub mod parallel;

pub use evaluator::FitnessEvaluator;
pub use parallel::{build_worker_pool, evaluate_population, FailurePolicy};

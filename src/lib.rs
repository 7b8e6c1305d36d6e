pub mod config;
pub mod engines;
pub mod error;
pub mod genes;

pub use engines::evaluation::{FailurePolicy, FitnessEvaluator};
pub use engines::search::{
    Chromosome, ProgressCallback, SearchConfig, SearchEngine, SearchOutcome,
};
pub use error::{Result, RltuneError};
pub use genes::{GeneDomainTable, ModelVariant};

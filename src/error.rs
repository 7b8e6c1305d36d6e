use thiserror::Error;

#[derive(Error, Debug)]
pub enum RltuneError {
    #[error("Unknown model variant: {0}")]
    UnknownModelVariant(String),

    #[error("Invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    #[error("Unknown gene: {0}")]
    UnknownGene(String),

    #[error("Degenerate fitness: {0}")]
    DegenerateFitness(String),

    #[error("Evaluation failed for individual {index}: {message}")]
    EvaluationFailure { index: usize, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RltuneError>;

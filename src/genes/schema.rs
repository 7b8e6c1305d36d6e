use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RltuneError;

/// The closed set of RL model variants the search engine can tune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelVariant {
    Dqn,
    Ddpg,
    Trpo,
    Acktr,
    A2c,
}

const DQN_GENES: &[&str] = &[
    "gamma",
    "learning_rate",
    "hidden_layers",
    "nodes_per_layer",
    "batch_size",
    "step_size",
    "test_iteration",
];

const DDPG_GENES: &[&str] = &[
    "gamma",
    "learning_rate",
    "hidden_layers",
    "nodes_per_layer",
    "batch_size",
    "step_size",
    "actor_learning_rate",
    "critic_learning_rate",
    "alpha_reward",
    "beta_reward",
    "gamma_reward",
    "test_iteration",
];

const ACKTR_GENES: &[&str] = &[
    "gamma",
    "learning_rate",
    "hidden_layers",
    "nodes_per_layer",
    "batch_size",
    "step_size",
    "actor_learning_rate",
    "critic_learning_rate",
    "alpha_reward",
    "beta_reward",
    "gamma_reward",
    "epsilon",
    "trajectory_size",
    "max_kl",
    "test_iteration",
];

impl ModelVariant {
    pub const ALL: [ModelVariant; 5] = [
        ModelVariant::Dqn,
        ModelVariant::Ddpg,
        ModelVariant::Trpo,
        ModelVariant::Acktr,
        ModelVariant::A2c,
    ];

    /// Ordered list of gene names relevant to this variant.
    ///
    /// The ordering is canonical: crossover cut points are defined over it.
    pub fn gene_names(self) -> &'static [&'static str] {
        match self {
            ModelVariant::Dqn => DQN_GENES,
            ModelVariant::Ddpg | ModelVariant::Trpo => DDPG_GENES,
            ModelVariant::Acktr | ModelVariant::A2c => ACKTR_GENES,
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelVariant::Dqn => "DQN",
            ModelVariant::Ddpg => "DDPG",
            ModelVariant::Trpo => "TRPO",
            ModelVariant::Acktr => "ACKTR",
            ModelVariant::A2c => "A2C",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ModelVariant {
    type Err = RltuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DQN" => Ok(ModelVariant::Dqn),
            "DDPG" => Ok(ModelVariant::Ddpg),
            "TRPO" => Ok(ModelVariant::Trpo),
            "ACKTR" => Ok(ModelVariant::Acktr),
            "A2C" => Ok(ModelVariant::A2c),
            other => Err(RltuneError::UnknownModelVariant(other.to_string())),
        }
    }
}

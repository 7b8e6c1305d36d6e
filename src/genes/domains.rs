use std::collections::HashMap;

use crate::error::{Result, RltuneError};

/// Read-only table mapping each gene name to its finite, ordered set of
/// candidate values.
///
/// Domains are fixed at construction and shared across evaluation workers
/// without locking; nothing mutates them at runtime.
#[derive(Debug, Clone)]
pub struct GeneDomainTable {
    domains: HashMap<String, Vec<f64>>,
}

impl GeneDomainTable {
    /// Build a table from explicit gene domains.
    pub fn new(domains: HashMap<String, Vec<f64>>) -> Self {
        Self { domains }
    }

    /// The built-in hyperparameter domains covering every supported RL model
    /// variant.
    pub fn standard() -> Self {
        let mut domains = HashMap::new();
        domains.insert("gamma".to_string(), arange(1e-3, 1e-1, 1e-2));
        domains.insert("learning_rate".to_string(), arange(1e-3, 1e-1, 1e-2));
        domains.insert("hidden_layers".to_string(), vec![2.0]);
        domains.insert("nodes_per_layer".to_string(), arange(3.0, 256.0, 2.0));
        domains.insert("batch_size".to_string(), vec![64.0, 128.0, 500.0]);
        domains.insert("step_size".to_string(), arange(1.0, 5.0, 0.5));
        domains.insert("actor_learning_rate".to_string(), arange(1e-4, 1e-1, 1e-2));
        domains.insert("critic_learning_rate".to_string(), arange(1e-4, 1e-1, 1e-2));
        domains.insert(
            "alpha_reward".to_string(),
            vec![10.0, 20.0, 50.0, 100.0, 1000.0],
        );
        domains.insert("beta_reward".to_string(), vec![0.1, 1.0, 2.5, 5.0]);
        domains.insert("gamma_reward".to_string(), vec![0.1, 0.5, 1.0, 1.5, 2.0]);
        domains.insert("epsilon".to_string(), arange(1e-3, 1e-1, 1e-2));
        domains.insert(
            "trajectory_size".to_string(),
            vec![10.0, 20.0, 50.0, 100.0, 1000.0],
        );
        domains.insert("max_kl".to_string(), vec![0.001, 0.01, 0.1]);
        domains.insert(
            "test_iteration".to_string(),
            vec![1000.0, 5000.0, 10000.0, 20000.0],
        );
        Self { domains }
    }

    /// Candidate values for `gene`.
    pub fn domain(&self, gene: &str) -> Result<&[f64]> {
        self.domains
            .get(gene)
            .map(Vec::as_slice)
            .ok_or_else(|| RltuneError::UnknownGene(gene.to_string()))
    }

    /// Whether `value` is a member of `gene`'s domain. Exact comparison is
    /// intentional: legal chromosome values are always drawn from the table.
    pub fn contains(&self, gene: &str, value: f64) -> bool {
        self.domains
            .get(gene)
            .map(|domain| domain.iter().any(|v| *v == value))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

/// Half-open arithmetic range `[start, stop)` with the given step.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut i = 0u32;
    loop {
        let v = start + f64::from(i) * step;
        if v >= stop {
            break;
        }
        values.push(v);
        i += 1;
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arange_half_open() {
        let values = arange(1.0, 5.0, 0.5);
        assert_eq!(values.len(), 8);
        assert_eq!(values[0], 1.0);
        assert_eq!(values[7], 4.5);
    }

    #[test]
    fn test_standard_table_genes() {
        let table = GeneDomainTable::standard();
        assert_eq!(table.len(), 15);
        for gene in [
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
        ] {
            assert!(!table.domain(gene).unwrap().is_empty(), "{} missing", gene);
        }
    }

    #[test]
    fn test_unknown_gene_rejected() {
        let table = GeneDomainTable::standard();
        assert!(matches!(
            table.domain("warp_factor"),
            Err(RltuneError::UnknownGene(_))
        ));
    }

    #[test]
    fn test_contains_membership() {
        let table = GeneDomainTable::standard();
        assert!(table.contains("batch_size", 128.0));
        assert!(!table.contains("batch_size", 129.0));
        assert!(!table.contains("warp_factor", 1.0));
    }
}

use crate::engines::search::Chromosome;
use crate::genes::ModelVariant;

/// Contract for the external fitness procedure.
///
/// An implementation trains and scores one candidate configuration; higher is
/// better. Calls must be independent for distinct chromosomes so a whole
/// generation can be dispatched to the worker pool at once; the engine never
/// shares mutable state across calls. An evaluation may take minutes and may
/// be stochastic; a failed call is contained per individual by the engine's
/// `FailurePolicy` rather than tearing down the generation.
pub trait FitnessEvaluator: Sync {
    /// Opaque environment handles (simulators, devices) forwarded by the
    /// engine untouched.
    type Context: Sync;

    fn evaluate(
        &self,
        chromosome: &Chromosome,
        variant: ModelVariant,
        ctx: &Self::Context,
    ) -> anyhow::Result<f64>;
}

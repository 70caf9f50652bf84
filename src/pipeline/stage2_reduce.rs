use tracing::debug;

use crate::model::scores::{NamedStatistic, ScoreSequence, StatsError};
use crate::reducers::ReducerRegistry;
use crate::report::text::render_statistics;

/// Fails before any reducer runs when `values` is empty.
pub fn run_stage2(
    values: Vec<f64>,
    registry: &ReducerRegistry,
) -> Result<Vec<NamedStatistic>, StatsError> {
    let scores = ScoreSequence::new(values)?;
    debug!(
        n_scores = scores.len(),
        reducers = ?registry.labels().collect::<Vec<_>>(),
        "reducing scores"
    );
    Ok(registry.apply(&scores))
}

/// Builtin statistics rendered as the four-line text block.
pub fn reduce(values: Vec<f64>) -> Result<String, StatsError> {
    let stats = run_stage2(values, &ReducerRegistry::builtin())?;
    Ok(render_statistics(&stats))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_reduce.rs"]
mod tests;

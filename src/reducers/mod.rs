pub mod defs;
pub mod welford;

use std::fmt;

use crate::model::scores::{NamedStatistic, ScoreCursor, ScoreSequence};
use defs::{ReducerDef, builtin_reducers};

/// How a reducer wants to see the scores.
#[derive(Clone, Copy)]
pub enum Reducer {
    /// Consumes a fresh forward-only cursor, one pass.
    Streaming(fn(ScoreCursor<'_>) -> f64),
    /// Needs the whole buffer at once.
    Materialized(fn(&[f64]) -> f64),
}

impl Reducer {
    pub fn apply(&self, scores: &ScoreSequence) -> f64 {
        match self {
            Reducer::Streaming(f) => f(scores.cursor()),
            Reducer::Materialized(f) => f(scores.as_slice()),
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            Reducer::Streaming(_) => "streaming",
            Reducer::Materialized(_) => "materialized",
        }
    }
}

impl fmt::Debug for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reducer::{}", self.shape())
    }
}

/// Named reducers, applied and reported in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ReducerRegistry {
    entries: Vec<ReducerDef>,
}

impl ReducerRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for def in builtin_reducers() {
            registry.register(def.label, def.reducer);
        }
        registry
    }

    /// Appends `reducer` under `label`. An existing label keeps its position
    /// and gets the new reducer.
    pub fn register(&mut self, label: &'static str, reducer: Reducer) {
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => existing.reducer = reducer,
            None => self.entries.push(ReducerDef { label, reducer }),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.label)
    }

    pub fn apply(&self, scores: &ScoreSequence) -> Vec<NamedStatistic> {
        self.entries
            .iter()
            .map(|def| NamedStatistic {
                label: def.label,
                value: def.reducer.apply(scores),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/reducers/tests.rs"]
mod tests;

use crate::model::scores::ScoreCursor;
use crate::reducers::Reducer;
use crate::reducers::welford::Welford;

#[derive(Debug, Clone, Copy)]
pub struct ReducerDef {
    pub label: &'static str,
    pub reducer: Reducer,
}

const BUILTIN_REDUCERS: &[ReducerDef] = &[
    ReducerDef {
        label: "maximum",
        reducer: Reducer::Materialized(maximum),
    },
    ReducerDef {
        label: "minimum",
        reducer: Reducer::Materialized(minimum),
    },
    ReducerDef {
        label: "average",
        reducer: Reducer::Streaming(average),
    },
    ReducerDef {
        label: "standard deviation",
        reducer: Reducer::Streaming(std_dev),
    },
];

pub fn builtin_reducers() -> &'static [ReducerDef] {
    BUILTIN_REDUCERS
}

pub fn maximum(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub fn minimum(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn average(values: ScoreCursor<'_>) -> f64 {
    let mut n = 0usize;
    let mut sum = 0.0f64;
    for v in values {
        sum += v;
        n += 1;
    }
    sum / n as f64
}

/// Population standard deviation (divides by n).
pub fn std_dev(values: ScoreCursor<'_>) -> f64 {
    let mut acc = Welford::new();
    for v in values {
        acc.update(v);
    }
    acc.population_variance().sqrt()
}

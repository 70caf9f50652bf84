use super::defs::{average, builtin_reducers, maximum, minimum, std_dev};
use super::welford::Welford;
use super::*;

fn seq(values: &[f64]) -> ScoreSequence {
    ScoreSequence::new(values.to_vec()).unwrap()
}

fn two_pass_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
    (ss / n).sqrt()
}

#[test]
fn test_builtin_order() {
    let labels: Vec<&str> = ReducerRegistry::builtin().labels().collect();
    assert_eq!(
        labels,
        vec!["maximum", "minimum", "average", "standard deviation"]
    );
    assert_eq!(builtin_reducers().len(), 4);
}

#[test]
fn test_builtin_shapes() {
    let shapes: Vec<&str> = builtin_reducers()
        .iter()
        .map(|d| d.reducer.shape())
        .collect();
    assert_eq!(
        shapes,
        vec!["materialized", "materialized", "streaming", "streaming"]
    );
}

#[test]
fn test_single_value() {
    let stats = ReducerRegistry::builtin().apply(&seq(&[1.0]));
    let values: Vec<f64> = stats.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn test_uniform_sequence_has_zero_deviation() {
    let stats = ReducerRegistry::builtin().apply(&seq(&[1.0, 1.0, 1.0, 1.0]));
    assert_eq!(stats[3].label, "standard deviation");
    assert_eq!(stats[3].value, 0.0);
    assert_eq!(stats[2].value, 1.0);
}

#[test]
fn test_one_two_three() {
    let stats = ReducerRegistry::builtin().apply(&seq(&[1.0, 2.0, 3.0]));
    assert_eq!(stats[0].value, 3.0);
    assert_eq!(stats[1].value, 1.0);
    assert_eq!(stats[2].value, 2.0);
    assert!((stats[3].value - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert!((stats[3].value - 0.8164965809).abs() < 1e-9);
}

#[test]
fn test_std_dev_matches_two_pass() {
    let values = [0.91, 0.0034, 0.5, 0.77, 0.12, 1.0, 0.33333, 0.000071];
    let streamed = std_dev(values.iter().copied());
    assert!((streamed - two_pass_std(&values)).abs() < 1e-12);
}

#[test]
fn test_min_max_ignore_order() {
    let values = [0.25, 0.75, 0.5, 0.5];
    assert_eq!(maximum(&values), 0.75);
    assert_eq!(minimum(&values), 0.25);
    assert_eq!(average(values.iter().copied()), 0.5);
}

#[test]
fn test_welford_short_inputs() {
    let mut acc = Welford::new();
    assert_eq!(acc.population_variance(), 0.0);
    acc.update(0.7);
    assert_eq!(acc.population_variance(), 0.0);
    acc.update(0.3);
    assert!((acc.population_variance() - 0.04).abs() < 1e-12);
}

#[test]
fn test_register_appends_in_order() {
    fn count(values: ScoreCursor<'_>) -> f64 {
        values.count() as f64
    }
    let mut registry = ReducerRegistry::builtin();
    registry.register("count", Reducer::Streaming(count));
    let stats = registry.apply(&seq(&[0.2, 0.4]));
    assert_eq!(stats.len(), 5);
    assert_eq!(stats[4].label, "count");
    assert_eq!(stats[4].value, 2.0);
}

#[test]
fn test_register_existing_label_keeps_position() {
    fn first(values: &[f64]) -> f64 {
        values[0]
    }
    let mut registry = ReducerRegistry::builtin();
    registry.register("minimum", Reducer::Materialized(first));
    assert_eq!(registry.labels().count(), 4);
    let stats = registry.apply(&seq(&[0.5, 0.1]));
    assert_eq!(stats[1].label, "minimum");
    assert_eq!(stats[1].value, 0.5);
}

#[test]
fn test_apply_is_repeatable() {
    let registry = ReducerRegistry::builtin();
    let scores = seq(&[0.3, 0.6, 0.9]);
    assert_eq!(registry.apply(&scores), registry.apply(&scores));
}

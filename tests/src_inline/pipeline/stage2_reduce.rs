use super::*;
use pretty_assertions::assert_eq;

const GOLDEN: &str = "maximum: 1.0\nminimum: 1.0\naverage: 1.0\nstandard deviation: 0.0\n";

#[test]
fn test_reduce_single_value() {
    assert_eq!(reduce(vec![1.0]).unwrap(), GOLDEN);
}

#[test]
fn test_reduce_uniform_matches_golden() {
    assert_eq!(reduce(vec![1.0, 1.0, 1.0, 1.0]).unwrap(), GOLDEN);
}

#[test]
fn test_reduce_one_two_three() {
    assert_eq!(
        reduce(vec![1.0, 2.0, 3.0]).unwrap(),
        "maximum: 3.0\nminimum: 1.0\naverage: 2.0\nstandard deviation: 0.816496580927726\n"
    );
}

#[test]
fn test_reduce_empty_fails() {
    assert_eq!(reduce(Vec::new()), Err(StatsError::EmptySequence));
    assert_eq!(
        run_stage2(Vec::new(), &ReducerRegistry::builtin()),
        Err(StatsError::EmptySequence)
    );
}

#[test]
fn test_reduce_four_lines_in_order() {
    let text = reduce(vec![0.12, 0.98, 0.4, 0.03, 0.71]).unwrap();
    let labels: Vec<&str> = text
        .lines()
        .map(|l| l.split_once(": ").unwrap().0)
        .collect();
    assert_eq!(
        labels,
        vec!["maximum", "minimum", "average", "standard deviation"]
    );
    assert!(text.ends_with('\n'));
}

#[test]
fn test_reduce_idempotent() {
    let values = vec![0.2, 0.9, 0.35, 0.6];
    assert_eq!(
        reduce(values.clone()).unwrap(),
        reduce(values).unwrap()
    );
}

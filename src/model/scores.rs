use thiserror::Error;

/// Forward-only view over a score buffer, handed to streaming reducers.
pub type ScoreCursor<'a> = std::iter::Copied<std::slice::Iter<'a, f64>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("no association scores to summarize (empty result set)")]
    EmptySequence,
}

/// Overall association scores in API response order. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSequence {
    values: Vec<f64>,
}

impl ScoreSequence {
    pub fn new(values: Vec<f64>) -> Result<Self, StatsError> {
        if values.is_empty() {
            return Err(StatsError::EmptySequence);
        }
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn cursor(&self) -> ScoreCursor<'_> {
        self.values.iter().copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedStatistic {
    pub label: &'static str,
    pub value: f64,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;

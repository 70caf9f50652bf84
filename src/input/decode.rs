use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("response is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("response has no top-level `data` array")]
    MissingData,
    #[error("malformed association record: {0}")]
    Record(#[source] serde_json::Error),
}

/// One row of the association filter response. Only the overall score is read.
#[derive(Debug, Clone, Deserialize)]
pub struct AssociationRecord {
    pub association_score: AssociationScore,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AssociationScore {
    pub overall: f64,
}

pub fn decode(body: &str) -> Result<Vec<AssociationRecord>, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(DecodeError::Json)?;
    let data = match value.get("data") {
        Some(data) if data.is_array() => data,
        _ => return Err(DecodeError::MissingData),
    };
    Vec::<AssociationRecord>::deserialize(data).map_err(DecodeError::Record)
}

pub fn project_scores(records: &[AssociationRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|r| r.association_score.overall)
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/decode.rs"]
mod tests;

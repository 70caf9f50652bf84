use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("invalid base URL {base:?}: {reason}")]
    InvalidBase { base: String, reason: String },
}

/// Replaces the query component of `base` with the form-encoded `params`,
/// in the given order. Scheme, host, path and fragment are kept.
pub fn build_url(base: &str, params: &[(&str, &str)]) -> Result<String, QueryError> {
    let mut url = Url::parse(base).map_err(|e| QueryError::InvalidBase {
        base: base.to_string(),
        reason: e.to_string(),
    })?;
    url.set_query(None);
    if !params.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }
    Ok(url.into())
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/query.rs"]
mod tests;

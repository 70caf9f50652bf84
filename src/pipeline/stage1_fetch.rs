use thiserror::Error;
use tracing::info;

use crate::input::decode::{DecodeError, decode, project_scores};
use crate::input::query::{QueryError, build_url};
use crate::input::transport::{FetchError, Transport};

#[derive(Debug, Error)]
pub enum Stage1Error {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone)]
pub struct FetchParams<'a> {
    pub base_url: &'a str,
    /// `target` or `disease`.
    pub filter_key: &'static str,
    pub id: &'a str,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub scores: Vec<f64>,
}

pub fn run_stage1(
    params: &FetchParams<'_>,
    transport: &dyn Transport,
) -> Result<Stage1Output, Stage1Error> {
    let url = build_url(params.base_url, &[(params.filter_key, params.id)])?;
    let body = transport.get(&url)?;
    let records = decode(&body)?;
    info!(
        url = %url,
        filter = params.filter_key,
        id = params.id,
        records = records.len(),
        "associations fetched"
    );
    Ok(Stage1Output {
        scores: project_scores(&records),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_fetch.rs"]
mod tests;

use thiserror::Error;

use crate::input::decode::DecodeError;
use crate::input::query::QueryError;
use crate::input::transport::FetchError;
use crate::model::scores::StatsError;
use crate::pipeline::stage1_fetch::Stage1Error;
use crate::selftest::SelfTestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Network,
    Decode,
    EmptySequence,
    SelfTest,
    Internal,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Internal => 1,
            ErrorKind::Usage => 2,
            ErrorKind::Network => 3,
            ErrorKind::Decode => 4,
            ErrorKind::EmptySequence => 5,
            ErrorKind::SelfTest => 6,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Stats(#[from] StatsError),
    #[error(transparent)]
    SelfTest(#[from] SelfTestError),
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Usage(_) | AppError::Query(_) => ErrorKind::Usage,
            AppError::Fetch(_) => ErrorKind::Network,
            AppError::Decode(_) => ErrorKind::Decode,
            AppError::Stats(StatsError::EmptySequence) => ErrorKind::EmptySequence,
            AppError::SelfTest(_) => ErrorKind::SelfTest,
            AppError::Output(_) => ErrorKind::Internal,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.kind().exit_code()
    }
}

impl From<Stage1Error> for AppError {
    fn from(value: Stage1Error) -> Self {
        match value {
            Stage1Error::Query(e) => AppError::Query(e),
            Stage1Error::Fetch(e) => AppError::Fetch(e),
            Stage1Error::Decode(e) => AppError::Decode(e),
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/error.rs"]
mod tests;

use thiserror::Error;

use sr_core::SrError;

#[derive(Debug, Error)]
pub enum PolarError {
    #[error("polar parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PolarError> for SrError {
    fn from(e: PolarError) -> Self {
        match e {
            PolarError::Parse(msg) => SrError::Parse(msg),
            PolarError::Io(io) => SrError::Io(io),
        }
    }
}

pub type PolarResult<T> = Result<T, PolarError>;

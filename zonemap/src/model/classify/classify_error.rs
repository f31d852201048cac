use crate::model::source::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("no points found for the given postal code ranges")]
    NoPointsFound,
    #[error("failure streaming point source: {source}")]
    SourceError {
        #[from]
        source: SourceError,
    },
    #[error("{0}")]
    InternalError(String),
}

use super::{
    cache::CacheError, classify::ClassifyError, fit::FitError, output::OutputError,
    roster::RosterError,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("no zones to process: {0}")]
    NoZonesFound(String),
    #[error("failure parsing roster: {source}")]
    RosterError {
        #[from]
        source: RosterError,
    },
    #[error("failure reading or writing a zone cache: {source}")]
    CacheError {
        #[from]
        source: CacheError,
    },
    #[error("failure classifying points: {source}")]
    ClassifyError {
        #[from]
        source: ClassifyError,
    },
    #[error("failure fitting zone boundary: {source}")]
    FitError {
        #[from]
        source: FitError,
    },
    #[error("failure writing feature collection: {source}")]
    OutputError {
        #[from]
        source: OutputError,
    },
    #[error("{source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("{0}")]
    InternalError(String),
}

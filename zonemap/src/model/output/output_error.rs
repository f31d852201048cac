use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("zone {0} has no boundary to serialize")]
    MissingBoundary(String),
    #[error("failure encoding feature collection: {0}")]
    EncodeError(serde_json::Error),
    #[error("failure writing feature collection to {0}: {1}")]
    WriteError(String, std::io::Error),
}

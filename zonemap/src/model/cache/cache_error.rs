use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("failure reading cache file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure writing cache file {0}: {1}")]
    WriteError(String, std::io::Error),
    #[error("failure encoding cache table for {0}: {1}")]
    EncodeError(String, serde_json::Error),
}

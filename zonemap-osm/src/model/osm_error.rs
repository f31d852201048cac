use thiserror::Error;

#[derive(Error, Debug)]
pub enum OsmError {
    #[error("failure reading .pbf file: {source}")]
    PbfLibError { source: osmpbf::Error },
    #[error("pbf does not contain any OSM 'node' elements")]
    NoNodesFound,
    #[error("{0}")]
    InternalError(String),
}

use thiserror::Error;
use zonemap_osm::model::OsmError;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failure reading point source: {source}")]
    OsmError {
        #[from]
        source: OsmError,
    },
    #[error("{0}")]
    InternalError(String),
}

mod osm_error;
mod pbf_source;

pub use osm_error::OsmError;
pub use pbf_source::{PbfPointSource, ScanSummary};

use super::SourceError;
use crate::model::zone::Coord;
use zonemap_osm::model::PbfPointSource;

/// a type that can produce a finite, single-pass traversal of tagged points.
/// implementations stream a large geographic dataset and call back once per
/// element carrying the requested tag, with the tag value and the element
/// coordinate.
pub trait PointSource {
    fn for_each_tagged(
        &self,
        tag: &str,
        callback: &mut dyn FnMut(&str, Coord),
    ) -> Result<(), SourceError>;
}

impl PointSource for PbfPointSource {
    fn for_each_tagged(
        &self,
        tag: &str,
        callback: &mut dyn FnMut(&str, Coord),
    ) -> Result<(), SourceError> {
        self.scan_tagged_nodes(tag, |value, coord| callback(value, coord))?;
        Ok(())
    }
}

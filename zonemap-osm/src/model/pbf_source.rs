use super::OsmError;
use kdam::{Bar, BarExt};
use osmpbf::{Element, ElementReader};
use std::path::Path;

/// node counts from one pass over a .pbf file
#[derive(Debug, Default, Clone, Copy)]
pub struct ScanSummary {
    pub visited: u64,
    pub emitted: u64,
}

/// a point source backed by an OpenStreetMap .pbf extract. each scan streams
/// the file exactly once; ways and relations are skipped.
pub struct PbfPointSource {
    pub pbf_filepath: String,
}

impl PbfPointSource {
    pub fn new(pbf_filepath: &str) -> PbfPointSource {
        PbfPointSource {
            pbf_filepath: String::from(pbf_filepath),
        }
    }

    /// streams every node in the extract, calling back with the value of `tag`
    /// and the node location (lon, lat) for each node carrying the tag. both
    /// plain and dense nodes are visited.
    pub fn scan_tagged_nodes<F>(&self, tag: &str, mut callback: F) -> Result<ScanSummary, OsmError>
    where
        F: FnMut(&str, (f64, f64)),
    {
        let fp = Path::new(&self.pbf_filepath);
        let reader =
            ElementReader::from_path(fp).map_err(|e| OsmError::PbfLibError { source: e })?;

        let mut bar = Bar::builder()
            .desc(self.pbf_filepath.as_str())
            .unit(" nodes")
            .unit_scale(true)
            .build()
            .map_err(OsmError::InternalError)?;

        let mut summary = ScanSummary::default();
        reader
            .for_each(|element| match element {
                Element::Node(node) => {
                    summary.visited += 1;
                    let _ = bar.update(1);
                    if let Some(value) = node.tags().find(|(k, _)| *k == tag).map(|(_, v)| v) {
                        summary.emitted += 1;
                        callback(value, (node.lon(), node.lat()));
                    }
                }
                Element::DenseNode(node) => {
                    // from documentation on DenseNode:
                    // So, if you want to [pattern match on] `Node`, you also likely want to match [`DenseNode`].
                    summary.visited += 1;
                    let _ = bar.update(1);
                    if let Some(value) = node.tags().find(|(k, _)| *k == tag).map(|(_, v)| v) {
                        summary.emitted += 1;
                        callback(value, (node.lon(), node.lat()));
                    }
                }
                _ => {}
            })
            .map_err(|e| OsmError::PbfLibError { source: e })?;
        eprintln!();

        if summary.visited == 0 {
            return Err(OsmError::NoNodesFound);
        }
        log::info!(
            "visited {} nodes in {}, {} carried tag '{}'",
            summary.visited,
            self.pbf_filepath,
            summary.emitted,
            tag
        );
        Ok(summary)
    }
}

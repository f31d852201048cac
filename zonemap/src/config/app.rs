use crate::model::{fit::BoundaryAlgorithm, ZoneCliError};
use serde::{Deserialize, Serialize};

/// run parameters for the boundary pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfiguration {
    /// the .pbf extract scanned for tagged points
    pub pbf_file: String,
    /// node tag holding the postal code
    pub postal_code_tag: String,
    pub zones_file: String,
    pub point_cache_file: String,
    pub boundary_cache_file: String,
    pub output_file: String,
    pub port: u16,
    pub algorithm: BoundaryAlgorithm,
}

impl Default for AppConfiguration {
    fn default() -> Self {
        Self {
            pbf_file: String::from("data/extract.osm.pbf"),
            postal_code_tag: String::from("addr:postcode"),
            zones_file: String::from("data/zones.json"),
            point_cache_file: String::from("data/point_cache.json"),
            boundary_cache_file: String::from("data/boundary_cache.json"),
            output_file: String::from("data/boundaries.geojson"),
            port: 8000,
            algorithm: BoundaryAlgorithm::default(),
        }
    }
}

impl TryFrom<&String> for AppConfiguration {
    type Error = ZoneCliError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                ZoneCliError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(ZoneCliError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

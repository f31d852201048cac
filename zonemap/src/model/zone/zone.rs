use serde::{Deserialize, Serialize};

/// a raw geographic coordinate as (longitude, latitude)
pub type Coord = (f64, f64);

/// one polygon ring. the first vertex is not repeated at the end; rings are
/// closed explicitly at GeoJSON serialization time.
pub type Ring = Vec<Coord>;

/// the coordinates classified into one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointCloud(pub Vec<Coord>);

/// the fitted boundary of a zone, one outer ring per polygon part. a single
/// entry is the normal case; multiple entries only occur when the fit
/// degrades to a multi-part shape at the concavity floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boundary(pub Vec<Ring>);

/// a numeric postal-code range with its owner and display colour. the
/// optional point cloud and boundary are attached as the pipeline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub start: u32,
    pub end: u32,
    pub owner: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co_owner: Option<String>,
    pub colour: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<PointCloud>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary: Option<Boundary>,
}

impl Zone {
    pub fn new(start: u32, end: u32, owner: &str, co_owner: Option<String>, colour: &str) -> Zone {
        Zone {
            start,
            end,
            owner: String::from(owner),
            co_owner,
            colour: String::from(colour),
            points: None,
            boundary: None,
        }
    }

    /// lookup key shared by the point cloud and boundary caches
    pub fn cache_key(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }

    /// inclusive range test against a postal code prefix
    pub fn contains(&self, code: u32) -> bool {
        self.start <= code && code <= self.end
    }

    /// display string combining range, owner and co-owner
    pub fn tooltip(&self) -> String {
        match &self.co_owner {
            Some(co) if !co.is_empty() => {
                format!("{} t/m {}: {} & {}", self.start, self.end, self.owner, co)
            }
            _ => format!("{} t/m {}: {}", self.start, self.end, self.owner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_format() {
        let zone = Zone::new(1000, 1099, "Alice", None, "#FF0000");
        assert_eq!(zone.cache_key(), "1000-1099");
    }

    #[test]
    fn test_contains_is_inclusive() {
        let zone = Zone::new(1000, 1099, "Alice", None, "#FF0000");
        assert!(zone.contains(1000));
        assert!(zone.contains(1050));
        assert!(zone.contains(1099));
        assert!(!zone.contains(999));
        assert!(!zone.contains(1100));
    }

    #[test]
    fn test_tooltip_with_and_without_co_owner() {
        let solo = Zone::new(1000, 1099, "Alice", None, "#FF0000");
        assert_eq!(solo.tooltip(), "1000 t/m 1099: Alice");
        let shared = Zone::new(1000, 1099, "Alice", Some(String::from("Bob")), "#FF0000");
        assert_eq!(shared.tooltip(), "1000 t/m 1099: Alice & Bob");
    }
}

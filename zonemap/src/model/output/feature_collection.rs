use super::OutputError;
use crate::model::zone::Zone;
use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{json, Map};
use std::fs;
use std::path::Path;

/// assembles the rendered feature collection: one feature per zone with the
/// range, tooltip and colour as properties and the fitted boundary as a
/// Polygon geometry. rings are closed explicitly as GeoJSON requires.
pub fn feature_collection(zones: &[Zone]) -> Result<FeatureCollection, OutputError> {
    let features = zones.iter().map(feature).collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// serializes the collection for `zones` to `path` as JSON
pub fn write_feature_collection(zones: &[Zone], path: &Path) -> Result<(), OutputError> {
    let collection = feature_collection(zones)?;
    let contents = serde_json::to_string(&collection).map_err(OutputError::EncodeError)?;
    fs::write(path, contents)
        .map_err(|e| OutputError::WriteError(path.display().to_string(), e))?;
    Ok(())
}

fn feature(zone: &Zone) -> Result<Feature, OutputError> {
    let boundary = zone
        .boundary
        .as_ref()
        .filter(|b| !b.0.is_empty())
        .ok_or_else(|| OutputError::MissingBoundary(zone.cache_key()))?;
    if boundary.0.len() > 1 {
        // the schema declares a single Polygon; renderers downstream must
        // tolerate the extra rings
        log::warn!(
            "zone {} has a multi-part boundary ({} rings)",
            zone.cache_key(),
            boundary.0.len()
        );
    }

    let rings = boundary
        .0
        .iter()
        .map(|ring| {
            let mut positions: Vec<Vec<f64>> =
                ring.iter().map(|(lon, lat)| vec![*lon, *lat]).collect();
            if let Some(first) = positions.first().cloned() {
                if positions.last() != Some(&first) {
                    positions.push(first);
                }
            }
            positions
        })
        .collect::<Vec<_>>();

    let mut properties = Map::new();
    properties.insert(String::from("start"), json!(zone.start));
    properties.insert(String::from("end"), json!(zone.end));
    properties.insert(String::from("tooltip"), json!(zone.tooltip()));
    properties.insert(String::from("colour"), json!(zone.colour));

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(rings))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::zone::Boundary;

    fn fitted_zone() -> Zone {
        let mut zone = Zone::new(1000, 1099, "Alice", Some(String::from("Bob")), "#FF0000");
        zone.boundary = Some(Boundary(vec![vec![
            (4.0, 52.0),
            (4.1, 52.0),
            (4.1, 52.1),
        ]]));
        zone
    }

    #[test]
    fn test_feature_properties_and_closed_ring() {
        let collection =
            feature_collection(&[fitted_zone()]).expect("test invariant failed: collection");
        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];
        let properties = feature.properties.as_ref().expect("properties present");
        assert_eq!(properties["start"], json!(1000));
        assert_eq!(properties["end"], json!(1099));
        assert_eq!(properties["tooltip"], json!("1000 t/m 1099: Alice & Bob"));
        assert_eq!(properties["colour"], json!("#FF0000"));

        let geometry = feature.geometry.as_ref().expect("geometry present");
        match &geometry.value {
            Value::Polygon(rings) => {
                assert_eq!(rings.len(), 1);
                assert_eq!(rings[0].len(), 4);
                assert_eq!(rings[0].first(), rings[0].last());
            }
            other => panic!("expected a Polygon geometry, found {other:?}"),
        }
    }

    #[test]
    fn test_multi_part_boundary_is_emitted_as_extra_rings() {
        let mut zone = fitted_zone();
        zone.boundary = Some(Boundary(vec![
            vec![(4.0, 52.0), (4.1, 52.0), (4.1, 52.1)],
            vec![(9.0, 55.0), (9.1, 55.0), (9.1, 55.1)],
        ]));
        let collection = feature_collection(&[zone]).expect("test invariant failed: collection");
        let geometry = collection.features[0]
            .geometry
            .as_ref()
            .expect("geometry present");
        match &geometry.value {
            Value::Polygon(rings) => assert_eq!(rings.len(), 2),
            other => panic!("expected a Polygon geometry, found {other:?}"),
        }
    }

    #[test]
    fn test_zone_without_boundary_is_an_error() {
        let zone = Zone::new(1000, 1099, "Alice", None, "#FF0000");
        assert!(matches!(
            feature_collection(&[zone]),
            Err(OutputError::MissingBoundary(_))
        ));
    }
}

use super::{BoundaryAlgorithm, FitError};
use crate::model::zone::{Boundary, Zone};

/// fits the boundary for one zone. the zone's point cloud is consumed: the
/// fitted rings are attached as the boundary and the raw points are removed
/// from the descriptor so cache and output payloads stay small.
pub fn fit_zone(mut zone: Zone, algorithm: &BoundaryAlgorithm) -> Result<Zone, FitError> {
    let cloud = zone
        .points
        .take()
        .ok_or_else(|| FitError::NoPointCloud(zone.cache_key()))?;
    let result = algorithm.run(&cloud.0)?;
    log::debug!(
        "fit zone {} from {} points in {} attempts ({} parts)",
        zone.cache_key(),
        cloud.0.len(),
        result.attempts,
        result.rings.len()
    );
    zone.boundary = Some(Boundary(result.rings));
    Ok(zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::zone::PointCloud;

    #[test]
    fn test_fit_attaches_boundary_and_strips_points() {
        let mut zone = Zone::new(1000, 1099, "Alice", None, "#FF0000");
        let mut points = Vec::new();
        for i in 0..5 {
            for j in 0..5 {
                points.push((4.0 + i as f64 * 0.001, 52.0 + j as f64 * 0.001));
            }
        }
        zone.points = Some(PointCloud(points));
        let fitted = fit_zone(zone, &BoundaryAlgorithm::default())
            .expect("test invariant failed: fit should succeed");
        assert!(fitted.points.is_none());
        let boundary = fitted.boundary.expect("boundary attached");
        assert_eq!(boundary.0.len(), 1);
        assert!(boundary.0[0].len() >= 3);
    }

    #[test]
    fn test_missing_point_cloud_is_an_error() {
        let zone = Zone::new(1000, 1099, "Alice", None, "#FF0000");
        assert!(matches!(
            fit_zone(zone, &BoundaryAlgorithm::default()),
            Err(FitError::NoPointCloud(_))
        ));
    }
}

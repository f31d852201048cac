use super::{ClassifyError, PostalCodeMatcher};
use crate::model::source::PointSource;
use crate::model::zone::{Coord, PointCloud, Zone};

/// counts from one classification pass
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassifySummary {
    pub assigned: usize,
    pub dropped: usize,
}

/// streams the point source exactly once and appends each valid point to the
/// first zone in list order whose range contains its postal code prefix.
/// list order is the priority order for overlapping ranges. points that
/// match no range are dropped. zones are mutated in place: every supplied
/// zone ends up with a point cloud attached, possibly empty.
///
/// errs with [`ClassifyError::NoPointsFound`] when a non-empty zone list
/// receives no points at all.
pub fn classify_points<S: PointSource + ?Sized>(
    source: &S,
    tag: &str,
    zones: &mut [Zone],
) -> Result<ClassifySummary, ClassifyError> {
    let matcher = PostalCodeMatcher::new()?;
    let ranges: Vec<(u32, u32)> = zones.iter().map(|z| (z.start, z.end)).collect();
    let mut clouds: Vec<Vec<Coord>> = vec![Vec::new(); ranges.len()];
    let mut summary = ClassifySummary::default();

    source.for_each_tagged(tag, &mut |value, coord| {
        let Some(code) = matcher.code(value) else {
            summary.dropped += 1;
            return;
        };
        match ranges.iter().position(|(s, e)| *s <= code && code <= *e) {
            Some(index) => {
                clouds[index].push(coord);
                summary.assigned += 1;
            }
            None => summary.dropped += 1,
        }
    })?;

    if !zones.is_empty() && summary.assigned == 0 {
        return Err(ClassifyError::NoPointsFound);
    }
    for (zone, cloud) in zones.iter_mut().zip(clouds) {
        zone.points = Some(PointCloud(cloud));
    }
    log::info!(
        "classified {} points into {} zones ({} dropped)",
        summary.assigned,
        zones.len(),
        summary.dropped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::source::SourceError;

    /// a point source backed by an in-memory list of (tag value, coord) rows
    pub struct VecSource {
        pub rows: Vec<(String, Coord)>,
    }

    impl PointSource for VecSource {
        fn for_each_tagged(
            &self,
            _tag: &str,
            callback: &mut dyn FnMut(&str, Coord),
        ) -> Result<(), SourceError> {
            for (value, coord) in &self.rows {
                callback(value, *coord);
            }
            Ok(())
        }
    }

    fn zone(start: u32, end: u32, owner: &str) -> Zone {
        Zone::new(start, end, owner, None, "#FF0000")
    }

    #[test]
    fn test_points_bucket_into_matching_range_and_rest_drop() {
        let source = VecSource {
            rows: vec![
                (String::from("1005AB"), (4.1, 52.0)),
                (String::from("1090ZZ"), (4.9, 52.9)),
                (String::from("2000AA"), (5.5, 53.0)),
            ],
        };
        let mut zones = vec![zone(1000, 1099, "Alice")];
        let summary = classify_points(&source, "addr:postcode", &mut zones)
            .expect("test invariant failed: classification should succeed");
        assert_eq!(summary.assigned, 2);
        assert_eq!(summary.dropped, 1);
        let cloud = zones[0].points.as_ref().expect("points attached");
        assert_eq!(cloud.0, vec![(4.1, 52.0), (4.9, 52.9)]);
    }

    #[test]
    fn test_first_matching_range_wins_for_overlapping_zones() {
        let source = VecSource {
            rows: vec![(String::from("1050XX"), (4.5, 52.3))],
        };
        let mut zones = vec![zone(1000, 1099, "Alice"), zone(1040, 1060, "Bob")];
        classify_points(&source, "addr:postcode", &mut zones)
            .expect("test invariant failed: classification should succeed");
        assert_eq!(
            zones[0].points.as_ref().expect("points attached").0.len(),
            1
        );
        assert!(zones[1].points.as_ref().expect("points attached").0.is_empty());
    }

    #[test]
    fn test_invalid_tag_values_are_dropped() {
        let source = VecSource {
            rows: vec![
                (String::from("not a code"), (4.1, 52.0)),
                (String::from("1005AB"), (4.2, 52.1)),
            ],
        };
        let mut zones = vec![zone(1000, 1099, "Alice")];
        let summary = classify_points(&source, "addr:postcode", &mut zones)
            .expect("test invariant failed: classification should succeed");
        assert_eq!(summary.assigned, 1);
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn test_no_points_at_all_is_terminal() {
        let source = VecSource {
            rows: vec![(String::from("9999ZZ"), (4.1, 52.0))],
        };
        let mut zones = vec![zone(1000, 1099, "Alice")];
        let result = classify_points(&source, "addr:postcode", &mut zones);
        assert!(matches!(result, Err(ClassifyError::NoPointsFound)));
    }
}

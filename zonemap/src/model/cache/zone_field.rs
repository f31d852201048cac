use crate::model::zone::{Boundary, PointCloud, Zone};
use serde::{de::DeserializeOwned, Serialize};

/// a zone descriptor field that can be cached by range key. implementations
/// copy values between a [`Zone`] and the on-disk table.
pub trait ZoneField: Serialize + DeserializeOwned + Clone {
    /// field name used in log messages
    const NAME: &'static str;

    fn get(zone: &Zone) -> Option<&Self>;
    fn set(zone: &mut Zone, value: Self);
    /// value written to the table when the descriptor field is absent
    fn empty() -> Self;
}

impl ZoneField for PointCloud {
    const NAME: &'static str = "point cloud";

    fn get(zone: &Zone) -> Option<&Self> {
        zone.points.as_ref()
    }

    fn set(zone: &mut Zone, value: Self) {
        zone.points = Some(value);
    }

    fn empty() -> Self {
        PointCloud(Vec::new())
    }
}

impl ZoneField for Boundary {
    const NAME: &'static str = "boundary";

    fn get(zone: &Zone) -> Option<&Self> {
        zone.boundary.as_ref()
    }

    fn set(zone: &mut Zone, value: Self) {
        zone.boundary = Some(value);
    }

    fn empty() -> Self {
        Boundary(Vec::new())
    }
}

use super::{CacheError, ZoneField};
use crate::model::zone::Zone;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// a flat on-disk table mapping zone range keys ("{start}-{end}") to one
/// cached descriptor field. the table is loaded fully at open and rewritten
/// in full on every update; the rewrite goes through a temp file and a
/// rename so a crash never leaves a truncated table behind.
pub struct ZoneCache<F: ZoneField> {
    filepath: PathBuf,
    table: HashMap<String, F>,
}

impl<F: ZoneField> ZoneCache<F> {
    /// loads the table at `filepath`. a missing file is an empty cache; a
    /// file that fails to decode is treated as empty and rewritten on the
    /// next update.
    pub fn open<P: AsRef<Path>>(filepath: P) -> Result<ZoneCache<F>, CacheError> {
        let filepath = filepath.as_ref().to_path_buf();
        let table = if filepath.exists() {
            let contents = fs::read_to_string(&filepath)
                .map_err(|e| CacheError::ReadError(filepath.display().to_string(), e))?;
            match serde_json::from_str::<HashMap<String, F>>(&contents) {
                Ok(table) => table,
                Err(e) => {
                    log::warn!(
                        "{} cache at {} failed to decode ({e}); starting empty",
                        F::NAME,
                        filepath.display()
                    );
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };
        log::info!(
            "loaded {} {} entries from {}",
            table.len(),
            F::NAME,
            filepath.display()
        );
        Ok(ZoneCache { filepath, table })
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// splits zones into (cached, uncached). cached zones get the stored
    /// value copied onto their descriptor field. the table is not mutated.
    pub fn partition(&self, zones: Vec<Zone>) -> (Vec<Zone>, Vec<Zone>) {
        let mut cached = Vec::new();
        let mut uncached = Vec::new();
        for mut zone in zones {
            match self.table.get(&zone.cache_key()) {
                Some(value) => {
                    F::set(&mut zone, value.clone());
                    cached.push(zone);
                }
                None => uncached.push(zone),
            }
        }
        (cached, uncached)
    }

    /// writes the zone's current field value into the table (an absent field
    /// is stored as the empty value) and persists the full table.
    pub fn upsert(&mut self, zone: &Zone) -> Result<(), CacheError> {
        self.table
            .insert(zone.cache_key(), F::get(zone).cloned().unwrap_or_else(F::empty));
        self.persist()
    }

    /// one table write for many zones; last write wins per key
    pub fn upsert_all(&mut self, zones: &[Zone]) -> Result<(), CacheError> {
        for zone in zones {
            self.table
                .insert(zone.cache_key(), F::get(zone).cloned().unwrap_or_else(F::empty));
        }
        self.persist()
    }

    fn persist(&self) -> Result<(), CacheError> {
        let contents = serde_json::to_string(&self.table)
            .map_err(|e| CacheError::EncodeError(self.filepath.display().to_string(), e))?;
        let tmp = self.filepath.with_extension("tmp");
        fs::write(&tmp, contents)
            .map_err(|e| CacheError::WriteError(tmp.display().to_string(), e))?;
        fs::rename(&tmp, &self.filepath)
            .map_err(|e| CacheError::WriteError(self.filepath.display().to_string(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::zone::{Boundary, PointCloud};

    fn zone(start: u32, end: u32) -> Zone {
        Zone::new(start, end, "Alice", None, "#FF0000")
    }

    #[test]
    fn test_missing_file_is_an_empty_cache() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let cache: ZoneCache<PointCloud> = ZoneCache::open(dir.path().join("points.json"))
            .expect("open should tolerate a missing file");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_empty_cache() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("points.json");
        std::fs::write(&path, "{ not json").expect("test invariant failed: write");
        let cache: ZoneCache<PointCloud> =
            ZoneCache::open(&path).expect("open should tolerate a corrupt file");
        assert!(cache.is_empty());
    }

    #[test]
    fn test_partition_is_a_disjoint_cover() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("points.json");
        let mut cache: ZoneCache<PointCloud> =
            ZoneCache::open(&path).expect("test invariant failed: open");
        let mut known = zone(1000, 1099);
        known.points = Some(PointCloud(vec![(4.1, 52.0)]));
        cache.upsert(&known).expect("test invariant failed: upsert");

        let input = vec![zone(1000, 1099), zone(2000, 2099)];
        let (cached, uncached) = cache.partition(input);
        assert_eq!(cached.len(), 1);
        assert_eq!(uncached.len(), 1);
        assert_eq!(cached[0].cache_key(), "1000-1099");
        assert_eq!(uncached[0].cache_key(), "2000-2099");
        assert_eq!(
            cached[0].points.as_ref().expect("value copied onto zone").0,
            vec![(4.1, 52.0)]
        );
    }

    #[test]
    fn test_upsert_survives_reopen() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("boundaries.json");
        let ring = vec![(4.0, 52.0), (4.1, 52.0), (4.1, 52.1)];
        {
            let mut cache: ZoneCache<Boundary> =
                ZoneCache::open(&path).expect("test invariant failed: open");
            let mut z = zone(1000, 1099);
            z.boundary = Some(Boundary(vec![ring.clone()]));
            cache.upsert(&z).expect("test invariant failed: upsert");
        }
        let cache: ZoneCache<Boundary> =
            ZoneCache::open(&path).expect("test invariant failed: reopen");
        let (cached, uncached) = cache.partition(vec![zone(1000, 1099)]);
        assert!(uncached.is_empty());
        assert_eq!(
            cached[0].boundary.as_ref().expect("boundary copied").0,
            vec![ring]
        );
    }

    #[test]
    fn test_last_write_wins_per_key() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("points.json");
        let mut cache: ZoneCache<PointCloud> =
            ZoneCache::open(&path).expect("test invariant failed: open");
        let mut first = zone(1000, 1099);
        first.points = Some(PointCloud(vec![(1.0, 1.0)]));
        let mut second = zone(1000, 1099);
        second.points = Some(PointCloud(vec![(2.0, 2.0)]));
        cache
            .upsert_all(&[first, second])
            .expect("test invariant failed: upsert_all");
        let (cached, _) = cache.partition(vec![zone(1000, 1099)]);
        assert_eq!(
            cached[0].points.as_ref().expect("points copied").0,
            vec![(2.0, 2.0)]
        );
    }

    #[test]
    fn test_absent_field_is_stored_as_empty() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let path = dir.path().join("points.json");
        let mut cache: ZoneCache<PointCloud> =
            ZoneCache::open(&path).expect("test invariant failed: open");
        cache
            .upsert(&zone(1000, 1099))
            .expect("test invariant failed: upsert");
        assert!(cache.contains_key("1000-1099"));
        let (cached, _) = cache.partition(vec![zone(1000, 1099)]);
        assert!(cached[0].points.as_ref().expect("points copied").0.is_empty());
    }
}

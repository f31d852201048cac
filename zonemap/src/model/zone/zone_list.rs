use super::Zone;
use crate::model::ZoneCliError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// the zone list document persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneList {
    pub zones: Vec<Zone>,
}

impl ZoneList {
    pub fn read(path: &Path) -> Result<ZoneList, ZoneCliError> {
        let contents = fs::read_to_string(path)?;
        let list = serde_json::from_str(&contents)?;
        Ok(list)
    }

    pub fn write(&self, path: &Path) -> Result<(), ZoneCliError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

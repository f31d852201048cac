use crate::model::{
    roster::{flatten_zones, parse_roster, Palette},
    zone::ZoneList,
    ZoneCliError,
};
use itertools::Itertools;
use std::fs;
use std::path::Path;

/// parses the owner roster text and writes the flattened zone list document
pub fn run(roster_file: &String, output_file: &String) -> Result<(), ZoneCliError> {
    let text = fs::read_to_string(roster_file)?;
    let mut palette = Palette::default();
    let owners = parse_roster(&text, &mut palette)?;
    if owners.is_empty() {
        return Err(ZoneCliError::NoZonesFound(format!(
            "no roster lines matched in {roster_file}"
        )));
    }
    log::info!(
        "parsed owners: {}",
        owners.iter().map(|o| o.name.as_str()).join(", ")
    );

    let list = ZoneList {
        zones: flatten_zones(&owners),
    };
    list.write(Path::new(output_file))?;
    eprintln!("wrote {} zones to {}", list.zones.len(), output_file);
    Ok(())
}

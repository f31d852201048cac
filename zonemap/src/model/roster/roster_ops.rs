use super::{Palette, RosterError};
use crate::model::zone::Zone;
use regex::Regex;
use std::collections::HashMap;

/// a roster line: "<start> t/m <end> - <owner>[&<co-owner>]"
const LINE_PATTERN: &str = r"(\d+) t/m (\d+) - ([^&]+)(&[^&]+)?";
/// locale marker tokens removed before line parsing
const LOCALE_MARKER_PATTERN: &str = r"\si\.o\.?";
const ZERO_WIDTH_SPACE: &str = "\u{200b}";

/// one range entry belonging to an owner
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRange {
    pub start: u32,
    pub end: u32,
    pub co_owner: Option<String>,
}

/// one owner parsed from the roster with all of their range entries
#[derive(Debug, Clone, PartialEq)]
pub struct RosterOwner {
    pub name: String,
    pub colour: String,
    pub ranges: Vec<RosterRange>,
}

/// parses the free-text roster into owners. lines that do not match the
/// roster pattern are boilerplate and skipped. owner number n (1-based, in
/// order of first appearance) gets the palette colour keyed "n", falling
/// back to draining an unused entry when no such key exists.
pub fn parse_roster(text: &str, palette: &mut Palette) -> Result<Vec<RosterOwner>, RosterError> {
    let marker =
        Regex::new(LOCALE_MARKER_PATTERN).map_err(|e| RosterError::InvalidPattern(e.to_string()))?;
    let line = Regex::new(LINE_PATTERN).map_err(|e| RosterError::InvalidPattern(e.to_string()))?;

    let cleaned = marker.replace_all(text, "").replace(ZERO_WIDTH_SPACE, "");

    let mut owners: Vec<RosterOwner> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    for row in cleaned.lines() {
        let Some(caps) = line.captures(row.trim()) else {
            log::debug!("skipping roster line: {row}");
            continue;
        };
        let (Ok(start), Ok(end)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>()) else {
            log::debug!("skipping roster line with out-of-range numbers: {row}");
            continue;
        };
        if start > end {
            log::warn!("skipping inverted range {start}-{end} in roster");
            continue;
        }
        let name = caps[3].trim().to_string();
        let co_owner = caps
            .get(4)
            .map(|m| m.as_str()[1..].trim().to_string())
            .filter(|s| !s.is_empty());

        let index = match index_of.get(&name) {
            Some(i) => *i,
            None => {
                let number = owners.len() + 1;
                let colour = palette.assign(&number.to_string())?;
                owners.push(RosterOwner {
                    name: name.clone(),
                    colour,
                    ranges: Vec::new(),
                });
                index_of.insert(name, owners.len() - 1);
                owners.len() - 1
            }
        };
        owners[index].ranges.push(RosterRange {
            start,
            end,
            co_owner,
        });
    }
    Ok(owners)
}

/// flattens owners into one zone per range entry, duplicating the owner
/// fields onto each. a range key already produced by an earlier entry keeps
/// the first zone's identity; the later owner becomes a co-owner annotation
/// on it instead (first annotation wins).
pub fn flatten_zones(owners: &[RosterOwner]) -> Vec<Zone> {
    let mut zones: Vec<Zone> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for owner in owners {
        for range in &owner.ranges {
            let key = format!("{}-{}", range.start, range.end);
            match seen.get(&key) {
                Some(i) => {
                    let existing = &mut zones[*i];
                    if existing.co_owner.is_none() && existing.owner != owner.name {
                        existing.co_owner = Some(owner.name.clone());
                    }
                }
                None => {
                    seen.insert(key, zones.len());
                    zones.push(Zone::new(
                        range.start,
                        range.end,
                        &owner.name,
                        range.co_owner.clone(),
                        &owner.colour,
                    ));
                }
            }
        }
    }
    zones
}

use super::RosterError;
use std::collections::HashSet;

/// display colour allocation for roster owners: an ordered list of keyed
/// palette entries plus the set of indices already handed out. keyed lookups
/// and fallback draining both mark entries as assigned, so no colour is
/// assigned twice within one run.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(String, String)>,
    assigned: HashSet<usize>,
}

impl Default for Palette {
    /// the sixteen display colours, keyed by owner definition order
    fn default() -> Palette {
        let entries = [
            ("1", "#FF0000"),  // red
            ("2", "#00FF00"),  // green
            ("3", "#0000FF"),  // blue
            ("4", "#FFA500"),  // orange
            ("5", "#800080"),  // purple
            ("6", "#FFFF00"),  // yellow
            ("7", "#00FFFF"),  // cyan
            ("8", "#FF00FF"),  // magenta
            ("9", "#008000"),  // dark green
            ("10", "#800000"), // maroon
            ("11", "#FFD700"), // gold
            ("12", "#8A2BE2"), // blue violet
            ("13", "#00FF7F"), // spring green
            ("14", "#FF6347"), // tomato
            ("15", "#40E0D0"), // turquoise
            ("16", "#000080"), // dark blue
        ];
        Palette::new(
            entries
                .iter()
                .map(|(k, v)| (String::from(*k), String::from(*v)))
                .collect(),
        )
    }
}

impl Palette {
    pub fn new(entries: Vec<(String, String)>) -> Palette {
        Palette {
            entries,
            assigned: HashSet::new(),
        }
    }

    /// assigns the colour stored under `key`, unless that entry was already
    /// handed out
    pub fn assign_keyed(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        if !self.assigned.insert(index) {
            return None;
        }
        Some(self.entries[index].1.clone())
    }

    /// drains the highest-index colour not yet assigned
    pub fn assign_any(&mut self) -> Option<String> {
        let index = (0..self.entries.len())
            .rev()
            .find(|i| !self.assigned.contains(i))?;
        self.assigned.insert(index);
        Some(self.entries[index].1.clone())
    }

    /// keyed assignment with fallback draining
    pub fn assign(&mut self, key: &str) -> Result<String, RosterError> {
        self.assign_keyed(key)
            .or_else(|| self.assign_any())
            .ok_or(RosterError::PaletteExhausted)
    }

    pub fn remaining(&self) -> usize {
        self.entries.len() - self.assigned.len()
    }
}

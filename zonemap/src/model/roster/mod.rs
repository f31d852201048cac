mod palette;
mod roster_error;
mod roster_ops;

pub use palette::Palette;
pub use roster_error::RosterError;
pub use roster_ops::{flatten_zones, parse_roster, RosterOwner, RosterRange};

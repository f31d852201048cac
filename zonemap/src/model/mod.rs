pub mod cache;
pub mod classify;
pub mod fit;
pub mod output;
pub mod roster;
pub mod source;
pub mod zone;
mod zone_cli_error;

pub use zone_cli_error::ZoneCliError;

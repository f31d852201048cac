pub mod boundaries;
pub mod roster;
pub mod serve;

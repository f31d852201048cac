use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("internal error building roster regex: {0}")]
    InvalidPattern(String),
    #[error("display colour palette exhausted: the roster defines more owners than palette entries")]
    PaletteExhausted,
}

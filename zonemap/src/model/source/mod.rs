mod point_source;
mod source_error;

pub use point_source::PointSource;
pub use source_error::SourceError;

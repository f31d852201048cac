use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitError {
    #[error("cannot fit a boundary from {0} points; at least 3 required")]
    NotEnoughPoints(usize),
    #[error("zone {0} has no point cloud to fit")]
    NoPointCloud(String),
    #[error("boundary fit over {0} points produced no closed ring")]
    DegenerateBoundary(usize),
    #[error("invalid boundary algorithm configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failure triangulating point cloud: {0}")]
    TriangulationError(String),
}

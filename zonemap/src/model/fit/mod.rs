mod alpha_shape;
mod boundary_algorithm;
mod fit_error;
mod fit_ops;

pub use alpha_shape::alpha_shape;
pub use boundary_algorithm::{BoundaryAlgorithm, FitResult};
pub use fit_error::FitError;
pub use fit_ops::fit_zone;

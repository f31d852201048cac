mod classify_error;
mod classify_ops;
mod postal_code;

pub use classify_error::ClassifyError;
pub use classify_ops::{classify_points, ClassifySummary};
pub use postal_code::PostalCodeMatcher;

mod app;

pub use app::{run, run_with_source};

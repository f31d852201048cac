use crate::model::ZoneCliError;
use std::path::PathBuf;

/// serves `directory` over HTTP so the generated map can be inspected in a
/// browser. blocks until interrupted.
pub fn run(directory: &String, port: u16) -> Result<(), ZoneCliError> {
    let dir = PathBuf::from(directory);
    if !dir.is_dir() {
        return Err(ZoneCliError::ConfigurationError(format!(
            "{directory} is not a directory"
        )));
    }
    let runtime = tokio::runtime::Runtime::new()?;
    eprintln!("serving {directory} at http://localhost:{port}/map.html (ctrl-c to stop)");
    runtime.block_on(async move {
        warp::serve(warp::fs::dir(dir)).run(([127, 0, 0, 1], port)).await;
    });
    Ok(())
}

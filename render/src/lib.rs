#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
mod axis;
mod error;
mod performance;
mod series;
mod speedup;
mod style;
mod summary_table;

pub use axis::LOG_FLOOR_MILLIS;
pub use error::RenderError;
pub use performance::render_performance;
pub use speedup::render_speedup;
pub use style::Scale;
pub use summary_table::render_summary_table;

//---------------------------------------------------------------------------------------------------- Private
/// Create the parent directory of `path` if it does not exist.
fn create_parent_dir(path: &std::path::Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

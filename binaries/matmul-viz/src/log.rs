use std::io;

use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::FmtSubscriber;

/// Initializes the `tracing` logger.
///
/// Logs go to stderr, stdout is left for the summary.
pub(crate) fn init_logger(level: LevelFilter) {
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    info!("Log level: {level}");
}

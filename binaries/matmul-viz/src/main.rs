#![doc = include_str!("../README.md")]

mod config;
mod constants;
mod log;
mod print;
mod run;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing::debug;

use crate::constants::VERSION;

/// What `main()` does:
/// 1. Read the args and config
/// 2. Load the benchmark CSV and derive speedups/summaries
/// 3. Render every image
/// 4. Print the summary
fn main() -> ExitCode {
    let args = config::Args::parse();

    match args.do_quick_requests() {
        Ok(true) => return ExitCode::SUCCESS,
        Ok(false) => (),
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    }

    let config = match config::read_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    log::init_logger(config.tracing.level);
    debug!("matmul-viz {VERSION}, {config:?}");

    run::run(&config, &mut io::stdout().lock()).into()
}

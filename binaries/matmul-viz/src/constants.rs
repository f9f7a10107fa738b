//! General constants used throughout `matmul-viz`.

use const_format::formatcp;

/// `matmul-viz`'s semantic version (`MAJOR.MINOR.PATCH`) as string.
pub const VERSION: &str = clap::crate_version!();

/// The config file looked for in the current directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "matmul-viz.toml";

/// Where images are written.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "results";

/// The benchmark CSV.
pub const DEFAULT_INPUT: &str = formatcp!("{DEFAULT_OUTPUT_DIRECTORY}/output_data.csv");

/// The implementation speedups are relative to.
pub const DEFAULT_BASELINE: &str = "Classical";

/// Printed after the input was not found.
pub const MISSING_INPUT_HINT: &str = "Please run the benchmark first to generate the data.";

/// Separates the sections of the console summary.
pub const RULE: &str = "============================================================";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn defaults() {
        assert_eq!(DEFAULT_INPUT, "results/output_data.csv");
        assert_eq!(RULE.len(), 60);
        assert!(RULE.chars().all(|c| c == '='));
    }
}

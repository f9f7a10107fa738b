use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::config::{Config, SummaryFormat};

/// matmul-viz args.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// The PATH of the `matmul-viz` config file.
    #[arg(long)]
    pub config_file: Option<PathBuf>,
    /// The benchmark CSV to read.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// The directory images are written to, created if missing.
    #[arg(long)]
    pub output_directory: Option<PathBuf>,
    /// The implementation speedups are relative to.
    #[arg(long)]
    pub baseline: Option<String>,
    /// The console summary format: "text" or "json".
    #[arg(long)]
    pub format: Option<SummaryFormat>,
    /// The minimum log level: "off", "error", "warn", "info", "debug", "trace".
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
    /// Generate a config file and print it to stdout.
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// Complete any quick requests asked for in [`Args`].
    ///
    /// Returns `true` if one was completed and nothing else should run.
    ///
    /// # Errors
    /// Errors if the request could not be completed.
    pub fn do_quick_requests(&self) -> anyhow::Result<bool> {
        if self.generate_config {
            println!("{}", Config::documented_config()?);
            return Ok(true);
        }

        Ok(false)
    }

    /// Apply the [`Args`] to the given [`Config`].
    pub fn apply_args(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input.clone_from(input);
        }
        if let Some(output_directory) = &self.output_directory {
            config.output_directory.clone_from(output_directory);
        }
        if let Some(baseline) = &self.baseline {
            config.baseline.clone_from(baseline);
        }
        if let Some(format) = self.format {
            config.summary.format = format;
        }
        if let Some(level) = self.log_level {
            config.tracing.level = level;
        }

        config
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_args_is_default_config() {
        let args = Args::try_parse_from(["matmul-viz"]).unwrap();
        assert_eq!(args.apply_args(Config::default()), Config::default());
    }

    #[test]
    fn args_override_config() {
        let args = Args::try_parse_from([
            "matmul-viz",
            "--input",
            "bench.csv",
            "--output-directory",
            "out",
            "--baseline",
            "Naive",
            "--format",
            "json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let config = args.apply_args(Config::default());

        assert_eq!(config.input, PathBuf::from("bench.csv"));
        assert_eq!(config.output_directory, PathBuf::from("out"));
        assert_eq!(config.baseline, "Naive");
        assert_eq!(config.summary.format, SummaryFormat::Json);
        assert_eq!(config.tracing.level, LevelFilter::DEBUG);
        assert_eq!(config.render, Config::default().render);
    }

    #[test]
    fn invalid_format() {
        assert!(Args::try_parse_from(["matmul-viz", "--format", "yaml"]).is_err());
    }
}

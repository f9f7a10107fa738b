//! matmul-viz config
use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASELINE, DEFAULT_CONFIG_FILE_NAME, DEFAULT_INPUT, DEFAULT_OUTPUT_DIRECTORY,
};

mod args;
mod render;
mod summary;
mod tracing_config;

#[macro_use]
mod macros;

pub use args::Args;
use render::RenderConfig;
pub use summary::SummaryFormat;
use summary::SummaryConfig;
use tracing_config::TracingConfig;

/// Header to put at the start of the generated config file.
const HEADER: &str = r"## matmul-viz config
##
## All these config values can be set to
## their default by commenting them out with '#'.
##
## Command line arguments override these values.

";

/// Reads the config file and applies `args` over it.
///
/// # Errors
/// Errors if `--config-file` was given and could not be read, or if
/// any config file that was found is not a valid config.
pub fn read_config(args: &Args) -> anyhow::Result<Config> {
    let config = if let Some(config_file) = &args.config_file {
        Config::read_from_path(config_file)?
    } else {
        let path = std::env::current_dir()?.join(DEFAULT_CONFIG_FILE_NAME);
        match Config::read_from_path(&path) {
            Ok(config) => config,
            Err(e) if is_not_found(&e) => {
                tracing::debug!("No config at {}, using the default", path.display());
                Config::default()
            }
            Err(e) => return Err(e),
        }
    };

    Ok(args.apply_args(config))
}

/// If `e` is a missing file.
fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

config_struct! {
    /// The config for all of matmul-viz.
    #[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields, default)]
    pub struct Config {
        /// The benchmark CSV to read.
        ///
        /// Type         | Path
        /// Examples     | "results/output_data.csv", "bench.csv"
        pub input: PathBuf,

        /// The directory images are written to.
        ///
        /// Created if it does not exist.
        ///
        /// Type         | Path
        /// Examples     | "results", "/tmp/plots"
        pub output_directory: PathBuf,

        /// The implementation speedups are relative to.
        ///
        /// Exactly 1 row of the input must have this name.
        ///
        /// Type         | String
        /// Examples     | "Classical", "Naive"
        pub baseline: String,

        #[child = true]
        /// Configuration for the console summary.
        pub summary: SummaryConfig,

        #[child = true]
        /// Configuration for the images.
        pub render: RenderConfig,

        #[child = true]
        /// Configuration for matmul-viz's logging system, tracing.
        pub tracing: TracingConfig,
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.into(),
            output_directory: DEFAULT_OUTPUT_DIRECTORY.into(),
            baseline: DEFAULT_BASELINE.to_string(),
            summary: Default::default(),
            render: Default::default(),
            tracing: Default::default(),
        }
    }
}

impl Config {
    /// Returns a default [`Config`], with doc comments.
    ///
    /// # Errors
    /// Errors if the default config could not be serialized.
    pub fn documented_config() -> anyhow::Result<String> {
        let str = toml::to_string_pretty(&Self::default())?;
        let mut doc = toml_edit::DocumentMut::from_str(&str)?;
        Self::write_docs(doc.as_table_mut());
        Ok(format!("{HEADER}{doc}"))
    }

    /// Attempts to read a config file in [`toml`] format from the given [`Path`].
    ///
    /// # Errors
    ///
    /// Will return an [`Err`] if the file cannot be read or if the file is not a valid [`toml`] config.
    fn read_from_path(file: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = file.as_ref();
        let file_text = read_to_string(file)
            .with_context(|| format!("Failed to read config file at: {}", file.display()))?;

        let config = toml::from_str(&file_text)
            .with_context(|| format!("Failed to parse config file at: {}", file.display()))?;
        tracing::info!("Using config at: {}", file.display());

        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use toml::from_str;

    use super::*;

    #[test]
    fn documented_config() {
        let str = Config::documented_config().unwrap();
        let conf: Config = from_str(&str).unwrap();

        assert_eq!(conf, Config::default());
        assert!(str.contains("## The benchmark CSV to read."));
        assert!(str.contains("[render]"));
    }

    #[test]
    fn partial_config() {
        let conf: Config = from_str(
            r#"
            baseline = "Naive"

            [render]
            scale = 200
            "#,
        )
        .unwrap();

        assert_eq!(conf.baseline, "Naive");
        assert_eq!(conf.render.scale, 200);
        assert_eq!(conf.input, Config::default().input);
        assert_eq!(conf.summary, Config::default().summary);
    }

    #[test]
    fn unknown_field() {
        assert!(from_str::<Config>("colour = \"red\"").is_err());
    }

    #[test]
    fn config_file_arg() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "output_directory = \"plots\"").unwrap();

        let args = Args {
            config_file: Some(file.path().to_path_buf()),
            baseline: Some("Naive".to_string()),
            ..Default::default()
        };
        let config = read_config(&args).unwrap();

        assert_eq!(config.output_directory, PathBuf::from("plots"));
        assert_eq!(config.baseline, "Naive");
    }

    #[test]
    fn missing_config_file_arg() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            config_file: Some(dir.path().join("missing.toml")),
            ..Default::default()
        };

        assert!(read_config(&args).is_err());
    }
}

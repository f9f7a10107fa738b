//! The load, compute, render, print pipeline.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::{error, info, instrument};

use matmul_viz_render::{render_performance, render_speedup, render_summary_table, RenderError};
use matmul_viz_table::{
    load, speedups, BenchmarkSummary, BenchmarkTable, LoadError, SpeedupSeries, SummaryTable,
    TableError,
};

use crate::{config::Config, constants::MISSING_INPUT_HINT, print};

//---------------------------------------------------------------------------------------------------- Artifact
/// An image written by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub(crate) enum Artifact {
    #[strum(to_string = "Performance plot")]
    Performance,
    #[strum(to_string = "Speedup plot")]
    Speedup,
    #[strum(to_string = "Summary table")]
    SummaryTable,
}

impl Artifact {
    /// Where `config` says this is written.
    fn path(self, config: &Config) -> PathBuf {
        let dir = &config.output_directory;
        match self {
            Self::Performance => config.render.performance_path(dir),
            Self::Speedup => config.render.speedup_path(dir),
            Self::SummaryTable => config.render.summary_path(dir),
        }
    }
}

//---------------------------------------------------------------------------------------------------- Outcome
/// How [`run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Every image and the summary were written.
    Success,
    /// The input does not exist, nothing was written.
    MissingInput,
    /// The input was invalid or something failed to write.
    Failure,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success | Outcome::MissingInput => Self::SUCCESS,
            Outcome::Failure => Self::FAILURE,
        }
    }
}

//---------------------------------------------------------------------------------------------------- Run
/// Everything derived from the table before rendering.
struct Derived {
    series: Vec<SpeedupSeries>,
    summary: BenchmarkSummary,
    table: SummaryTable,
}

impl Derived {
    /// Derive everything from `table`.
    ///
    /// Fails before any image is written if the baseline is invalid.
    fn new(table: &BenchmarkTable, config: &Config) -> Result<Self, TableError> {
        Ok(Self {
            series: speedups(table, &config.baseline)?,
            summary: BenchmarkSummary::new(table, &config.baseline)?,
            table: SummaryTable::new(table, config.render.table_min_size()),
        })
    }
}

/// Load the input, write every [`Artifact`] and print the summary to `out`.
///
/// Each [`Artifact`] is rendered even if an earlier one failed.
#[instrument(skip_all, fields(input = %config.input.display()))]
pub(crate) fn run(config: &Config, out: &mut impl Write) -> Outcome {
    match try_run(config, out) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Failed to write output: {e}");
            Outcome::Failure
        }
    }
}

/// [`run`], stopping if `out` cannot be written to.
fn try_run(config: &Config, out: &mut impl Write) -> io::Result<Outcome> {
    let format = config.summary.format;

    print::progress(format, out, "Loading benchmark data...")?;
    let table = match load(&config.input) {
        Ok(table) => table,
        Err(LoadError::NotFound(path)) => {
            print::progress(format, out, &format!("Error: {} not found!", path.display()))?;
            print::progress(format, out, MISSING_INPUT_HINT)?;
            return Ok(Outcome::MissingInput);
        }
        Err(e) => {
            error!("Failed to load benchmark data: {e}");
            eprintln!("Error: {e}");
            return Ok(Outcome::Failure);
        }
    };
    info!(
        rows = table.rows().len(),
        sizes = table.sizes().len(),
        "loaded benchmark data"
    );

    let derived = match Derived::new(&table, config) {
        Ok(derived) => derived,
        Err(e) => {
            error!("Invalid benchmark data: {e}");
            eprintln!("Error: {e}");
            return Ok(Outcome::Failure);
        }
    };

    print::progress(format, out, "Creating visualizations...")?;
    let mut failed = false;
    for artifact in Artifact::iter() {
        let path = artifact.path(config);
        let result = render(artifact, &path, &table, &derived, config);

        if let Err(e) = &result {
            error!("Failed to render {artifact} to {}: {e}", path.display());
            failed = true;
        } else {
            info!("Rendered {artifact} to {}", path.display());
        }

        print::progress(format, out, &print::artifact_line(artifact, &path, &result))?;
    }

    print::print_summary(&derived.summary, format, &config.output_directory, out)?;

    Ok(if failed {
        Outcome::Failure
    } else {
        Outcome::Success
    })
}

/// Render 1 [`Artifact`] to `path`.
fn render(
    artifact: Artifact,
    path: &Path,
    table: &BenchmarkTable,
    derived: &Derived,
    config: &Config,
) -> Result<(), RenderError> {
    let scale = config.render.scale();

    match artifact {
        Artifact::Performance => render_performance(table, path, scale),
        Artifact::Speedup => render_speedup(table, &derived.series, &config.baseline, path, scale),
        Artifact::SummaryTable => render_summary_table(&derived.table, path, scale),
    }
}

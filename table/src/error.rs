//! Table error types.

//---------------------------------------------------------------------------------------------------- Import
use std::path::PathBuf;

use crate::table::MatrixSize;

//---------------------------------------------------------------------------------------------------- TableError
/// A [`BenchmarkTable`](crate::BenchmarkTable) invariant was violated.
///
/// Each variant names the invariant, so the error
/// message alone tells the user what is wrong with their data.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no matrix size columns.
    #[error("the table has no matrix size columns")]
    NoColumns,

    /// A matrix size column was `0`.
    #[error("matrix size 0 is not a valid column")]
    ZeroSize,

    /// The same matrix size was given for 2+ columns.
    #[error("matrix size {0} appears in more than one column")]
    DuplicateSize(MatrixSize),

    /// A row did not have one timing per column.
    #[error("row \"{name}\" has {found} timings, expected {expected}")]
    RaggedRow {
        name: String,
        found: usize,
        expected: usize,
    },

    /// No row is named after the baseline.
    #[error("no baseline row \"{0}\" found")]
    NoBaseline(String),

    /// More than one row is named after the baseline.
    #[error("baseline row \"{name}\" appears {count} times, expected exactly once")]
    DuplicateBaseline { name: String, count: usize },
}

//---------------------------------------------------------------------------------------------------- LoadError
/// Errors that occur when loading a [`BenchmarkTable`](crate::BenchmarkTable).
///
/// # Handling
/// [`LoadError::NotFound`] is the expected "benchmark has not been ran yet" case
/// and should be reported without treating it as a failure.
///
/// Everything else means the file exists but is not a valid benchmark table.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("{} not found!", .0.display())]
    NotFound(PathBuf),

    /// The input file exists but could not be opened.
    #[error("failed to open benchmark data: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV itself could not be read.
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The file had no header row.
    #[error("missing header row")]
    MissingHeader,

    /// The first header was not [`NAME_COLUMN`](crate::NAME_COLUMN).
    #[error("the first column must be \"Name\", found \"{0}\"")]
    MissingNameColumn(String),

    /// A header after the name column was not a matrix size.
    #[error("column header \"{0}\" is not a matrix size")]
    InvalidSize(String),

    /// A timing cell was not a number.
    #[error("timing \"{value}\" for \"{name}\" in column \"{column}\" is not a number")]
    NonNumericTiming {
        name: String,
        column: String,
        value: String,
    },

    /// A timing cell was negative, `NaN` or infinite.
    #[error("timing {value} for \"{name}\" in column \"{column}\" must be finite and non-negative")]
    InvalidTiming {
        name: String,
        column: String,
        value: f64,
    },

    /// The parsed data violated a table invariant.
    #[error(transparent)]
    Table(#[from] TableError),
}

impl LoadError {
    /// Returns `true` if this is the [`LoadError::NotFound`] case.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

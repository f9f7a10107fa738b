//! Summaries: the rendered results table and the console report.

//---------------------------------------------------------------------------------------------------- Import
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::TableError,
    stats::{largest_size_report, timing_range, LargestSizeReport},
    table::{BenchmarkTable, MatrixSize},
    timing::Timing,
};

//---------------------------------------------------------------------------------------------------- Constants
/// Smallest matrix size shown in the [`SummaryTable`].
///
/// Smaller sizes are mostly below resolution and not worth a column.
pub const SUMMARY_TABLE_MIN_SIZE: MatrixSize = MatrixSize::new(256);

/// Cell text for [`Timing::BELOW_RESOLUTION`].
pub const BELOW_RESOLUTION_MARKER: &str = "< 1";

/// Header of the implementation name column.
const IMPLEMENTATION_HEADER: &str = "Implementation";

//---------------------------------------------------------------------------------------------------- SummaryTable
/// Format a [`SummaryTable`] cell.
///
/// ```rust
/// # use matmul_viz_table::*;
/// let t = |ms| Timing::new(ms).unwrap();
///
/// assert_eq!(format_cell(t(0.0)), BELOW_RESOLUTION_MARKER);
/// assert_eq!(format_cell(t(0.4)), "0");
/// assert_eq!(format_cell(t(40.0)), "40");
/// assert_eq!(format_cell(t(1999.9)), "1999");
/// ```
pub fn format_cell(timing: Timing) -> String {
    if timing.is_below_resolution() {
        BELOW_RESOLUTION_MARKER.to_string()
    } else {
        timing.millis().trunc().to_string()
    }
}

/// The text of the results summary image.
///
/// Only matrix sizes `>=` a minimum are included, every row is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Create the [`SummaryTable`] of `table`, with columns `>= min_size`.
    pub fn new(table: &BenchmarkTable, min_size: MatrixSize) -> Self {
        let columns = table
            .sizes()
            .iter()
            .enumerate()
            .filter(|(_, size)| **size >= min_size)
            .collect::<Vec<_>>();

        let headers = std::iter::once(IMPLEMENTATION_HEADER.to_string())
            .chain(columns.iter().map(|(_, size)| format!("{size}×{size}")))
            .collect();

        let rows = table
            .rows()
            .iter()
            .map(|row| {
                std::iter::once(row.name().to_string())
                    .chain(
                        columns
                            .iter()
                            .map(|(i, _)| format_cell(row.timings()[*i])),
                    )
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    /// Column headers, starting with the implementation name column.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Cell text, one [`Vec`] per implementation, name first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

//---------------------------------------------------------------------------------------------------- BenchmarkSummary
/// The measurable [`TimingRange`](crate::TimingRange) of one implementation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowRange {
    pub name: String,
    pub min_millis: f64,
    pub max_millis: f64,
}

/// Everything printed after the images are written.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BenchmarkSummary {
    /// Rows with at least 1 measurable timing, in row order.
    pub ranges: Vec<RowRange>,
    /// Speedups at the largest matrix size.
    pub largest: LargestSizeReport,
}

impl BenchmarkSummary {
    /// Summarize `table` against `baseline`.
    ///
    /// # Errors
    /// Errors if there is not exactly 1 row named `baseline`.
    pub fn new(table: &BenchmarkTable, baseline: &str) -> Result<Self, TableError> {
        let ranges = table
            .rows()
            .iter()
            .filter_map(|row| {
                timing_range(row).map(|range| RowRange {
                    name: row.name().to_string(),
                    min_millis: range.min,
                    max_millis: range.max,
                })
            })
            .collect();

        Ok(Self {
            ranges,
            largest: largest_size_report(table, baseline)?,
        })
    }
}

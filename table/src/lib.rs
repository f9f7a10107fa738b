#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
mod error;
mod load;
mod speedup;
mod stats;
mod summary;
mod table;
mod timing;

pub use error::{LoadError, TableError};
pub use load::{from_reader, load, NAME_COLUMN};
pub use speedup::{speedups, SpeedupCase, SpeedupSeries, NO_SPEEDUP};
pub use stats::{largest_size_report, timing_range, LargestSizeReport, NamedSpeedup, TimingRange};
pub use summary::{
    format_cell, BenchmarkSummary, RowRange, SummaryTable, BELOW_RESOLUTION_MARKER,
    SUMMARY_TABLE_MIN_SIZE,
};
pub use table::{BenchmarkTable, MatrixSize, Row};
pub use timing::Timing;

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
pub(crate) mod tests;

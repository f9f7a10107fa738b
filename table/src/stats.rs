//! Min/max and largest-size reports.

//---------------------------------------------------------------------------------------------------- Import
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::TableError,
    speedup::SpeedupCase,
    table::{BenchmarkTable, MatrixSize, Row},
};

//---------------------------------------------------------------------------------------------------- TimingRange
/// The fastest and slowest measurable timings of a row, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingRange {
    pub min: f64,
    pub max: f64,
}

/// The [`TimingRange`] over the measurable timings of `row`.
///
/// Below-resolution timings are ignored, a row with
/// none measurable returns [`None`].
///
/// ```rust
/// # use matmul_viz_table::*;
/// let t = |ms| Timing::new(ms).unwrap();
///
/// let row = Row::new("Fast", vec![t(0.0), t(3.0), t(120.0)]);
/// assert_eq!(timing_range(&row), Some(TimingRange { min: 3.0, max: 120.0 }));
///
/// let row = Row::new("Fast", vec![t(0.0), t(0.0)]);
/// assert_eq!(timing_range(&row), None);
/// ```
pub fn timing_range(row: &Row) -> Option<TimingRange> {
    row.timings()
        .iter()
        .filter_map(|t| t.positive())
        .fold(None, |range, t| {
            Some(match range {
                None => TimingRange { min: t, max: t },
                Some(TimingRange { min, max }) => TimingRange {
                    min: min.min(t),
                    max: max.max(t),
                },
            })
        })
}

//---------------------------------------------------------------------------------------------------- LargestSizeReport
/// A non-baseline implementation's speedup at one matrix size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedSpeedup {
    pub name: String,
    pub speedup: f64,
}

/// Speedups at the largest matrix size of a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LargestSizeReport {
    /// The largest matrix size column.
    pub size: MatrixSize,
    /// The baseline implementation name.
    pub baseline: String,
    /// The baseline time at [`Self::size`], if measurable.
    pub baseline_millis: Option<f64>,
    /// Speedups of rows where both the row and the baseline were measurable.
    pub speedups: Vec<NamedSpeedup>,
}

/// Build the [`LargestSizeReport`] of `table`.
///
/// Unlike [`speedups`](crate::speedups), a below-resolution baseline
/// produces no speedups here rather than [`NO_SPEEDUP`](crate::NO_SPEEDUP).
///
/// # Errors
/// Errors if there is not exactly 1 row named `baseline`.
pub fn largest_size_report(
    table: &BenchmarkTable,
    baseline: &str,
) -> Result<LargestSizeReport, TableError> {
    let baseline_row = table.baseline(baseline)?;
    let size = table.largest_size();

    let reference = table.timing(baseline_row, size);

    let speedups = table
        .rows()
        .iter()
        .filter(|row| row.name() != baseline)
        .filter_map(|row| {
            let candidate = table.timing(row, size)?;
            match SpeedupCase::classify(reference?, candidate) {
                SpeedupCase::Measured(speedup) => Some(NamedSpeedup {
                    name: row.name().to_string(),
                    speedup,
                }),
                SpeedupCase::BaselineBelowResolution | SpeedupCase::Unbounded => None,
            }
        })
        .collect();

    Ok(LargestSizeReport {
        size,
        baseline: baseline.to_string(),
        baseline_millis: reference.and_then(|t| t.positive()),
        speedups,
    })
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::table;

    #[test]
    fn largest_size() {
        let table = table(
            &[128, 256],
            &[
                ("Classical", &[10.0, 40.0]),
                ("Fast", &[5.0, 10.0]),
                ("Faster", &[1.0, 0.0]),
            ],
        );
        let report = largest_size_report(&table, "Classical").unwrap();

        assert_eq!(
            report,
            LargestSizeReport {
                size: MatrixSize::new(256),
                baseline: "Classical".into(),
                baseline_millis: Some(40.0),
                speedups: vec![NamedSpeedup {
                    name: "Fast".into(),
                    speedup: 4.0,
                }],
            }
        );
    }

    #[test]
    fn largest_size_baseline_below_resolution() {
        let table = table(&[2, 4], &[("Classical", &[1.0, 0.0]), ("Fast", &[1.0, 2.0])]);
        let report = largest_size_report(&table, "Classical").unwrap();

        assert_eq!(report.baseline_millis, None);
        assert!(report.speedups.is_empty());
    }

    #[test]
    fn largest_size_uses_max_column() {
        let table = table(&[4096, 2], &[("Classical", &[100.0, 1.0]), ("Fast", &[50.0, 1.0])]);
        let report = largest_size_report(&table, "Classical").unwrap();

        assert_eq!(report.size, MatrixSize::new(4096));
        assert_eq!(report.speedups[0].speedup, 2.0);
    }
}

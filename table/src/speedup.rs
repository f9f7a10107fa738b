//! Speedup relative to a baseline implementation.

//---------------------------------------------------------------------------------------------------- Import
use tracing::debug;

use crate::{
    error::TableError,
    table::{BenchmarkTable, MatrixSize},
    timing::Timing,
};

//---------------------------------------------------------------------------------------------------- Constants
/// The speedup reported when the baseline itself was too fast to measure.
pub const NO_SPEEDUP: f64 = 1.0;

//---------------------------------------------------------------------------------------------------- SpeedupCase
/// How a (baseline, candidate) timing pair turns into a speedup.
///
/// | baseline           | candidate          | case |
/// |--------------------|--------------------|------|
/// | below resolution   | anything           | [`SpeedupCase::BaselineBelowResolution`]
/// | measured           | measured           | [`SpeedupCase::Measured`]
/// | measured           | below resolution   | [`SpeedupCase::Unbounded`]
///
/// A measured ratio that overflows to infinity or underflows
/// to `0.0` is also [`SpeedupCase::Unbounded`].
///
/// A below-resolution baseline is reported as [`NO_SPEEDUP`] even if the
/// candidate was measurable.
///
/// ```rust
/// # use matmul_viz_table::*;
/// let t = |ms| Timing::new(ms).unwrap();
///
/// assert_eq!(SpeedupCase::classify(t(0.0), t(5.0)), SpeedupCase::BaselineBelowResolution);
/// assert_eq!(SpeedupCase::classify(t(0.0), t(0.0)), SpeedupCase::BaselineBelowResolution);
/// assert_eq!(SpeedupCase::classify(t(40.0), t(10.0)), SpeedupCase::Measured(4.0));
/// assert_eq!(SpeedupCase::classify(t(40.0), t(0.0)), SpeedupCase::Unbounded);
///
/// assert_eq!(SpeedupCase::BaselineBelowResolution.value(), Some(NO_SPEEDUP));
/// assert_eq!(SpeedupCase::Unbounded.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpeedupCase {
    /// The baseline was too fast to measure.
    BaselineBelowResolution,
    /// Both were measured, `baseline / candidate`, finite and `> 0.0`.
    Measured(f64),
    /// The candidate was too fast to measure, or the ratio is not representable.
    Unbounded,
}

impl SpeedupCase {
    /// Classify a timing pair.
    pub fn classify(baseline: Timing, candidate: Timing) -> Self {
        match (baseline.positive(), candidate.positive()) {
            (None, _) => Self::BaselineBelowResolution,
            (Some(baseline), Some(candidate)) => {
                let speedup = baseline / candidate;
                if speedup.is_finite() && speedup > 0.0 {
                    Self::Measured(speedup)
                } else {
                    Self::Unbounded
                }
            }
            (Some(_), None) => Self::Unbounded,
        }
    }

    /// The plotted speedup, [`None`] if this point is dropped.
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::BaselineBelowResolution => Some(NO_SPEEDUP),
            Self::Measured(speedup) => Some(speedup),
            Self::Unbounded => None,
        }
    }
}

//---------------------------------------------------------------------------------------------------- SpeedupSeries
/// Speedup of one implementation over the baseline, across matrix sizes.
///
/// [`SpeedupCase::Unbounded`] points are not in [`SpeedupSeries::points`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupSeries {
    name: String,
    points: Vec<(MatrixSize, f64)>,
}

impl SpeedupSeries {
    /// The implementation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `(size, speedup)` pairs in column order.
    pub fn points(&self) -> &[(MatrixSize, f64)] {
        &self.points
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Compute the [`SpeedupSeries`] of every non-baseline row, in row order.
///
/// # Errors
/// Errors if there is not exactly 1 row named `baseline`.
pub fn speedups(table: &BenchmarkTable, baseline: &str) -> Result<Vec<SpeedupSeries>, TableError> {
    let baseline_row = table.baseline(baseline)?;

    let series = table
        .rows()
        .iter()
        .filter(|row| row.name() != baseline)
        .map(|row| {
            let points = table
                .points(row)
                .zip(baseline_row.timings())
                .filter_map(|((size, candidate), reference)| {
                    SpeedupCase::classify(*reference, candidate)
                        .value()
                        .map(|speedup| (size, speedup))
                })
                .collect::<Vec<_>>();

            debug!(
                name = row.name(),
                points = points.len(),
                dropped = table.sizes().len() - points.len(),
                "computed speedup series"
            );

            SpeedupSeries {
                name: row.name().to_string(),
                points,
            }
        })
        .collect();

    Ok(series)
}

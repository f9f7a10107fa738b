//! Axis ranges and labels.

//---------------------------------------------------------------------------------------------------- Import
use std::ops::Range;

use matmul_viz_table::{MatrixSize, Timing};

//---------------------------------------------------------------------------------------------------- Constants
/// Where below-resolution timings are drawn on a log time axis, milliseconds.
///
/// Display only, never used in a computation.
pub const LOG_FLOOR_MILLIS: f64 = 0.1;

/// Padding on each side of a base-2 axis, in powers of 2.
const LOG2_PADDING: f64 = 0.5;

/// Multiplicative padding on each side of a log axis.
const LOG_PADDING: f64 = 1.5;

/// Headroom above the largest value of a linear axis.
const LINEAR_HEADROOM: f64 = 1.05;

/// Range of a log axis with nothing to draw.
const EMPTY_LOG_RANGE: Range<f64> = 0.1..10.0;

/// Largest exponent labeled on a base-2 axis, matrix sizes are [`u32`].
const MAX_LOG2_LABEL: f64 = 31.0;

//---------------------------------------------------------------------------------------------------- Free functions
/// The x range of a base-2 matrix size axis.
///
/// Values on this axis are [`MatrixSize::log2`].
pub(crate) fn log2_range(sizes: &[MatrixSize]) -> Range<f64> {
    let (min, max) = sizes
        .iter()
        .map(|size| size.log2())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), x| {
            (min.min(x), max.max(x))
        });

    if min > max {
        return 0.0..1.0;
    }

    (min - LOG2_PADDING)..(max + LOG2_PADDING)
}

/// Label a tick of a base-2 axis: integer powers become the
/// matrix size they stand for, everything else is unlabeled.
pub(crate) fn log2_label(x: f64) -> String {
    let exponent = x.round();

    if (x - exponent).abs() > 1e-6 || !(0.0..=MAX_LOG2_LABEL).contains(&exponent) {
        return String::new();
    }

    exponent.exp2().to_string()
}

/// How many ticks a base-2 axis over `range` needs for 1 per power of 2.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the range spans at most ~32 powers of 2"
)]
pub(crate) fn log2_tick_count(range: &Range<f64>) -> usize {
    ((range.end - range.start).ceil().max(1.0) as usize) + 1
}

/// The y range of a linear axis starting at `0`.
pub(crate) fn linear_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let max = values.into_iter().fold(0.0_f64, f64::max);

    if max <= 0.0 {
        return 0.0..1.0;
    }

    0.0..(max * LINEAR_HEADROOM)
}

/// The y range of a log axis, covering the positive `values`.
pub(crate) fn log_range(values: impl IntoIterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .into_iter()
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        });

    if min > max {
        return EMPTY_LOG_RANGE;
    }

    (min / LOG_PADDING)..(max * LOG_PADDING)
}

/// The value drawn for `timing` on a log time axis.
pub(crate) fn log_display_millis(timing: Timing) -> f64 {
    timing.positive().unwrap_or(LOG_FLOOR_MILLIS)
}

//! Benchmark timings.

//---------------------------------------------------------------------------------------------------- Timing
/// A single benchmark measurement, in milliseconds.
///
/// Always finite and non-negative.
///
/// The benchmark runner writes whole milliseconds, so runs that
/// finish in under `1ms` are stored as `0`. That value does not mean
/// "took no time", it means "too fast to measure" and is
/// named [`Timing::BELOW_RESOLUTION`].
///
/// ```rust
/// # use matmul_viz_table::Timing;
/// let t = Timing::new(12.5).unwrap();
/// assert_eq!(t.millis(), 12.5);
/// assert_eq!(t.positive(), Some(12.5));
///
/// let zero = Timing::new(0.0).unwrap();
/// assert!(zero.is_below_resolution());
/// assert_eq!(zero.positive(), None);
///
/// assert!(Timing::new(-1.0).is_none());
/// assert!(Timing::new(f64::NAN).is_none());
/// assert!(Timing::new(f64::INFINITY).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Timing(f64);

impl Timing {
    /// The stored value for runs that were too fast to measure.
    pub const BELOW_RESOLUTION: Self = Self(0.0);

    /// Create a [`Timing`] from milliseconds.
    ///
    /// Returns [`None`] if `millis` is negative, `NaN` or infinite.
    pub fn new(millis: f64) -> Option<Self> {
        if !millis.is_finite() || millis < 0.0 {
            return None;
        }

        // Folds `-0.0` into the sentinel.
        if millis == 0.0 {
            return Some(Self::BELOW_RESOLUTION);
        }

        Some(Self(millis))
    }

    /// The raw value in milliseconds.
    pub const fn millis(self) -> f64 {
        self.0
    }

    /// Was this run too fast to measure?
    pub fn is_below_resolution(self) -> bool {
        self.0 == 0.0
    }

    /// The value in milliseconds if it was measurable.
    pub fn positive(self) -> Option<f64> {
        (self.0 > 0.0).then_some(self.0)
    }
}

//! Shared test helpers.

use crate::{BenchmarkTable, MatrixSize, Row, Timing};

/// `[2, 4]` -> `[MatrixSize(2), MatrixSize(4)]`.
pub(crate) fn sizes(sizes: &[u32]) -> Vec<MatrixSize> {
    sizes.iter().copied().map(MatrixSize::new).collect()
}

/// Create a [`Row`], panicking on invalid timings.
pub(crate) fn row(name: &str, millis: &[f64]) -> Row {
    Row::new(
        name,
        millis.iter().map(|ms| Timing::new(*ms).unwrap()).collect(),
    )
}

/// Create a valid [`BenchmarkTable`].
pub(crate) fn table(sizes: &[u32], rows: &[(&str, &[f64])]) -> BenchmarkTable {
    BenchmarkTable::new(
        self::sizes(sizes),
        rows.iter().map(|(name, millis)| row(name, millis)).collect(),
    )
    .unwrap()
}

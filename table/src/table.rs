//! The benchmark table.

//---------------------------------------------------------------------------------------------------- Import
use std::{collections::BTreeSet, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{error::TableError, timing::Timing};

//---------------------------------------------------------------------------------------------------- MatrixSize
/// The side length `n` of an `n × n` matrix.
///
/// Columns of a [`BenchmarkTable`] are indexed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MatrixSize(u32);

impl MatrixSize {
    /// Create a new [`MatrixSize`].
    ///
    /// `0` is accepted here for use in thresholds, but it is
    /// not a matrix size: [`BenchmarkTable::new`] rejects it.
    pub const fn new(n: u32) -> Self {
        Self(n)
    }

    /// The side length.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `log2(n)`, the position of this size on a base-2 axis.
    ///
    /// ```rust
    /// # use matmul_viz_table::MatrixSize;
    /// assert_eq!(MatrixSize::new(1024).log2(), 10.0);
    /// ```
    pub fn log2(self) -> f64 {
        f64::from(self.0).log2()
    }
}

impl fmt::Display for MatrixSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//---------------------------------------------------------------------------------------------------- Row
/// One implementation's timings, one per [`BenchmarkTable::sizes`] column.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    name: String,
    timings: Vec<Timing>,
}

impl Row {
    /// Create a new [`Row`].
    pub fn new(name: impl Into<String>, timings: Vec<Timing>) -> Self {
        Self {
            name: name.into(),
            timings,
        }
    }

    /// The implementation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Timings in column order.
    pub fn timings(&self) -> &[Timing] {
        &self.timings
    }
}

//---------------------------------------------------------------------------------------------------- BenchmarkTable
/// Benchmark timings: implementation name × matrix size → milliseconds.
///
/// # Invariant
/// - There is at least 1 matrix size column
/// - Matrix sizes are non-zero and unique
/// - Every [`Row`] has exactly 1 timing per column
///
/// These are checked in [`BenchmarkTable::new`] and
/// the table cannot be mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkTable {
    sizes: Vec<MatrixSize>,
    rows: Vec<Row>,
    largest: MatrixSize,
}

impl BenchmarkTable {
    /// Create a new [`BenchmarkTable`].
    ///
    /// Column and row order are kept as given.
    ///
    /// # Errors
    /// Returns an error naming the violated invariant, see [`BenchmarkTable`].
    pub fn new(sizes: Vec<MatrixSize>, rows: Vec<Row>) -> Result<Self, TableError> {
        let Some(largest) = sizes.iter().max().copied() else {
            return Err(TableError::NoColumns);
        };

        let mut seen = BTreeSet::new();
        for size in &sizes {
            if size.0 == 0 {
                return Err(TableError::ZeroSize);
            }
            if !seen.insert(*size) {
                return Err(TableError::DuplicateSize(*size));
            }
        }

        for row in &rows {
            if row.timings.len() != sizes.len() {
                return Err(TableError::RaggedRow {
                    name: row.name.clone(),
                    found: row.timings.len(),
                    expected: sizes.len(),
                });
            }
        }

        Ok(Self {
            sizes,
            rows,
            largest,
        })
    }

    /// Matrix size columns, in file order.
    pub fn sizes(&self) -> &[MatrixSize] {
        &self.sizes
    }

    /// All rows, in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The first [`Row`] named `name`.
    pub fn row(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// The largest matrix size column.
    pub const fn largest_size(&self) -> MatrixSize {
        self.largest
    }

    /// The column index of `size`.
    pub fn column(&self, size: MatrixSize) -> Option<usize> {
        self.sizes.iter().position(|s| *s == size)
    }

    /// The timing of `row` at `size`.
    pub fn timing(&self, row: &Row, size: MatrixSize) -> Option<Timing> {
        self.column(size)
            .and_then(|i| row.timings.get(i))
            .copied()
    }

    /// `(size, timing)` pairs of `row`, in column order.
    pub fn points<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = (MatrixSize, Timing)> + 'a {
        self.sizes.iter().copied().zip(row.timings.iter().copied())
    }

    /// The baseline row every speedup is computed against.
    ///
    /// # Errors
    /// Exactly 1 row must be named `name`, else this returns
    /// [`TableError::NoBaseline`] or [`TableError::DuplicateBaseline`].
    pub fn baseline(&self, name: &str) -> Result<&Row, TableError> {
        let mut matches = self.rows.iter().filter(|row| row.name == name);

        let Some(baseline) = matches.next() else {
            return Err(TableError::NoBaseline(name.to_string()));
        };

        let extra = matches.count();
        if extra != 0 {
            return Err(TableError::DuplicateBaseline {
                name: name.to_string(),
                count: extra + 1,
            });
        }

        Ok(baseline)
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tests::{row, sizes, table};

    #[test]
    fn largest_size_is_max_not_last() {
        let table = table(&[512, 2048, 1024], &[("Classical", &[1.0, 2.0, 3.0])]);
        assert_eq!(table.largest_size(), MatrixSize::new(2048));
    }

    #[test]
    fn no_columns() {
        let err = BenchmarkTable::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, TableError::NoColumns);
    }

    #[test]
    fn zero_size() {
        let err = BenchmarkTable::new(sizes(&[0, 4]), vec![row("Fast", &[1.0, 2.0])]).unwrap_err();
        assert_eq!(err, TableError::ZeroSize);
    }

    #[test]
    fn duplicate_size() {
        let err = BenchmarkTable::new(sizes(&[2, 4, 2]), vec![]).unwrap_err();
        assert_eq!(err, TableError::DuplicateSize(MatrixSize::new(2)));
    }

    #[test]
    fn ragged_row() {
        let err = BenchmarkTable::new(sizes(&[2, 4]), vec![row("Fast", &[1.0])]).unwrap_err();
        assert_eq!(
            err,
            TableError::RaggedRow {
                name: "Fast".into(),
                found: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn baseline_lookup() {
        let table = table(&[2], &[("Classical", &[1.0]), ("Fast", &[0.5])]);
        assert_eq!(table.baseline("Classical").unwrap().name(), "Classical");

        assert_eq!(
            table.baseline("Naive").unwrap_err(),
            TableError::NoBaseline("Naive".into())
        );
    }

    #[test]
    fn duplicate_baseline() {
        let table = table(
            &[2],
            &[("Classical", &[1.0]), ("Fast", &[0.5]), ("Classical", &[2.0])],
        );
        assert_eq!(
            table.baseline("Classical").unwrap_err(),
            TableError::DuplicateBaseline {
                name: "Classical".into(),
                count: 2,
            }
        );
    }

    #[test]
    fn timing_by_size() {
        let table = table(&[128, 256], &[("Classical", &[10.0, 40.0])]);
        let row = table.row("Classical").unwrap();

        assert_eq!(table.timing(row, MatrixSize::new(256)).unwrap().millis(), 40.0);
        assert_eq!(table.timing(row, MatrixSize::new(512)), None);
    }
}

//! CSV loading.
//!
//! The benchmark runner writes:
//!
//! ```text
//! Name,2,4,8,...,4096
//! Classical,0,0,0,...,61234
//! Strassen,0,0,0,...,40112
//! ```

//---------------------------------------------------------------------------------------------------- Import
use std::{fs::File, io, path::Path};

use tracing::{debug, instrument};

use crate::{
    error::LoadError,
    table::{BenchmarkTable, MatrixSize, Row},
    timing::Timing,
};

//---------------------------------------------------------------------------------------------------- Constants
/// The header of the first column, holding implementation names.
pub const NAME_COLUMN: &str = "Name";

//---------------------------------------------------------------------------------------------------- Free functions
/// Load a [`BenchmarkTable`] from the CSV file at `path`.
///
/// # Errors
/// A missing file returns [`LoadError::NotFound`],
/// which callers should report and exit cleanly on.
///
/// All other errors mean the file is not a valid benchmark table.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkTable, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound(path.to_path_buf())
        } else {
            LoadError::Io(e)
        }
    })?;

    from_reader(file)
}

/// Load a [`BenchmarkTable`] from CSV bytes.
///
/// # Errors
/// See [`load`].
pub fn from_reader(reader: impl io::Read) -> Result<BenchmarkTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        // Row lengths are checked by `BenchmarkTable::new`, which names the row.
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut columns = headers.iter();

    match columns.next() {
        None => return Err(LoadError::MissingHeader),
        Some(NAME_COLUMN) => (),
        Some(other) => return Err(LoadError::MissingNameColumn(other.to_string())),
    }

    let sizes = columns
        .map(|header| {
            header
                .parse::<u32>()
                .ok()
                .filter(|n| *n != 0)
                .map(MatrixSize::new)
                .ok_or_else(|| LoadError::InvalidSize(header.to_string()))
        })
        .collect::<Result<Vec<MatrixSize>, LoadError>>()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut fields = record.iter();

        let name = fields.next().unwrap_or_default().to_string();

        let timings = fields
            .enumerate()
            .map(|(i, value)| {
                // `+ 1` skips the name column.
                let column = headers.get(i + 1).unwrap_or_default();
                parse_timing(&name, column, value)
            })
            .collect::<Result<Vec<Timing>, LoadError>>()?;

        rows.push(Row::new(name, timings));
    }

    debug!(rows = rows.len(), columns = sizes.len(), "parsed benchmark CSV");

    Ok(BenchmarkTable::new(sizes, rows)?)
}

/// Parse a single timing cell.
fn parse_timing(name: &str, column: &str, value: &str) -> Result<Timing, LoadError> {
    let millis = value
        .parse::<f64>()
        .map_err(|_| LoadError::NonNumericTiming {
            name: name.to_string(),
            column: column.to_string(),
            value: value.to_string(),
        })?;

    Timing::new(millis).ok_or_else(|| LoadError::InvalidTiming {
        name: name.to_string(),
        column: column.to_string(),
        value: millis,
    })
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::TableError, tests::table};

    const CSV: &str = "Name,128,256\nClassical,10,40\nFast,5,10\n";

    #[test]
    fn parse() {
        let loaded = from_reader(CSV.as_bytes()).unwrap();
        let expected = table(&[128, 256], &[("Classical", &[10.0, 40.0]), ("Fast", &[5.0, 10.0])]);
        assert_eq!(loaded, expected);
    }

    #[test]
    fn floats_zeros_and_whitespace() {
        let csv = "Name, 2, 4\nClassical, 0, 1.5\n";
        let loaded = from_reader(csv.as_bytes()).unwrap();
        let row = loaded.row("Classical").unwrap();

        assert!(row.timings()[0].is_below_resolution());
        assert_eq!(row.timings()[1].millis(), 1.5);
    }

    #[test]
    fn load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output_data.csv");
        File::create(&path)
            .unwrap()
            .write_all(CSV.as_bytes())
            .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.rows().len(), 2);
    }

    #[test]
    fn not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let err = load(&path).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), format!("{} not found!", path.display()));
    }

    #[test]
    fn empty_input() {
        let err = from_reader(&b""[..]).unwrap_err();
        assert!(matches!(err, LoadError::MissingHeader), "{err:?}");
    }

    #[test]
    fn wrong_first_column() {
        let err = from_reader("Impl,2\nClassical,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingNameColumn(s) if s == "Impl"));
    }

    #[test]
    fn non_numeric_size() {
        let err = from_reader("Name,2,big\nClassical,1,2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSize(s) if s == "big"));
    }

    #[test]
    fn zero_size() {
        let err = from_reader("Name,0\nClassical,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidSize(s) if s == "0"));
    }

    #[test]
    fn non_numeric_timing() {
        let err = from_reader("Name,2,4\nFast,1,slow\n".as_bytes()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "timing \"slow\" for \"Fast\" in column \"4\" is not a number"
        );
    }

    #[test]
    fn negative_timing() {
        let err = from_reader("Name,2\nFast,-3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidTiming { value, .. } if value < 0.0));
    }

    #[test]
    fn ragged_row() {
        let err = from_reader("Name,2,4\nClassical,1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Table(TableError::RaggedRow { found: 1, expected: 2, .. })
        ));
    }
}

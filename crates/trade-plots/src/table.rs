// File: crates/trade-plots/src/table.rs
// Summary: In-memory delimited table (header + records) with column lookup and numeric views.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read record {record} of {}", path.display())]
    Read {
        path: PathBuf,
        record: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{} has no header row", path.display())]
    NoHeader { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TableError>;

/// A loaded table. Cells are kept as text and parsed on demand, so a column
/// is only interpreted as numbers when something asks for it.
#[derive(Clone, Debug)]
pub struct Table {
    path: PathBuf,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Load a comma-delimited file with a header row. Cells are trimmed;
    /// header names are kept verbatim, so `" Price"` is not `"Price"`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Fields)
            .from_path(&path)
            .map_err(|source| TableError::Open { path: path.clone(), source })?;

        let columns: Vec<String> = rdr
            .headers()
            .map_err(|source| TableError::Read { path: path.clone(), record: 0, source })?
            .iter()
            .map(str::to_string)
            .collect();
        if columns.is_empty() {
            return Err(TableError::NoHeader { path });
        }

        let mut rows = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|source| TableError::Read { path: path.clone(), record: i + 1, source })?;
            rows.push(rec.iter().map(str::to_string).collect());
        }
        log::debug!("loaded {} rows x {} columns from {}", rows.len(), columns.len(), path.display());

        Ok(Self { path, columns, rows })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Column names in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column named `name`.
    fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The column as numbers. Blank, unparsable and missing cells become NaN.
    pub fn values(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.index_of(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map_or(f64::NAN, |cell| parse_cell(cell)))
                .collect(),
        )
    }

    /// Values suitable for a horizontal axis: the numeric column, or the row
    /// index when no cell of the column is numeric (e.g. date strings).
    pub fn axis_values(&self, name: &str) -> Option<Vec<f64>> {
        let values = self.values(name)?;
        if !values.is_empty() && values.iter().all(|v| v.is_nan()) {
            log::info!("column {name:?} of {} is not numeric; using row index", self.path.display());
            return Some((0..values.len()).map(|i| i as f64).collect());
        }
        Some(values)
    }
}

fn parse_cell(cell: &str) -> f64 {
    cell.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// CSV file in the system temp dir, removed on drop.
    struct TmpCsv(PathBuf);

    impl TmpCsv {
        fn new(name: &str, contents: &str) -> Self {
            let path = std::env::temp_dir().join(format!("trade-plots-{}-{name}", std::process::id()));
            std::fs::write(&path, contents).expect("write tmp csv");
            Self(path)
        }
    }

    impl Drop for TmpCsv {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    #[test]
    fn loads_header_and_rows() {
        let f = TmpCsv::new("basic.csv", "Time,Price\n0,100.5\n1, 101.25 \n");
        let t = Table::load(&f.0).expect("load");
        assert_eq!(t.path(), f.0.as_path());
        assert_eq!(t.columns(), &["Time".to_string(), "Price".to_string()]);
        assert_eq!(t.len(), 2);
        assert!(t.has_column("Price"));
        assert!(!t.has_column("price"));
        assert_eq!(t.values("Price"), Some(vec![100.5, 101.25]));
        assert_eq!(t.values("Volume"), None);
    }

    #[test]
    fn header_names_are_not_trimmed() {
        let f = TmpCsv::new("spaced.csv", "Time, Price\n0,1\n1,2\n");
        let t = Table::load(&f.0).expect("load");
        assert_eq!(t.columns(), &["Time".to_string(), " Price".to_string()]);
        assert!(t.has_column(" Price"));
        assert!(!t.has_column("Price"));
        assert_eq!(t.values(" Price"), Some(vec![1.0, 2.0]));
    }

    #[test]
    fn bad_and_missing_cells_are_nan() {
        let f = TmpCsv::new("ragged.csv", "Time,Price,Volume\n0,1,5\n1,,6\n2,abc\n");
        let t = Table::load(&f.0).expect("load");
        let price = t.values("Price").expect("price");
        assert_eq!(price[0], 1.0);
        assert!(price[1].is_nan());
        assert!(price[2].is_nan());
        let vol = t.values("Volume").expect("volume");
        assert_eq!(vol[1], 6.0);
        assert!(vol[2].is_nan());
    }

    #[test]
    fn non_numeric_axis_falls_back_to_row_index() {
        let f = TmpCsv::new("dates.csv", "Time,Price\n2024-01-01,1\n2024-01-02,2\n2024-01-03,3\n");
        let t = Table::load(&f.0).expect("load");
        assert_eq!(t.axis_values("Time"), Some(vec![0.0, 1.0, 2.0]));

        let f = TmpCsv::new("numeric_axis.csv", "Time,Price\n5,1\nx,2\n7,3\n");
        let t = Table::load(&f.0).expect("load");
        let x = t.axis_values("Time").expect("time");
        assert_eq!(x[0], 5.0);
        assert!(x[1].is_nan());
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = Table::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, TableError::Open { .. }));
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }

    #[test]
    fn empty_file_has_no_header() {
        let f = TmpCsv::new("empty.csv", "");
        let err = Table::load(&f.0).unwrap_err();
        assert!(matches!(err, TableError::NoHeader { .. }));
    }
}

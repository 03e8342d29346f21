use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::ConsensusError;

/// Cell values treated as missing when parsing a consensus table.
///
/// Mirrors the missing-value tokens recognised by common dataframe readers so that
/// reports which already carry `NA`/`NaN` markers are rendered consistently.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if a raw cell value denotes a missing value
pub fn is_missing_value(value: &str) -> bool {
    MISSING_VALUE_TOKENS.contains(&value)
}

/// Consensus feature table with named columns.
///
/// The first column is the row-type/id column (`#CONSENSUS` in OpenMS reports).
/// Cells are kept as their raw text; missing cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsensusTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl ConsensusTable {
    /// Build a table from already-split headers and rows
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self, ConsensusError> {
        if headers.is_empty() {
            return Err(ConsensusError::EmptyTable);
        }
        let mut table = Self {
            headers,
            rows: Vec::with_capacity(rows.len()),
        };
        for (i, row) in rows.into_iter().enumerate() {
            table.push_row(i, row)?;
        }
        Ok(table)
    }

    /// Parse a delimited consensus table from a file
    pub fn from_path<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self, ConsensusError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), delimiter)
    }

    /// Parse a table from consensus lines already held in memory
    pub fn from_lines(lines: &[String], delimiter: u8) -> Result<Self, ConsensusError> {
        let mut buffer = String::new();
        for line in lines {
            buffer.push_str(line);
            buffer.push('\n');
        }
        Self::from_reader(buffer.as_bytes(), delimiter)
    }

    /// Parse a delimited consensus table from a reader.
    ///
    /// The first record is the header. Rows shorter than the header are padded
    /// with missing cells; longer rows are rejected.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, ConsensusError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(ConsensusError::EmptyTable);
        }

        let mut table = Self {
            headers,
            rows: Vec::new(),
        };

        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = record
                .iter()
                .map(|value| {
                    if is_missing_value(value) {
                        None
                    } else {
                        Some(value.to_string())
                    }
                })
                .collect();
            table.push_row(i, row)?;
        }

        debug!(
            "Parsed consensus table with {} rows and {} columns",
            table.row_count(),
            table.column_count()
        );
        Ok(table)
    }

    fn push_row(&mut self, index: usize, mut row: Vec<Option<String>>) -> Result<(), ConsensusError> {
        let expected = self.headers.len();
        if row.len() > expected {
            return Err(ConsensusError::RaggedRow {
                row: index,
                expected,
                found: row.len(),
            });
        }
        row.resize(expected, None);
        self.rows.push(row);
        Ok(())
    }

    /// Column names in file order, id column first
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (the header is not counted)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of a named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate over the cells of a named column
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = Option<&'a str>> + 'a> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| row[index].as_deref()))
    }

    /// Single cell lookup; `None` for missing values and out-of-range positions
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Data rows
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Tab-separated preview of the header and the first `n` rows, for console output
    pub fn preview(&self, n: usize) -> String {
        let mut out = self.headers.join("\t");
        for row in self.rows.iter().take(n) {
            out.push('\n');
            let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("NaN")).collect();
            out.push_str(&cells.join("\t"));
        }
        if self.rows.len() > n {
            let _ = write!(out, "\n... ({} rows total)", self.rows.len());
        }
        out
    }
}
